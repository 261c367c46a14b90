//! # Utilities - *Internal Helper Utilities*
//!
//! A small collection of index resolution helpers shared by scalar access,
//! selection and gather.

use crate::enums::error::MinlistError;
use crate::traits::type_unions::TakeIndex;

/// Resolves a possibly negative position against `len`, counting negative
/// values from the end.
#[inline]
pub fn resolve_position(index: i64, len: usize) -> Result<usize, MinlistError> {
    let resolved = if index < 0 {
        (len as i64).checked_add(index)
    } else {
        Some(index)
    };
    match resolved {
        Some(pos) if pos >= 0 && (pos as u64) < len as u64 => Ok(pos as usize),
        _ => Err(MinlistError::IndexOutOfBounds { index, len }),
    }
}

/// Like `resolve_position`, but for a generic integer index.
#[inline]
pub fn resolve_index<I: TakeIndex>(index: I, len: usize) -> Result<usize, MinlistError> {
    match index.to_position() {
        Some(pos) => resolve_position(pos, len),
        None => Err(MinlistError::IndexOutOfBounds { index: i64::MAX, len }),
    }
}

/// Rejects any index below the `-1` fill marker before lookups start.
#[inline]
pub fn validate_fill_indices<I: TakeIndex>(indices: &[I]) -> Result<(), MinlistError> {
    for &idx in indices {
        if let Some(pos) = idx.to_position() {
            if pos < -1 {
                return Err(MinlistError::InvalidFillIndex { index: pos });
            }
        }
    }
    Ok(())
}

/// Truncates `s` to at most `width` characters.
#[inline]
pub fn truncate_chars(mut s: String, width: usize) -> String {
    if let Some((byte_idx, _)) = s.char_indices().nth(width) {
        s.truncate(byte_idx);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_position() {
        assert_eq!(resolve_position(0, 3), Ok(0));
        assert_eq!(resolve_position(2, 3), Ok(2));
        assert_eq!(resolve_position(-1, 3), Ok(2));
        assert_eq!(resolve_position(-3, 3), Ok(0));
        assert_eq!(
            resolve_position(3, 3),
            Err(MinlistError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            resolve_position(-4, 3),
            Err(MinlistError::IndexOutOfBounds { index: -4, len: 3 })
        );
        assert!(resolve_position(0, 0).is_err());
        assert!(resolve_position(-1, 0).is_err());
        assert!(resolve_position(i64::MIN, 5).is_err());
    }

    #[test]
    fn test_resolve_index_overflowing_unsigned() {
        assert!(resolve_index(u64::MAX, 10).is_err());
        assert_eq!(resolve_index(1u8, 10), Ok(1));
    }

    #[test]
    fn test_validate_fill_indices() {
        assert!(validate_fill_indices(&[0i64, -1, 5]).is_ok());
        assert_eq!(
            validate_fill_indices(&[0i32, -2]),
            Err(MinlistError::InvalidFillIndex { index: -2 })
        );
        assert!(validate_fill_indices::<usize>(&[]).is_ok());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("['a', 'b']".into(), 4), "['a'");
        assert_eq!(truncate_chars("nan".into(), 10), "nan");
        assert_eq!(truncate_chars("äöü".into(), 2), "äö");
        assert_eq!(truncate_chars("abc".into(), 0), "");
    }
}
