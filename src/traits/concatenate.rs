//! # Concatenate Trait Module
//!
//! Provides uniform pairwise concatenation across Minlist types.
//!
//! ## Important: Consuming Semantics
//! **The `concat` method consumes both inputs.**
//! The first input's buffer is reused and the second is appended to it.
//! If you need to keep an input, clone it first:
//! ```rust
//! # use minlist::{Concatenate, ListArray, ListSlot};
//! let a = ListArray::from_sequence(&[ListSlot::from("ab")]);
//! let b = ListArray::from_sequence(&[ListSlot::Null]);
//! let joined = a.clone().concat(b).unwrap();
//! assert_eq!(joined.len(), 2);
//! assert_eq!(a.len(), 1);
//! ```
//!
//! For joining many arrays at once, prefer `ListArray::concat_same_type`,
//! which allocates the output exactly once.

use crate::enums::error::MinlistError;
use crate::{ListArray, Vec64};

/// Concatenate trait for combining two instances of the same type.
///
/// Returns `Result<Self, MinlistError>` where `Self` is the concatenated result.
pub trait Concatenate {
    /// Concatenates `self` with `other`, **consuming both** and returning a new instance.
    fn concat(self, other: Self) -> Result<Self, MinlistError>
    where
        Self: Sized;
}

impl<T> Concatenate for Vec64<T> {
    fn concat(mut self, other: Self) -> Result<Self, MinlistError> {
        self.extend(other.into_iter());
        Ok(self)
    }
}

/// List arrays share one dtype, so concatenation never fails.
impl Concatenate for ListArray {
    fn concat(self, other: Self) -> Result<Self, MinlistError> {
        let slots = self.into_slots().concat(other.into_slots())?;
        Ok(ListArray::new(slots))
    }
}

#[cfg(test)]
mod concatenate_tests {
    use super::*;
    use crate::ListSlot;
    use vec64::vec64;

    #[test]
    fn test_vec64_concatenate() {
        let v1 = vec64![1, 2, 3];
        let v2 = vec64![4, 5, 6];
        let result = v1.concat(v2).unwrap();
        assert_eq!(result.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_list_array_concatenate_in_order() {
        let a = ListArray::from_sequence(&[ListSlot::from("a"), ListSlot::Null]);
        let b = ListArray::from_sequence(&[ListSlot::from("bc")]);
        let result = a.concat(b).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.get(0).unwrap(), &ListSlot::from("a"));
        assert!(result.get(1).unwrap().is_null());
        assert_eq!(result.get(2).unwrap(), &ListSlot::from("bc"));
    }

    #[test]
    fn test_list_array_concatenate_empty() {
        let a = ListArray::default();
        let b = ListArray::from_sequence(&[ListSlot::empty()]);
        let result = a.concat(b).unwrap();
        assert_eq!(result.len(), 1);
        assert!(!result.get(0).unwrap().is_null());
    }
}
