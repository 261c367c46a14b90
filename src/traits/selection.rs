//! # **Selection Traits** - *Slices, index lists and boolean masks*
//!
//! Input types accepted by `ListArray::select`.
//!
//! ## Architecture
//! - **ArraySelector**: implemented on what the user writes when selecting,
//!   e.g. `arr.select(1..3)`, `arr.select(&[2, 0])`, `arr.select(&[true, false, true])`.
//! - Every selector resolves to an ordered list of physical positions.
//!
//! ## Semantics
//! - Ranges behave like slices: they clamp to the array length and never fail.
//!   Native ranges take `usize` bounds with step 1; `Slice` adds negative
//!   bounds and a step, e.g. `Slice::from_start(-2)` or `Slice::every(2)`.
//! - Index lists keep the given order and may repeat; signed lists count
//!   negative values from the end. Any position out of range fails with
//!   `MinlistError::IndexOutOfBounds`.
//! - Boolean masks must have exactly one entry per slot, otherwise
//!   `MinlistError::LengthMismatch`.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::enums::error::MinlistError;
use crate::utils::resolve_position;

/// Trait for types that can specify a selection over a 1-d array.
pub trait ArraySelector {
    /// Resolve this selection to positions within an array of `len` slots.
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError>;

    /// Returns true if this selector represents a contiguous range.
    /// Range types return true. Index lists and masks return false.
    fn is_contiguous(&self) -> bool {
        false
    }
}

// Ranges

fn clamp_range(start: usize, end: usize, len: usize) -> Vec<usize> {
    let end = end.min(len);
    let start = start.min(end);
    (start..end).collect()
}

impl ArraySelector for Range<usize> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        Ok(clamp_range(self.start, self.end, len))
    }

    fn is_contiguous(&self) -> bool {
        true
    }
}

impl ArraySelector for RangeFrom<usize> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        Ok(clamp_range(self.start, len, len))
    }

    fn is_contiguous(&self) -> bool {
        true
    }
}

impl ArraySelector for RangeTo<usize> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        Ok(clamp_range(0, self.end, len))
    }

    fn is_contiguous(&self) -> bool {
        true
    }
}

impl ArraySelector for RangeToInclusive<usize> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        Ok(clamp_range(0, self.end.saturating_add(1), len))
    }

    fn is_contiguous(&self) -> bool {
        true
    }
}

impl ArraySelector for RangeFull {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        Ok((0..len).collect())
    }

    fn is_contiguous(&self) -> bool {
        true
    }
}

impl ArraySelector for RangeInclusive<usize> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        Ok(clamp_range(*self.start(), self.end().saturating_add(1), len))
    }

    fn is_contiguous(&self) -> bool {
        true
    }
}

// Stepped slices

/// A slice with optional signed bounds and a step.
///
/// Negative bounds count from the end and all bounds clamp to the array,
/// so a slice never fails on position. A negative step walks backwards
/// from `start` (default: the last slot). A zero step fails with
/// `MinlistError::ZeroSliceStep`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl Slice {
    #[inline]
    pub const fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Self { start, stop, step }
    }

    /// Everything from `start` to the end.
    #[inline]
    pub const fn from_start(start: i64) -> Self {
        Self::new(Some(start), None, None)
    }

    /// Every `step`-th slot across the whole array.
    #[inline]
    pub const fn every(step: i64) -> Self {
        Self::new(None, None, Some(step))
    }

    /// The same slots, last to first.
    #[inline]
    pub const fn reversed() -> Self {
        Self::every(-1)
    }
}

impl ArraySelector for Slice {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(MinlistError::ZeroSliceStep);
        }
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        // Clamp bounds; backward walks may stop just before the first slot.
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: i64| {
            if bound < 0 {
                bound.saturating_add(len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self.start.map_or(if step > 0 { lower } else { upper }, clamp);
        let stop = self.stop.map_or(if step > 0 { upper } else { lower }, clamp);

        let mut out = Vec::new();
        let mut i = start;
        if step > 0 {
            while i < stop {
                out.push(i as usize);
                i = i.saturating_add(step);
            }
        } else {
            while i > stop {
                out.push(i as usize);
                i = i.saturating_add(step);
            }
        }
        Ok(out)
    }

    fn is_contiguous(&self) -> bool {
        self.step.unwrap_or(1) == 1
    }
}

// Index lists

fn checked_positions(indices: &[usize], len: usize) -> Result<Vec<usize>, MinlistError> {
    indices
        .iter()
        .map(|&idx| {
            if idx < len {
                Ok(idx)
            } else {
                Err(MinlistError::IndexOutOfBounds { index: idx as i64, len })
            }
        })
        .collect()
}

fn signed_positions(indices: &[i64], len: usize) -> Result<Vec<usize>, MinlistError> {
    indices.iter().map(|&idx| resolve_position(idx, len)).collect()
}

impl ArraySelector for &[usize] {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        checked_positions(self, len)
    }
}

impl<const N: usize> ArraySelector for &[usize; N] {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        checked_positions(self.as_slice(), len)
    }
}

impl ArraySelector for Vec<usize> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        checked_positions(self, len)
    }
}

impl ArraySelector for &[i64] {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        signed_positions(self, len)
    }
}

impl<const N: usize> ArraySelector for &[i64; N] {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        signed_positions(self.as_slice(), len)
    }
}

impl ArraySelector for Vec<i64> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        signed_positions(self, len)
    }
}

// Boolean masks

fn mask_positions(mask: &[bool], len: usize) -> Result<Vec<usize>, MinlistError> {
    if mask.len() != len {
        return Err(MinlistError::LengthMismatch { expected: len, found: mask.len() });
    }
    Ok(mask
        .iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
        .collect())
}

impl ArraySelector for &[bool] {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        mask_positions(self, len)
    }
}

impl<const N: usize> ArraySelector for &[bool; N] {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        mask_positions(self.as_slice(), len)
    }
}

impl ArraySelector for Vec<bool> {
    fn resolve_indices(&self, len: usize) -> Result<Vec<usize>, MinlistError> {
        mask_positions(self, len)
    }
}
