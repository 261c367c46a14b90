//! # **ByteSize Trait** - *Estimate Memory Footprint*
//!
//! Provides memory size estimation for Minlist types.
//!
//! ## Purpose
//! - Returns estimated byte size of a type in memory
//! - Useful for memory tracking, allocation planning, and monitoring
//! - Counts the slot buffer plus every distinct list allocation once
//!
//! ## Usage
//! ```rust
//! use minlist::{ByteSize, ListArray, ListSlot};
//!
//! let arr = ListArray::from_sequence(&[ListSlot::from("abc"), ListSlot::Null]);
//! assert!(arr.est_bytes() >= 3 * std::mem::size_of::<char>());
//! ```

use std::collections::HashSet;
use std::mem::size_of;

use crate::{ListArray, ListSlot, Vec64};

/// Trait for estimating the memory footprint of a type.
///
/// Returns the estimated number of bytes occupied by the object in memory,
/// including all owned data buffers and nested allocations.
pub trait ByteSize {
    /// Returns the estimated byte size of this object in memory.
    ///
    /// Does not include:
    /// - Stack size of the struct itself (only heap allocations)
    /// - Arc reference counts (an allocation is counted once, however many
    ///   slots alias it)
    fn est_bytes(&self) -> usize;
}

/// ByteSize for Vec64<T> - 64-byte aligned vector
impl<T> ByteSize for Vec64<T> {
    #[inline]
    fn est_bytes(&self) -> usize {
        self.capacity() * size_of::<T>()
    }
}

impl ByteSize for ListArray {
    fn est_bytes(&self) -> usize {
        let mut seen = HashSet::new();
        let lists: usize = self
            .iter()
            .filter_map(ListSlot::list_value)
            .filter(|v| seen.insert(v.as_ptr() as usize))
            .map(|v| v.len() * size_of::<char>())
            .sum();
        self.slots().est_bytes() + lists
    }
}
