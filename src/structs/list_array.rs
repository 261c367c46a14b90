//! # ListArray Module - *Column of variable-length list values*
//!
//! A dense, ordered column whose slots each hold a small list of characters
//! or the null sentinel.
//!
//! ## Overview
//! - Storage: one `Vec64<ListSlot>`; list contents are `Arc`-shared, so
//!   copies, slices and gathers alias list values instead of cloning them.
//! - The slot enum makes "neither a list nor null" unrepresentable. Untyped
//!   input is validated once, at the JSON boundary (`try_from_json`).
//! - Implements the `ExtensionArray` contract: indexing, null detection,
//!   gather with fill, casting and concatenation.
//!
//! ## The `-1` convention in `take`
//! With `allow_fill = false`, `-1` is an ordinary negative index and selects
//! the last slot. With `allow_fill = true`, `-1` is the fill marker and the
//! output slot becomes the fill value. Both conventions are load-bearing for
//! callers; double check which one you are in.
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::ops::Index;

#[cfg(feature = "parallel_proc")]
use rayon::prelude::*;
use tracing::trace;

use crate::enums::cast_array::CastArray;
use crate::enums::error::MinlistError;
use crate::traits::extension::{ExtensionArray, ExtensionDtype};
use crate::traits::print::MAX_PREVIEW;
use crate::traits::selection::ArraySelector;
use crate::traits::type_unions::TakeIndex;
use crate::utils::{resolve_index, resolve_position, truncate_chars, validate_fill_indices};
use crate::{DataType, ListDtype, ListSlot, Vec64};

/// # ListArray
///
/// Column of list-of-character values with a null sentinel.
///
/// ## Role
/// - The container a host tabular framework stores for the `list` dtype.
/// - Each instance owns its slot buffer exclusively; only list values are shared.
///
/// ## Example
/// ```rust
/// use minlist::{ListArray, ListSlot};
///
/// let arr = ListArray::from_sequence(&[
///     ListSlot::from("ab"),
///     ListSlot::Null,
///     ListSlot::empty(),
/// ]);
///
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.isna().as_slice(), &[false, true, false]);
/// assert_eq!(arr.get(-1).unwrap(), &ListSlot::empty());
///
/// let filled = arr.take(&[0i64, -1], true, None).unwrap();
/// assert!(filled.get(1).unwrap().is_null());
/// ```
#[derive(PartialEq, Clone, Debug)]
pub struct ListArray {
    /// One slot per row.
    pub data: Vec64<ListSlot>,
}

impl ListArray {
    /// Wraps a prepared slot buffer without copying it.
    #[inline]
    pub fn new(data: Vec64<ListSlot>) -> Self {
        Self { data }
    }

    /// Constructs an empty array with room for `n` slots.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self { data: Vec64::with_capacity(n) }
    }

    /// Copies `scalars` positionally into freshly allocated storage.
    ///
    /// This is the canonical way to build an array from arbitrary ordered
    /// input; `take` routes its output through here too.
    #[inline]
    pub fn from_sequence(scalars: &[ListSlot]) -> Self {
        let mut data = Vec64::with_capacity(scalars.len());
        data.extend_from_slice(scalars);
        Self { data }
    }

    /// The descriptor shared by all list arrays.
    #[inline]
    pub fn dtype(&self) -> ListDtype {
        ListDtype::new()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the slot buffer.
    #[inline]
    pub fn slots(&self) -> &Vec64<ListSlot> {
        &self.data
    }

    /// Take ownership of the slot buffer.
    #[inline]
    pub fn into_slots(self) -> Vec64<ListSlot> {
        self.data
    }

    /// Appends a slot.
    #[inline]
    pub fn push(&mut self, value: impl Into<ListSlot>) {
        self.data.push(value.into());
    }

    /// Appends the null sentinel.
    #[inline]
    pub fn push_null(&mut self) {
        self.data.push(ListSlot::Null);
    }

    /// Returns the raw slot at `idx`. Negative values count from the end.
    ///
    /// Fails with `MinlistError::IndexOutOfBounds` outside `-len..len`.
    #[inline]
    pub fn get(&self, idx: isize) -> Result<&ListSlot, MinlistError> {
        let pos = resolve_position(idx as i64, self.len())?;
        Ok(&self.data[pos])
    }

    /// Selects slots by range, index list or boolean mask into a new array.
    ///
    /// See `ArraySelector` for the accepted inputs and their bounds rules.
    pub fn select<S: ArraySelector>(&self, selection: S) -> Result<Self, MinlistError> {
        let positions = selection.resolve_indices(self.len())?;
        Ok(Self::new(positions.into_iter().map(|i| self.data[i].clone()).collect()))
    }

    /// Returns an iterator over the slots.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ListSlot> + '_ {
        self.data.iter()
    }

    /// One flag per slot, `true` where the slot is the null sentinel.
    /// Empty lists are values, not nulls.
    #[inline]
    pub fn isna(&self) -> Vec64<bool> {
        self.data.iter().map(ListSlot::is_null).collect()
    }

    /// Returns the total number of nulls.
    #[inline]
    pub fn null_count(&self) -> usize {
        self.data.iter().filter(|s| s.is_null()).count()
    }

    /// Gathers slots by position into a new array.
    ///
    /// - `allow_fill = false`: every index is a lookup, and negative values,
    ///   `-1` included, count from the end.
    /// - `allow_fill = true`: `-1` marks a slot to fill with `fill_value`
    ///   (the null sentinel when `None`). Any index below `-1` is rejected
    ///   with `MinlistError::InvalidFillIndex` before any lookup happens.
    ///
    /// A lookup outside the array, including any lookup on an empty array,
    /// fails with `MinlistError::IndexOutOfBounds`.
    pub fn take<I: TakeIndex>(
        &self,
        indices: &[I],
        allow_fill: bool,
        fill_value: Option<ListSlot>,
    ) -> Result<Self, MinlistError> {
        let len = self.len();
        trace!(len, n_indices = indices.len(), allow_fill, "list array take");

        let mut output = Vec::with_capacity(indices.len());
        if allow_fill {
            validate_fill_indices(indices)?;
            let fill = fill_value.unwrap_or_else(|| self.dtype().na_value());
            for &idx in indices {
                if idx.to_position() == Some(-1) {
                    output.push(fill.clone());
                } else {
                    output.push(self.data[resolve_index(idx, len)?].clone());
                }
            }
        } else {
            for &idx in indices {
                output.push(self.data[resolve_index(idx, len)?].clone());
            }
        }
        Ok(Self::from_sequence(&output))
    }

    /// Shallow copy: a new slot buffer, list values aliased.
    #[inline]
    pub fn copy(&self) -> Self {
        Self::from_sequence(&self.data)
    }

    /// Casts the array into `dtype`.
    ///
    /// - `List`: `copy()` when `copy` is set, otherwise this very instance.
    /// - `Utf8`: every slot rendered as text (`['a', 'b']`, `[]`, `nan`),
    ///   truncated to `width` characters if one is given.
    /// - `Object`: the slots as a plain sequence, borrowed unless `copy`.
    /// - `Float64`: nulls become `NaN`; any list value fails with
    ///   `MinlistError::InvalidCast`.
    pub fn astype(&self, dtype: &DataType, copy: bool) -> Result<CastArray<'_>, MinlistError> {
        trace!(len = self.len(), to = %dtype, kind = ?dtype.cast_kind(), copy, "list array astype");
        match *dtype {
            DataType::List => Ok(CastArray::List(if copy {
                Cow::Owned(self.copy())
            } else {
                Cow::Borrowed(self)
            })),
            DataType::Utf8 { width } => Ok(CastArray::Text {
                values: self.to_text(width),
                width,
            }),
            DataType::Object => Ok(CastArray::Object(if copy {
                Cow::Owned(self.data.to_vec())
            } else {
                Cow::Borrowed(self.data.as_slice())
            })),
            DataType::Float64 => self.to_float64().map(CastArray::Float64),
        }
    }

    /// Concatenates `to_concat` in order into one new array.
    ///
    /// Slots are copied as-is; every part was already valid.
    pub fn concat_same_type(to_concat: &[&ListArray]) -> Self {
        let total = to_concat.iter().map(|a| a.len()).sum();
        trace!(parts = to_concat.len(), total, "list array concat");
        let mut data = Vec64::with_capacity(total);
        for part in to_concat {
            data.extend_from_slice(&part.data);
        }
        Self { data }
    }

    fn to_text(&self, width: Option<usize>) -> Vec64<String> {
        let render = |slot: &ListSlot| {
            let s = slot.to_string();
            match width {
                Some(w) => truncate_chars(s, w),
                None => s,
            }
        };
        #[cfg(feature = "parallel_proc")]
        {
            Vec64::from(self.data.par_iter().map(render).collect::<Vec<_>>())
        }
        #[cfg(not(feature = "parallel_proc"))]
        {
            self.data.iter().map(render).collect()
        }
    }

    fn to_float64(&self) -> Result<Vec64<f64>, MinlistError> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                ListSlot::Null => Ok(f64::NAN),
                ListSlot::List(_) => Err(MinlistError::InvalidCast {
                    from: ListDtype::NAME,
                    to: DataType::Float64.to_string(),
                    message: Some(format!("cannot set a sequence into a scalar slot at position {}", i)),
                }),
            })
            .collect()
    }
}

#[cfg(feature = "parallel_proc")]
impl ListArray {
    /// Parallel iterator over the slots.
    #[inline]
    pub fn par_iter(&self) -> impl ParallelIterator<Item = &ListSlot> + '_ {
        self.data.par_iter()
    }

    /// Parallel form of `isna`, same output.
    pub fn par_isna(&self) -> Vec64<bool> {
        Vec64::from(self.data.par_iter().map(ListSlot::is_null).collect::<Vec<_>>())
    }
}

impl ExtensionArray for ListArray {
    type Scalar = ListSlot;
    type Dtype = ListDtype;
    type CastOutput<'a> = CastArray<'a>;

    #[inline]
    fn dtype(&self) -> ListDtype {
        ListArray::dtype(self)
    }

    #[inline]
    fn from_sequence(scalars: &[ListSlot]) -> Self {
        ListArray::from_sequence(scalars)
    }

    #[inline]
    fn len(&self) -> usize {
        ListArray::len(self)
    }

    #[inline]
    fn get(&self, idx: isize) -> Result<&ListSlot, MinlistError> {
        ListArray::get(self, idx)
    }

    #[inline]
    fn isna(&self) -> Vec64<bool> {
        ListArray::isna(self)
    }

    #[inline]
    fn take<I: TakeIndex>(
        &self,
        indices: &[I],
        allow_fill: bool,
        fill_value: Option<ListSlot>,
    ) -> Result<Self, MinlistError> {
        ListArray::take(self, indices, allow_fill, fill_value)
    }

    #[inline]
    fn copy(&self) -> Self {
        ListArray::copy(self)
    }

    #[inline]
    fn astype(&self, dtype: &DataType, copy: bool) -> Result<CastArray<'_>, MinlistError> {
        ListArray::astype(self, dtype, copy)
    }

    #[inline]
    fn concat_same_type(to_concat: &[&Self]) -> Self {
        ListArray::concat_same_type(to_concat)
    }
}

impl Default for ListArray {
    fn default() -> Self {
        Self { data: Vec64::new() }
    }
}

impl Index<usize> for ListArray {
    type Output = ListSlot;

    #[inline]
    fn index(&self, idx: usize) -> &ListSlot {
        &self.data[idx]
    }
}

impl FromIterator<ListSlot> for ListArray {
    fn from_iter<T: IntoIterator<Item = ListSlot>>(iter: T) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl From<Vec<ListSlot>> for ListArray {
    fn from(v: Vec<ListSlot>) -> Self {
        Self { data: Vec64::from(v) }
    }
}

impl From<Vec64<ListSlot>> for ListArray {
    fn from(data: Vec64<ListSlot>) -> Self {
        Self { data }
    }
}

impl Display for ListArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.len();
        writeln!(
            f,
            "ListArray [{} values] (dtype: {}, nulls: {})",
            len,
            self.dtype(),
            self.null_count()
        )?;

        write!(f, "[")?;
        for (i, slot) in self.data.iter().take(MAX_PREVIEW).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", slot)?;
        }
        if len > MAX_PREVIEW {
            write!(f, ", … ({} total)", len)?;
        }
        write!(f, "]")
    }
}
