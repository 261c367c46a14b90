//! # CastArray Module - *Result of `astype`*
//!
//! `astype` can land in a different representation depending on the target
//! `DataType`, so its output is a small enum over those representations.
//! Same-type and object casts may borrow from the source array when no copy
//! was requested.

use std::borrow::Cow;

use crate::{DataType, ListArray, ListSlot, Vec64};

/// # CastArray
///
/// Output of `ListArray::astype`.
///
/// - `List`: the same logical type; `Cow::Borrowed` is the very same instance.
/// - `Text`: one rendered string per slot.
/// - `Object`: the raw slots as a plain sequence.
/// - `Float64`: positional numeric cast (only nulls survive it, as `NaN`).
#[derive(Debug, Clone, PartialEq)]
pub enum CastArray<'a> {
    List(Cow<'a, ListArray>),
    Text {
        values: Vec64<String>,
        width: Option<usize>,
    },
    Object(Cow<'a, [ListSlot]>),
    Float64(Vec64<f64>),
}

impl<'a> CastArray<'a> {
    /// Number of elements in the cast output.
    pub fn len(&self) -> usize {
        match self {
            CastArray::List(arr) => arr.len(),
            CastArray::Text { values, .. } => values.len(),
            CastArray::Object(slots) => slots.len(),
            CastArray::Float64(values) => values.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The target type this output represents.
    pub fn data_type(&self) -> DataType {
        match self {
            CastArray::List(_) => DataType::List,
            CastArray::Text { width, .. } => DataType::Utf8 { width: *width },
            CastArray::Object(_) => DataType::Object,
            CastArray::Float64(_) => DataType::Float64,
        }
    }

    /// True when the output shares storage with (or is) the source array.
    pub fn is_borrowed(&self) -> bool {
        matches!(
            self,
            CastArray::List(Cow::Borrowed(_)) | CastArray::Object(Cow::Borrowed(_))
        )
    }

    pub fn as_list(&self) -> Option<&ListArray> {
        match self {
            CastArray::List(arr) => Some(arr.as_ref()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            CastArray::Text { values, .. } => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[ListSlot]> {
        match self {
            CastArray::Object(slots) => Some(slots.as_ref()),
            _ => None,
        }
    }

    pub fn as_float64(&self) -> Option<&[f64]> {
        match self {
            CastArray::Float64(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Detaches the output from the source array, cloning borrowed data.
    pub fn into_owned(self) -> CastArray<'static> {
        match self {
            CastArray::List(arr) => CastArray::List(Cow::Owned(arr.into_owned())),
            CastArray::Text { values, width } => CastArray::Text { values, width },
            CastArray::Object(slots) => CastArray::Object(Cow::Owned(slots.into_owned())),
            CastArray::Float64(values) => CastArray::Float64(values),
        }
    }
}
