//! # DataType Module - *Cast target tagging*
//!
//! The closed set of representations a `ListArray` can be cast into via
//! `astype`.
//!
//! ## Overview
//! - `List` is the array's own logical type.
//! - `Utf8` is the textual representation, optionally with a fixed maximum
//!   width in characters.
//! - `Object` and `Float64` are generic representations: the slots are
//!   handed over as-is, or cast positionally with pass-through failure.
//!
//! Each variant belongs to exactly one [`CastKind`], which is what `astype`
//! dispatches on.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::enums::error::MinlistError;

/// # DataType
///
/// Supported `astype` targets.
///
/// ## Parsing
/// `FromStr` accepts `list`, `str` / `string`, `U<n>` / `<U<n>`, `object`
/// and `float64`; anything else is `MinlistError::UnknownType`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum DataType {
    List,
    Utf8 { width: Option<usize> },
    Object,
    Float64,
}

/// Capability class of a cast target.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CastKind {
    SameType,
    TextRepresentation,
    GenericRepresentation,
}

impl DataType {
    /// Unbounded text target.
    #[inline]
    pub const fn utf8() -> Self {
        DataType::Utf8 { width: None }
    }

    /// Fixed-width text target; longer renderings are truncated.
    #[inline]
    pub const fn utf8_width(width: usize) -> Self {
        DataType::Utf8 { width: Some(width) }
    }

    #[inline]
    pub fn cast_kind(&self) -> CastKind {
        match self {
            DataType::List => CastKind::SameType,
            DataType::Utf8 { .. } => CastKind::TextRepresentation,
            DataType::Object | DataType::Float64 => CastKind::GenericRepresentation,
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.cast_kind() == CastKind::TextRepresentation
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DataType::List => write!(f, "list"),
            DataType::Utf8 { width: None } => write!(f, "str"),
            DataType::Utf8 { width: Some(w) } => write!(f, "<U{}", w),
            DataType::Object => write!(f, "object"),
            DataType::Float64 => write!(f, "float64"),
        }
    }
}

impl FromStr for DataType {
    type Err = MinlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(DataType::List),
            "str" | "string" => Ok(DataType::utf8()),
            "object" => Ok(DataType::Object),
            "float64" => Ok(DataType::Float64),
            _ => {
                let digits = s.strip_prefix("<U").or_else(|| s.strip_prefix('U'));
                match digits.and_then(|d| d.parse::<usize>().ok()) {
                    Some(w) => Ok(DataType::utf8_width(w)),
                    None => Err(MinlistError::UnknownType { name: s.to_string() }),
                }
            }
        }
    }
}
