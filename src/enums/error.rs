//! # Error Module - Custom *Minlist* Error Type
//!
//! Defines the unified error type for Minlist.
//!
//! ## Features
//! - Covers rejected backing stores, invalid elements, unknown type names,
//! out-of-bounds gathers, fill-marker violations, mask length mismatches,
//! zero slice steps and failed casts.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.

use std::error::Error;
use std::fmt;

/// Message shared by every out-of-bounds lookup, scalar or gathered.
pub const TAKE_OUT_OF_BOUNDS_MSG: &str =
    "Index is out of bounds or cannot do a non-empty take from an empty array.";

/// Catch all error type for `Minlist`
#[derive(Debug, Clone, PartialEq)]
pub enum MinlistError {
    /// Dynamic input was not an indexable, fixed-length sequence.
    InvalidBackingStore {
        found: &'static str,
    },
    /// An element was neither a list value nor the null sentinel.
    InvalidElementType {
        index: usize,
        found: String,
    },
    /// Type-name lookup for a name other than the registered one.
    UnknownType {
        name: String,
    },
    /// A scalar or gathered index outside `0..len`.
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },
    /// A gather index below the `-1` fill marker while filling is enabled.
    InvalidFillIndex {
        index: i64,
    },
    LengthMismatch {
        expected: usize,
        found: usize,
    },
    /// A stepped slice with a step of zero.
    ZeroSliceStep,
    InvalidCast {
        from: &'static str,
        to: String,
        message: Option<String>,
    },
}

impl fmt::Display for MinlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinlistError::InvalidBackingStore { found } => {
                write!(
                    f,
                    "Invalid backing store: need an indexable sequence of values, found '{}'.",
                    found
                )
            }
            MinlistError::InvalidElementType { index, found } => {
                write!(
                    f,
                    "Invalid element at position {}: all values must be of type 'list' or null, found '{}'.",
                    index, found
                )
            }
            MinlistError::UnknownType { name } => {
                write!(f, "Cannot construct a 'list' dtype from '{}'.", name)
            }
            MinlistError::IndexOutOfBounds { index, len } => {
                write!(f, "{} (index {}, length {})", TAKE_OUT_OF_BOUNDS_MSG, index, len)
            }
            MinlistError::InvalidFillIndex { index } => {
                write!(
                    f,
                    "Invalid fill index {}: indices must be >= -1 when filling is allowed.",
                    index
                )
            }
            MinlistError::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "Boolean mask length mismatch: expected {}, found {}.",
                    expected, found
                )
            }
            MinlistError::ZeroSliceStep => write!(f, "Slice step cannot be zero."),
            MinlistError::InvalidCast { from, to, message } => {
                if let Some(msg) = message {
                    write!(f, "Type error: cannot cast from '{}' to '{}': {}", from, to, msg)
                } else {
                    write!(f, "Type error: cannot cast from '{}' to '{}'.", from, to)
                }
            }
        }
    }
}

impl Error for MinlistError {}
