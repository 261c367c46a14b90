//! # ListDtype Module - *Element type descriptor for list columns*
//!
//! Names the `list` element type, declares its null sentinel and resolves
//! the descriptor from its registered name.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::enums::error::MinlistError;
use crate::traits::extension::ExtensionDtype;
use crate::{DataType, ListArray, ListSlot};

/// # ListDtype
///
/// Stateless descriptor shared by every `ListArray`.
///
/// ## Example
/// ```rust
/// use minlist::{ExtensionDtype, ListDtype, ListSlot};
///
/// let dtype = ListDtype::construct_from_string("list").unwrap();
/// assert_eq!(dtype.name(), "list");
/// assert_eq!(dtype.na_value(), ListSlot::Null);
/// assert!(ListDtype::construct_from_string("dict").is_err());
///
/// let factory = ListDtype::construct_array_type();
/// let arr = factory.from_sequence(&[ListSlot::from("ab"), ListSlot::Null]);
/// assert_eq!(arr.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListDtype;

impl ListDtype {
    #[inline]
    pub const fn new() -> Self {
        ListDtype
    }
}

impl ExtensionDtype for ListDtype {
    type Array = ListArray;

    const NAME: &'static str = "list";

    #[inline]
    fn na_value(&self) -> ListSlot {
        ListSlot::Null
    }

    #[inline]
    fn logical_type(&self) -> DataType {
        DataType::List
    }

    fn construct_from_string(name: &str) -> Result<Self, MinlistError> {
        if name == Self::NAME {
            Ok(ListDtype)
        } else {
            Err(MinlistError::UnknownType { name: name.to_string() })
        }
    }
}

impl FromStr for ListDtype {
    type Err = MinlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct_from_string(s)
    }
}

impl Display for ListDtype {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::NAME)
    }
}
