//! # **Conversions** - *Untyped input at the JSON boundary*
//!
//! The typed API cannot hold anything but list values and nulls, so the only
//! place element validation still happens is when untyped data comes in.
//! This module is that boundary.
//!
//! ## What's included
//! - `ListArray::try_from_json` / `TryFrom<&Value>`: builds an array from a
//!   JSON array whose elements are arrays of one-character strings or `null`.
//! - `ListArray::try_from_json_str`: same, from JSON text.
//! - `ListArray::to_json` and `From<&ListSlot> for Value` for the way back.
//!
//! ## Errors
//! - The outer value must be a JSON array, otherwise
//!   [`MinlistError::InvalidBackingStore`].
//! - The first element that is neither a list of characters nor `null` fails
//!   with [`MinlistError::InvalidElementType`], carrying its position.

use serde_json::Value;
use tracing::debug;

use crate::enums::error::MinlistError;
use crate::{ListArray, ListSlot, Vec64};

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn single_char(value: &Value) -> Option<char> {
    let s = value.as_str()?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parses one element at `index` of the outer array.
fn slot_from_json(index: usize, value: &Value) -> Result<ListSlot, MinlistError> {
    match value {
        Value::Null => Ok(ListSlot::Null),
        Value::Array(items) => {
            let mut chars = Vec::with_capacity(items.len());
            for item in items {
                match single_char(item) {
                    Some(c) => chars.push(c),
                    None => {
                        return Err(MinlistError::InvalidElementType {
                            index,
                            found: format!("array containing {}", describe(item)),
                        });
                    }
                }
            }
            Ok(ListSlot::from(chars))
        }
        other => Err(MinlistError::InvalidElementType {
            index,
            found: kind_of(other).to_string(),
        }),
    }
}

fn describe(item: &Value) -> String {
    match item {
        Value::String(s) => format!("string {:?}", s),
        other => kind_of(other).to_string(),
    }
}

impl ListArray {
    /// Builds an array from a JSON array of character lists and nulls.
    ///
    /// ```rust
    /// use minlist::{ListArray, ListSlot};
    /// use serde_json::json;
    ///
    /// let arr = ListArray::try_from_json(&json!([["a", "b"], null, []])).unwrap();
    /// assert_eq!(arr.isna().as_slice(), &[false, true, false]);
    /// assert_eq!(arr.get(2).unwrap(), &ListSlot::empty());
    /// ```
    pub fn try_from_json(value: &Value) -> Result<Self, MinlistError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                let found = kind_of(other);
                debug!(found, "rejected non-sequence backing store");
                return Err(MinlistError::InvalidBackingStore { found });
            }
        };

        let mut data = Vec64::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match slot_from_json(index, item) {
                Ok(slot) => data.push(slot),
                Err(e) => {
                    debug!(index, error = %e, "rejected list array element");
                    return Err(e);
                }
            }
        }
        Ok(ListArray::new(data))
    }

    /// Parses `text` as JSON, then behaves like `try_from_json`.
    ///
    /// Malformed JSON is reported as an invalid backing store.
    pub fn try_from_json_str(text: &str) -> Result<Self, MinlistError> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            debug!(error = %e, "malformed JSON input");
            MinlistError::InvalidBackingStore { found: "malformed JSON" }
        })?;
        Self::try_from_json(&value)
    }

    /// Renders the array as a JSON array; the inverse of `try_from_json`.
    pub fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Value::from).collect())
    }
}

impl TryFrom<&Value> for ListArray {
    type Error = MinlistError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        ListArray::try_from_json(value)
    }
}

impl From<&ListSlot> for Value {
    fn from(slot: &ListSlot) -> Self {
        match slot {
            ListSlot::Null => Value::Null,
            ListSlot::List(chars) => {
                Value::Array(chars.iter().map(|c| Value::String(c.to_string())).collect())
            }
        }
    }
}
