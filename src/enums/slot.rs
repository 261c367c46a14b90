//! # Slot Module - *Single List Slot*
//!
//! Contains the `ListSlot` type held at every position of a `ListArray`.
//!
//! ## Purpose
//! - A slot is either a list of characters or the null sentinel.
//! - List values are reference counted, so copies and slices of an array
//! alias the same list contents rather than deep-cloning them.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// Shared, immutable list of characters.
pub type ListValue = Arc<[char]>;

/// # ListSlot
///
/// One element of a `ListArray`.
///
/// ## Description
/// - `List` holds a (possibly empty) list value. An empty list is a valid,
/// non-null value.
/// - `Null` is the missing-value sentinel declared by `ListDtype::na_value`.
/// - Two `Null` slots compare equal, which keeps array equality usable
/// in tests and assertions. Use `is_null` rather than `==` to detect nulls.
///
/// ## Example
/// ```rust
/// use minlist::ListSlot;
///
/// let ab = ListSlot::from("ab");
/// assert_eq!(ab.as_list(), Some(&['a', 'b'][..]));
/// assert_eq!(ab.to_string(), "['a', 'b']");
/// assert!(ListSlot::Null.is_null());
/// assert!(!ListSlot::from("").is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ListSlot {
    List(ListValue),
    #[default]
    Null,
}

impl ListSlot {
    /// Builds a list slot from any sequence of characters.
    #[inline]
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        ListSlot::List(chars.into_iter().collect())
    }

    /// Builds an empty (non-null) list slot.
    #[inline]
    pub fn empty() -> Self {
        ListSlot::List(Arc::from(Vec::<char>::new()))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ListSlot::Null)
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, ListSlot::List(_))
    }

    /// Returns the list contents, or `None` for the null sentinel.
    #[inline]
    pub fn as_list(&self) -> Option<&[char]> {
        match self {
            ListSlot::List(v) => Some(v),
            ListSlot::Null => None,
        }
    }

    /// Returns the shared list handle, or `None` for the null sentinel.
    #[inline]
    pub fn list_value(&self) -> Option<&ListValue> {
        match self {
            ListSlot::List(v) => Some(v),
            ListSlot::Null => None,
        }
    }

    /// Number of characters in the list; `None` for null.
    #[inline]
    pub fn list_len(&self) -> Option<usize> {
        self.as_list().map(<[char]>::len)
    }
}

impl From<&str> for ListSlot {
    fn from(s: &str) -> Self {
        ListSlot::from_chars(s.chars())
    }
}

impl From<Vec<char>> for ListSlot {
    fn from(v: Vec<char>) -> Self {
        ListSlot::List(Arc::from(v))
    }
}

impl From<&[char]> for ListSlot {
    fn from(v: &[char]) -> Self {
        ListSlot::List(Arc::from(v))
    }
}

impl From<ListValue> for ListSlot {
    fn from(v: ListValue) -> Self {
        ListSlot::List(v)
    }
}

impl<T: Into<ListSlot>> From<Option<T>> for ListSlot {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => ListSlot::Null,
        }
    }
}

/// Renders list values as `['a', 'b']` and the sentinel as `nan`.
impl Display for ListSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ListSlot::Null => write!(f, "nan"),
            ListSlot::List(chars) => {
                write!(f, "[")?;
                for (i, c) in chars.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_char_literal(f, *c)?;
                }
                write!(f, "]")
            }
        }
    }
}

fn write_char_literal(f: &mut Formatter<'_>, c: char) -> fmt::Result {
    match c {
        '\'' => write!(f, "\"'\""),
        '\\' => write!(f, "'\\\\'"),
        '\n' => write!(f, "'\\n'"),
        '\t' => write!(f, "'\\t'"),
        '\r' => write!(f, "'\\r'"),
        c if !is_printable(c) => {
            let code = c as u32;
            if code < 0x100 {
                write!(f, "'\\x{:02x}'", code)
            } else if code < 0x10000 {
                write!(f, "'\\u{:04x}'", code)
            } else {
                write!(f, "'\\U{:08x}'", code)
            }
        }
        _ => write!(f, "'{}'", c),
    }
}

/// Controls, separators other than the ASCII space, common format
/// characters and private use code points are written escaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c as u32,
        0x00AD
            | 0x061C
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0xE000..=0xF8FF
            | 0xF0000..=0xFFFFD
            | 0x100000..=0x10FFFD
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_not_null() {
        let s = ListSlot::empty();
        assert!(s.is_list());
        assert!(!s.is_null());
        assert_eq!(s.list_len(), Some(0));
        assert_eq!(s, ListSlot::from(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(ListSlot::from("xyz").to_string(), "['x', 'y', 'z']");
        assert_eq!(ListSlot::empty().to_string(), "[]");
        assert_eq!(ListSlot::Null.to_string(), "nan");
        assert_eq!(ListSlot::from("'").to_string(), "[\"'\"]");
        assert_eq!(ListSlot::from("\\").to_string(), "['\\\\']");
        assert_eq!(ListSlot::from("\t\r").to_string(), r"['\t', '\r']");
    }

    #[test]
    fn test_display_escapes_non_printable() {
        assert_eq!(ListSlot::from("\r").to_string(), r"['\r']");
        assert_eq!(ListSlot::from("\0").to_string(), r"['\x00']");
        assert_eq!(ListSlot::from("a\x1b").to_string(), r"['a', '\x1b']");
        assert_eq!(ListSlot::from("\u{85}").to_string(), r"['\x85']");
        assert_eq!(ListSlot::from("\u{200b}").to_string(), r"['\u200b']");
        assert_eq!(ListSlot::from("\u{2028}").to_string(), r"['\u2028']");
        assert_eq!(ListSlot::from("\u{f0000}").to_string(), r"['\U000f0000']");
        assert_eq!(ListSlot::from(" é中").to_string(), "[' ', 'é', '中']");
    }

    #[test]
    fn test_from_option() {
        let some: ListSlot = Some("a").into();
        let none: ListSlot = Option::<&str>::None.into();
        assert_eq!(some.as_list(), Some(&['a'][..]));
        assert!(none.is_null());
    }

    #[test]
    fn test_clone_aliases_list_value() {
        let a = ListSlot::from("abc");
        let b = a.clone();
        let (pa, pb) = (a.list_value().unwrap(), b.list_value().unwrap());
        assert!(Arc::ptr_eq(pa, pb));
    }

    #[test]
    fn test_default_is_null() {
        assert!(ListSlot::default().is_null());
    }
}
