//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # Minlist
//!
//! A pluggable, list-valued column type for tabular data frameworks.
//!
//! `ListArray` stores variable-length lists of characters in one homogeneous
//! column, with a null sentinel for missing rows. `ListDtype` is its element
//! type descriptor. Together they implement the `ExtensionDtype` /
//! `ExtensionArray` capability contract: construction, indexing and slicing,
//! null detection, gather with fill, casting and concatenation.
//!
//! ## Feature flags
//! - `json` *(default)*: build arrays from untyped JSON input, and export back.
//! - `parallel_proc`: Rayon parallel iterators and parallel text casting.
//! - `size`: the `ByteSize` memory estimate trait.

pub mod enums {
    pub mod cast_array;
    pub mod data_type;
    pub mod error;
    pub mod slot;
}

pub mod structs {
    pub mod dtype;
    pub mod list_array;
}

pub mod traits {
    #[cfg(feature = "size")]
    pub mod byte_size;
    pub mod concatenate;
    pub mod extension;
    pub mod print;
    pub mod selection;
    pub mod type_unions;
}

#[cfg(feature = "json")]
pub mod conversions;
pub mod utils;

pub use enums::cast_array::CastArray;
pub use enums::data_type::{CastKind, DataType};
pub use enums::error::MinlistError;
pub use enums::slot::{ListSlot, ListValue};

pub use structs::dtype::ListDtype;
pub use structs::list_array::ListArray;

#[cfg(feature = "size")]
pub use traits::byte_size::ByteSize;
pub use traits::concatenate::Concatenate;
pub use traits::extension::{ArrayFactory, ExtensionArray, ExtensionDtype};
pub use traits::print::Print;
pub use traits::selection::{ArraySelector, Slice};
pub use traits::type_unions::TakeIndex;

pub use vec64::Vec64;
