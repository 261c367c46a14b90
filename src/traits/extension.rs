//! Core `ExtensionDtype` and `ExtensionArray` traits, the capability contract
//! a host tabular framework relies on when it stores a custom column type.

use std::any::type_name;
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

use crate::enums::error::MinlistError;
use crate::traits::type_unions::TakeIndex;
use crate::{DataType, Vec64};

/// ExtensionDtype is implemented by every pluggable element type descriptor.
///
/// ### Purpose
/// - Names the logical element type and the sentinel used for missing slots.
/// - Acts as the factory for the array type that stores it, both from a type
/// name (`construct_from_string`) and at the type level (`construct_array_type`).
pub trait ExtensionDtype: Sized + Clone + PartialEq + Display {
    /// The array type holding elements of this dtype.
    type Array: ExtensionArray;

    /// Registered type name.
    const NAME: &'static str;

    /// Returns the registered type name.
    #[inline]
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// The value stored in a slot to mark it missing.
    fn na_value(&self) -> <Self::Array as ExtensionArray>::Scalar;

    /// Logical `astype` target that denotes this dtype.
    fn logical_type(&self) -> DataType;

    /// Returns a type-level handle to the associated array type.
    #[inline]
    fn construct_array_type() -> ArrayFactory<Self::Array> {
        ArrayFactory::new()
    }

    /// Resolves a dtype from its registered name.
    ///
    /// Fails with `MinlistError::UnknownType` for any other name.
    fn construct_from_string(name: &str) -> Result<Self, MinlistError>;
}

/// ExtensionArray is implemented by every pluggable column container.
///
/// ### Index conventions
/// `take` gives `-1` two meanings. Without filling it is an ordinary
/// negative index (the last element). With `allow_fill = true` it is the
/// fill marker and never a lookup. Callers rely on both, so mixing them up
/// silently yields wrong data rather than an error.
pub trait ExtensionArray: Sized + Clone {
    /// Element type stored per slot, including the null sentinel.
    type Scalar: Clone;

    /// Descriptor shared by all instances.
    type Dtype: ExtensionDtype<Array = Self>;

    /// Output of `astype`; may borrow from `self`.
    type CastOutput<'a>
    where
        Self: 'a;

    /// The dtype of this array.
    fn dtype(&self) -> Self::Dtype;

    /// Builds an array from an ordered slice of scalars, copying them into
    /// freshly allocated storage.
    fn from_sequence(scalars: &[Self::Scalar]) -> Self;

    /// Returns the number of slots.
    fn len(&self) -> usize;

    /// Returns true if the array has no slots.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the raw slot at `idx`; negative values count from the end.
    fn get(&self, idx: isize) -> Result<&Self::Scalar, MinlistError>;

    /// One flag per slot, `true` where the slot holds the null sentinel.
    fn isna(&self) -> Vec64<bool>;

    /// Gathers slots by position. See the trait docs for the `-1` convention.
    fn take<I: TakeIndex>(
        &self,
        indices: &[I],
        allow_fill: bool,
        fill_value: Option<Self::Scalar>,
    ) -> Result<Self, MinlistError>;

    /// Shallow copy with independent backing storage.
    #[inline]
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Casts into another representation.
    fn astype(&self, dtype: &DataType, copy: bool) -> Result<Self::CastOutput<'_>, MinlistError>;

    /// Concatenates arrays of this type in order.
    fn concat_same_type(to_concat: &[&Self]) -> Self;
}

/// Type-level factory for an `ExtensionArray`, returned by
/// `ExtensionDtype::construct_array_type`. Carries no data.
pub struct ArrayFactory<A> {
    _array: PhantomData<fn() -> A>,
}

impl<A> ArrayFactory<A> {
    #[inline]
    pub const fn new() -> Self {
        Self { _array: PhantomData }
    }

    /// Fully qualified name of the array type this factory builds.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        type_name::<A>()
    }
}

impl<A: ExtensionArray> ArrayFactory<A> {
    /// Builds an array via `ExtensionArray::from_sequence`.
    #[inline]
    pub fn from_sequence(&self, scalars: &[A::Scalar]) -> A {
        A::from_sequence(scalars)
    }
}

impl<A> Clone for ArrayFactory<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for ArrayFactory<A> {}

impl<A> Default for ArrayFactory<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> PartialEq for ArrayFactory<A> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<A> Debug for ArrayFactory<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayFactory<{}>", type_name::<A>())
    }
}
