use std::fmt::Debug;

use num_traits::{PrimInt, ToPrimitive};

/// Trait for integer types valid as gather positions in `take`.
///
/// Useful when specifying `my_fn::<I: TakeIndex>() {}`.
///
/// Extends and constrains the *num-traits* `PrimInt` implementation to the
/// signed/unsigned widths callers typically hold indices in.
pub trait TakeIndex: PrimInt + ToPrimitive + Debug + 'static {
    /// Widens to `i64`. `None` when the value does not fit, which `take`
    /// treats as out of bounds.
    #[inline]
    fn to_position(self) -> Option<i64> {
        self.to_i64()
    }
}

macro_rules! impl_take_index {
    ($($t:ty),*) => {
        $(impl TakeIndex for $t {})*
    };
}

impl_take_index!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_position_widens() {
        assert_eq!((-1i8).to_position(), Some(-1));
        assert_eq!(7usize.to_position(), Some(7));
        assert_eq!(u64::MAX.to_position(), None);
    }
}
