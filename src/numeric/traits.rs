// ============================================================================
// Checked Arithmetic Trait
// Uniform method-style access to the signed and unsigned checked operations
// ============================================================================

use super::errors::NumericResult;
use super::{signed, unsigned};

/// Overflow-checked arithmetic over a fixed-width integer domain.
///
/// Implemented for `i64` and `u64`. Method names are prefixed so they never
/// shadow the inherent `checked_*` methods of the primitive types.
pub trait CheckedArithmetic: Copy + Ord + Sized {
    /// `self + rhs`, or `Overflow`
    fn safe_add(self, rhs: Self) -> NumericResult<Self>;

    /// `self - rhs`, or `Overflow` (unsigned underflow included)
    fn safe_sub(self, rhs: Self) -> NumericResult<Self>;

    /// `self * rhs`, or `Overflow`
    fn safe_mul(self, rhs: Self) -> NumericResult<Self>;

    /// Checked addition, then `LimitExceeded` if the sum is above `limit`
    fn add_with_limit(self, rhs: Self, limit: Self) -> NumericResult<Self>;

    /// Checked subtraction, then `LimitExceeded` if the difference is below `floor`
    fn sub_with_floor(self, rhs: Self, floor: Self) -> NumericResult<Self>;

    /// Checked multiplication, then `LimitExceeded` if the product is above `limit`
    fn mul_with_limit(self, rhs: Self, limit: Self) -> NumericResult<Self>;
}

macro_rules! impl_checked_arithmetic {
    ($ty:ty, $module:ident) => {
        impl CheckedArithmetic for $ty {
            #[inline]
            fn safe_add(self, rhs: Self) -> NumericResult<Self> {
                $module::add(self, rhs)
            }

            #[inline]
            fn safe_sub(self, rhs: Self) -> NumericResult<Self> {
                $module::sub(self, rhs)
            }

            #[inline]
            fn safe_mul(self, rhs: Self) -> NumericResult<Self> {
                $module::mul(self, rhs)
            }

            #[inline]
            fn add_with_limit(self, rhs: Self, limit: Self) -> NumericResult<Self> {
                $module::add_with_limit(self, rhs, limit)
            }

            #[inline]
            fn sub_with_floor(self, rhs: Self, floor: Self) -> NumericResult<Self> {
                $module::sub_with_floor(self, rhs, floor)
            }

            #[inline]
            fn mul_with_limit(self, rhs: Self, limit: Self) -> NumericResult<Self> {
                $module::mul_with_limit(self, rhs, limit)
            }
        }
    };
}

impl_checked_arithmetic!(i64, signed);
impl_checked_arithmetic!(u64, unsigned);
