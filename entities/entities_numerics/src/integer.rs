//! Capability trait for rational backing types.

use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::{One, Zero};

use crate::big::BigInt;
use crate::immut;
use crate::limits::NumericLimits;

/// Operations a type must offer to back a [`crate::RationalBase`]
///
/// The NaN and infinity hooks default to `false`; a backing type with an
/// invalid state reports it through `is_nan` so the rational built from it
/// becomes NaN.
///
/// Fixed-width implementations wrap or panic on overflow like the primitive
/// they are; rational arithmetic over them is only exact while products fit.
pub trait IntegerLike:
    Clone
    + Ord
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + NumericLimits
{
    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn is_negative_value(&self) -> bool {
        *self < Self::zero()
    }

    fn is_nan(&self) -> bool {
        false
    }

    fn is_pos_infinity(&self) -> bool {
        false
    }

    fn is_neg_infinity(&self) -> bool {
        false
    }

    fn abs_value(&self) -> Self {
        if self.is_negative_value() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// `-1`, `0` or `1`
    fn signum_value(&self) -> Self {
        if self.is_negative_value() {
            -Self::one()
        } else if self.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }
}

impl IntegerLike for i32 {}
impl IntegerLike for i64 {}
impl IntegerLike for i128 {}

macro_rules! impl_integer_like_for_big_int {
    ($t:ty) => {
        impl Zero for $t {
            fn zero() -> Self {
                <$t>::zero()
            }

            fn is_zero(&self) -> bool {
                <$t>::is_zero(self)
            }
        }

        impl One for $t {
            fn one() -> Self {
                <$t>::one()
            }
        }

        impl IntegerLike for $t {
            fn is_negative_value(&self) -> bool {
                self.is_valid() && self.is_negative()
            }

            fn is_nan(&self) -> bool {
                !self.is_valid()
            }

            fn abs_value(&self) -> Self {
                self.abs()
            }
        }
    };
}

impl_integer_like_for_big_int!(BigInt);
impl_integer_like_for_big_int!(immut::BigInt);
