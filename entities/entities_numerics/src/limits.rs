//! Numeric Limits
//!
//! Compile-time description of a numeric type's range and special values,
//! so generic code (the rational type in particular) can ask its backing
//! integer whether it is bounded, what its extremes are and whether it has a
//! NaN.

use crate::big::BigInt;
use crate::immut;

/// Rounding behaviour of a numeric type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStyle {
    /// Rounding cannot be determined
    Indeterminate,
    /// Truncate, as integer division does
    TowardZero,
    /// Round to the nearest representable value
    ToNearest,
    /// Round up
    TowardInfinity,
    /// Round down
    TowardNegInfinity,
}

/// Range and special-value properties of a numeric type
///
/// Values that a type cannot represent (an infinity for an integer, the
/// extremes of an unbounded type) are reported as zero. The big integers
/// report every value as zero except [`quiet_nan`](Self::quiet_nan), which
/// is the invalid value.
///
/// # Examples
///
/// ```rust
/// use entities_numerics::{BigInt, NumericLimits};
///
/// assert_eq!(<i64 as NumericLimits>::max_value(), i64::MAX);
/// assert!(!<BigInt as NumericLimits>::IS_BOUNDED);
/// assert!(<BigInt as NumericLimits>::max_value().is_zero());
/// assert!(!<BigInt as NumericLimits>::quiet_nan().is_valid());
/// ```
pub trait NumericLimits: Sized {
    /// True when the type can hold negative values
    const IS_SIGNED: bool;
    const IS_INTEGER: bool;
    /// True when arithmetic introduces no rounding
    const IS_EXACT: bool;
    /// True when the type has a finite range
    const IS_BOUNDED: bool;
    const HAS_INFINITY: bool;
    const HAS_QUIET_NAN: bool;
    const ROUND_STYLE: RoundStyle;

    /// Smallest positive value for non-integers, most negative for integers
    fn min_value() -> Self;
    /// Largest finite value; zero for an unbounded integer
    fn max_value() -> Self;
    /// Most negative finite value
    fn lowest() -> Self;
    /// Gap between one and the next value; zero for integers
    fn epsilon() -> Self;
    /// Largest rounding error of one operation
    fn round_error() -> Self;
    /// Positive infinity, or zero when the type has none
    fn infinity() -> Self;
    /// The not-a-number value, or zero when the type has none
    fn quiet_nan() -> Self;
}

macro_rules! impl_limits_for_primitive {
    ($($t:ty),*) => {$(
        impl NumericLimits for $t {
            const IS_SIGNED: bool = true;
            const IS_INTEGER: bool = true;
            const IS_EXACT: bool = true;
            const IS_BOUNDED: bool = true;
            const HAS_INFINITY: bool = false;
            const HAS_QUIET_NAN: bool = false;
            const ROUND_STYLE: RoundStyle = RoundStyle::TowardZero;

            fn min_value() -> Self { <$t>::MIN }
            fn max_value() -> Self { <$t>::MAX }
            fn lowest() -> Self { <$t>::MIN }
            fn epsilon() -> Self { 0 }
            fn round_error() -> Self { 0 }
            fn infinity() -> Self { 0 }
            fn quiet_nan() -> Self { 0 }
        }
    )*};
}

impl_limits_for_primitive!(i32, i64, i128);

macro_rules! impl_limits_for_big_int {
    ($t:ty) => {
        impl NumericLimits for $t {
            const IS_SIGNED: bool = true;
            const IS_INTEGER: bool = true;
            const IS_EXACT: bool = true;
            const IS_BOUNDED: bool = false;
            const HAS_INFINITY: bool = false;
            const HAS_QUIET_NAN: bool = true;
            const ROUND_STYLE: RoundStyle = RoundStyle::TowardZero;

            // Unbounded: the range extremes have no value to report
            fn min_value() -> Self {
                <$t>::zero()
            }

            fn max_value() -> Self {
                <$t>::zero()
            }

            fn lowest() -> Self {
                <$t>::zero()
            }

            fn epsilon() -> Self {
                <$t>::zero()
            }

            fn round_error() -> Self {
                <$t>::zero()
            }

            fn infinity() -> Self {
                <$t>::zero()
            }

            fn quiet_nan() -> Self {
                <$t>::invalid()
            }
        }
    };
}

impl_limits_for_big_int!(BigInt);
impl_limits_for_big_int!(immut::BigInt);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_limits() {
        assert_eq!(<i64 as NumericLimits>::max_value(), i64::MAX);
        assert_eq!(<i32 as NumericLimits>::lowest(), i32::MIN);
        assert!(<i128 as NumericLimits>::IS_BOUNDED);
        assert!(!<i64 as NumericLimits>::HAS_QUIET_NAN);
    }

    #[test]
    fn test_big_int_limits() {
        assert!(!<BigInt as NumericLimits>::IS_BOUNDED);
        assert!(<BigInt as NumericLimits>::HAS_QUIET_NAN);
        assert!(!<BigInt as NumericLimits>::quiet_nan().is_valid());
        assert!(<BigInt as NumericLimits>::max_value().is_zero());
        assert!(<immut::BigInt as NumericLimits>::epsilon().is_zero());
        assert_eq!(
            <immut::BigInt as NumericLimits>::ROUND_STYLE,
            RoundStyle::TowardZero
        );
    }
}
