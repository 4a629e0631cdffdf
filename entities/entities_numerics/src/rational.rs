//! Rational Number Operations Module
//!
//! Exact fractions over any integer type implementing [`IntegerLike`].
//!
//! # Purpose
//!
//! A rational keeps a numerator and a denominator and reduces them to lowest
//! terms after construction and after every arithmetic operation. Division
//! by zero does not fail: the zero denominator encodes the special values.
//!
//! - **NaN**: `0/0`. Produced by `0/0`, `inf - inf`, `inf * 0`, `inf / inf`
//!   and by any backing value that reports itself as NaN (an invalid big
//!   integer, for instance). NaN absorbs every operation.
//! - **Signed infinity**: `1/0` and `-1/0`. Produced by dividing a non-zero
//!   value by zero.
//!
//! # Ordering
//!
//! Values compare by cross multiplication, which orders the infinities
//! correctly. NaN equals NaN and sorts below every other value so the order
//! is total. Over fixed-width backing types the products must not overflow.
//!
//! # Examples
//!
//! ```rust
//! use entities_numerics::{BigInt, Rational, RationalBase};
//!
//! let half = Rational::new(BigInt::from(2), BigInt::from(4));
//! assert_eq!(half.to_string(), "1/2");
//!
//! let third = RationalBase::new(1i64, 3);
//! assert_eq!((third.clone() + third).to_string(), "2/3");
//!
//! let inf = RationalBase::new(5i64, 0);
//! assert!(inf.is_pos_infinity());
//! assert!((inf.clone() - inf).is_nan());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::big::BigInt;
use crate::integer::IntegerLike;
use crate::limits::{NumericLimits, RoundStyle};

/// Rational over the mutable big integer
pub type Rational = RationalBase<BigInt>;

/// Numerator/denominator pair kept in lowest terms
///
/// The denominator is never negative. A zero denominator marks NaN (zero
/// numerator) or an infinity (numerator `1` or `-1`).
#[derive(Clone, Debug)]
pub struct RationalBase<T> {
    numerator: T,
    denominator: T,
}

impl<T: IntegerLike> RationalBase<T> {
    /// Build `numerator / denominator` reduced to lowest terms
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numerics::RationalBase;
    ///
    /// let r = RationalBase::new(6i64, -4);
    /// assert_eq!(r.numerator(), &-3);
    /// assert_eq!(r.denominator(), &2);
    /// ```
    pub fn new(numerator: T, denominator: T) -> Self {
        let mut res = Self {
            numerator,
            denominator,
        };
        res.simplify();
        res
    }

    /// Build `value / 1`
    pub fn from_integer(value: T) -> Self {
        Self::new(value, T::one())
    }

    /// The not-a-number value `0/0`
    ///
    /// NaN absorbs every arithmetic operation and compares equal to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numerics::RationalBase;
    ///
    /// let nan = RationalBase::<i64>::nan();
    /// assert_eq!(nan.to_string(), "0/0");
    /// assert!((nan + RationalBase::from_integer(3)).is_nan());
    /// ```
    pub fn nan() -> Self {
        Self {
            numerator: T::zero(),
            denominator: T::zero(),
        }
    }

    /// Positive infinity, stored as `1/0`
    pub fn infinity() -> Self {
        Self {
            numerator: T::one(),
            denominator: T::zero(),
        }
    }

    /// Negative infinity, stored as `-1/0`
    pub fn neg_infinity() -> Self {
        Self {
            numerator: -T::one(),
            denominator: T::zero(),
        }
    }

    /// Numerator in lowest terms, carrying the sign
    pub fn numerator(&self) -> &T {
        &self.numerator
    }

    /// Denominator, never negative; zero for NaN and the infinities
    pub fn denominator(&self) -> &T {
        &self.denominator
    }

    /// Consume the value into `(numerator, denominator)`
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    /// True for `0/0`
    pub fn is_nan(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_zero()
    }

    /// True for either infinity
    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }

    /// True for `1/0`
    pub fn is_pos_infinity(&self) -> bool {
        self.is_infinite() && !self.numerator.is_negative_value()
    }

    /// True for `-1/0`
    pub fn is_neg_infinity(&self) -> bool {
        self.is_infinite() && self.numerator.is_negative_value()
    }

    /// True when the denominator is non-zero
    pub fn is_finite(&self) -> bool {
        !self.denominator.is_zero()
    }

    /// Restore the lowest-terms invariant
    fn simplify(&mut self) {
        if self.numerator.is_nan() || self.denominator.is_nan() {
            *self = Self::nan();
            return;
        }
        let num_inf = self.numerator.is_pos_infinity() || self.numerator.is_neg_infinity();
        let den_inf = self.denominator.is_pos_infinity() || self.denominator.is_neg_infinity();
        if den_inf {
            *self = if num_inf {
                Self::nan()
            } else {
                Self::from_parts_unchecked(T::zero(), T::one())
            };
            return;
        }
        if num_inf {
            *self = if self.numerator.is_neg_infinity() {
                Self::neg_infinity()
            } else {
                Self::infinity()
            };
            return;
        }

        if self.denominator.is_negative_value() {
            self.numerator = -self.numerator.clone();
            self.denominator = -self.denominator.clone();
        }
        if self.denominator == T::one() {
            return;
        }
        if self.denominator.is_zero() {
            self.numerator = self.numerator.signum_value();
            return;
        }
        if (self.numerator.abs_value() % self.denominator.clone()).is_zero() {
            self.numerator = self.numerator.clone() / self.denominator.clone();
            self.denominator = T::one();
            return;
        }
        let divisor = gcd(&self.numerator, &self.denominator);
        if divisor != T::one() {
            self.numerator = self.numerator.clone() / divisor.clone();
            self.denominator = self.denominator.clone() / divisor;
        }
    }

    fn from_parts_unchecked(numerator: T, denominator: T) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    fn add_ref(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }
        if self.is_infinite() {
            if other.is_infinite() && self.is_pos_infinity() != other.is_pos_infinity() {
                return Self::nan();
            }
            return self.clone();
        }
        if other.is_infinite() {
            return other.clone();
        }
        if self.denominator == other.denominator {
            return Self::new(
                self.numerator.clone() + other.numerator.clone(),
                self.denominator.clone(),
            );
        }
        Self::new(
            self.numerator.clone() * other.denominator.clone()
                + other.numerator.clone() * self.denominator.clone(),
            self.denominator.clone() * other.denominator.clone(),
        )
    }

    fn mul_ref(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }
        if self.is_infinite() || other.is_infinite() {
            // Zero denominator reduces the product's numerator to its sign,
            // and an infinity times zero to NaN
            return Self::new(
                self.numerator.clone() * other.numerator.clone(),
                T::zero(),
            );
        }
        Self::new(
            self.numerator.clone() * other.numerator.clone(),
            self.denominator.clone() * other.denominator.clone(),
        )
    }

    fn div_ref(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }
        if self.is_infinite() {
            if other.is_infinite() {
                return Self::nan();
            }
            let sign = if other.numerator.is_negative_value() {
                -T::one()
            } else {
                T::one()
            };
            return Self::new(self.numerator.clone() * sign, T::zero());
        }
        if other.is_infinite() {
            return Self::from_parts_unchecked(T::zero(), T::one());
        }
        Self::new(
            self.numerator.clone() * other.denominator.clone(),
            self.denominator.clone() * other.numerator.clone(),
        )
    }
}

/// Greatest common divisor of `|a|` and `b`, never negative
fn gcd<T: IntegerLike>(a: &T, b: &T) -> T {
    let mut x = a.abs_value();
    let mut y = b.abs_value();
    while !y.is_zero() {
        let r = x % y.clone();
        x = y;
        y = r;
    }
    x.abs_value()
}

impl<T: IntegerLike> Default for RationalBase<T> {
    fn default() -> Self {
        Self::from_parts_unchecked(T::zero(), T::one())
    }
}

impl<T: IntegerLike> From<T> for RationalBase<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: IntegerLike> fmt::Display for RationalBase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: IntegerLike> PartialEq for RationalBase<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: IntegerLike> Eq for RationalBase<T> {}

impl<T: IntegerLike> Ord for RationalBase<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let left = self.numerator.clone() * other.denominator.clone();
        let right = other.numerator.clone() * self.denominator.clone();
        left.cmp(&right)
    }
}

impl<T: IntegerLike> PartialOrd for RationalBase<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: IntegerLike> Neg for RationalBase<T> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.numerator.is_zero() {
            return self;
        }
        Self::from_parts_unchecked(-self.numerator, self.denominator)
    }
}

impl<T: IntegerLike> Neg for &RationalBase<T> {
    type Output = RationalBase<T>;

    fn neg(self) -> RationalBase<T> {
        -self.clone()
    }
}

macro_rules! impl_rational_op {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $helper:ident) => {
        impl<T: IntegerLike> $imp<&RationalBase<T>> for &RationalBase<T> {
            type Output = RationalBase<T>;

            fn $method(self, rhs: &RationalBase<T>) -> RationalBase<T> {
                self.$helper(rhs)
            }
        }

        impl<T: IntegerLike> $imp<RationalBase<T>> for RationalBase<T> {
            type Output = RationalBase<T>;

            fn $method(self, rhs: RationalBase<T>) -> RationalBase<T> {
                self.$helper(&rhs)
            }
        }

        impl<T: IntegerLike> $imp<&RationalBase<T>> for RationalBase<T> {
            type Output = RationalBase<T>;

            fn $method(self, rhs: &RationalBase<T>) -> RationalBase<T> {
                self.$helper(rhs)
            }
        }

        impl<T: IntegerLike> $assign_imp<&RationalBase<T>> for RationalBase<T> {
            fn $assign_method(&mut self, rhs: &RationalBase<T>) {
                *self = self.$helper(rhs);
            }
        }

        impl<T: IntegerLike> $assign_imp<RationalBase<T>> for RationalBase<T> {
            fn $assign_method(&mut self, rhs: RationalBase<T>) {
                *self = self.$helper(&rhs);
            }
        }
    };
}

impl_rational_op!(Add, add, AddAssign, add_assign, add_ref);
impl_rational_op!(Mul, mul, MulAssign, mul_assign, mul_ref);
impl_rational_op!(Div, div, DivAssign, div_assign, div_ref);

impl<T: IntegerLike> RationalBase<T> {
    fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&-other)
    }
}

impl_rational_op!(Sub, sub, SubAssign, sub_assign, sub_ref);

impl<T: IntegerLike> NumericLimits for RationalBase<T> {
    const IS_SIGNED: bool = T::IS_SIGNED;
    const IS_INTEGER: bool = false;
    const IS_EXACT: bool = true;
    const IS_BOUNDED: bool = T::IS_BOUNDED;
    const HAS_INFINITY: bool = true;
    const HAS_QUIET_NAN: bool = true;
    const ROUND_STYLE: RoundStyle = RoundStyle::ToNearest;

    fn min_value() -> Self {
        if T::IS_BOUNDED {
            Self::new(T::one(), T::max_value())
        } else {
            Self::neg_infinity()
        }
    }

    fn max_value() -> Self {
        if T::IS_BOUNDED {
            Self::new(T::max_value(), T::one())
        } else {
            RationalBase::infinity()
        }
    }

    fn lowest() -> Self {
        if T::IS_BOUNDED && !T::min_value().is_zero() {
            Self::new(T::one(), T::max_value())
        } else {
            Self::default()
        }
    }

    fn epsilon() -> Self {
        let eps = T::epsilon();
        if eps.is_zero() {
            Self::min_value()
        } else {
            Self::new(eps, T::one())
        }
    }

    fn round_error() -> Self {
        Self::new(T::one(), T::two())
    }

    fn infinity() -> Self {
        Self::from_parts_unchecked(T::one(), T::zero())
    }

    fn quiet_nan() -> Self {
        Self::from_parts_unchecked(T::zero(), T::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = RationalBase<i64>;

    fn r(n: i64, d: i64) -> R {
        R::new(n, d)
    }

    #[test]
    fn test_addition() {
        assert_eq!(r(1, 3) + r(1, 3), r(2, 3));
        assert_eq!(r(2, 3) + r(5, 6), r(3, 2));
        assert_eq!((r(1, 2) + r(1, 2)).to_string(), "1/1");
    }

    #[test]
    fn test_same_denominator_sum_is_reduced() {
        let sum = r(1, 4) + r(1, 4);
        assert_eq!(sum.numerator(), &1);
        assert_eq!(sum.denominator(), &2);
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(r(2, 3) - r(1, 3), r(1, 3));
        assert_eq!(r(3, 2) - r(5, 6), r(2, 3));
        assert_eq!((r(1, 3) - r(1, 2)).to_string(), "-1/6");
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(r(2, 7) * r(3, 5), r(6, 35));
        assert_eq!(r(5, 7) * r(3, 5), r(3, 7));
    }

    #[test]
    fn test_division() {
        assert_eq!(r(2, 7) / r(5, 3), r(6, 35));
        assert_eq!(r(5, 7) / r(5, 3), r(3, 7));
        assert_eq!(r(1, 2) / r(-1, 4), r(-2, 1));
    }

    #[test]
    fn test_reduction() {
        assert_eq!(r(2, 4), r(1, 2));
        assert_eq!(r(2, 6).to_string(), "1/3");
        assert_eq!(r(-6, -4).to_string(), "3/2");
        assert_eq!(r(6, -3).to_string(), "-2/1");
        assert_eq!(r(0, 5).to_string(), "0/1");
        assert_eq!(r(-7, 0).to_string(), "-1/0");
    }

    #[test]
    fn test_special_value_predicates() {
        let nan = R::nan();
        let inf = R::infinity();
        let ninf = R::neg_infinity();
        let finite = r(3, 4);

        assert!(nan.is_nan() && !nan.is_infinite() && !nan.is_finite());
        assert!(inf.is_infinite() && inf.is_pos_infinity() && !inf.is_neg_infinity());
        assert!(ninf.is_infinite() && ninf.is_neg_infinity() && !ninf.is_pos_infinity());
        assert!(finite.is_finite() && !finite.is_nan() && !finite.is_infinite());
    }

    #[test]
    fn test_special_value_addition() {
        let inf = R::infinity();
        let ninf = R::neg_infinity();
        assert_eq!(&inf + &inf, inf);
        assert!((&inf + &ninf).is_nan());
        assert_eq!(&inf + &r(5, 2), inf);
        assert_eq!(&r(5, 2) + &ninf, ninf);
        assert!((&R::nan() + &r(1, 1)).is_nan());
    }

    #[test]
    fn test_special_value_multiplication() {
        let inf = R::infinity();
        assert_eq!(&inf * &r(-2, 3), R::neg_infinity());
        assert!((&inf * &R::default()).is_nan());
        assert_eq!(&R::neg_infinity() * &R::neg_infinity(), inf);
        assert!((&R::nan() * &inf).is_nan());
    }

    #[test]
    fn test_special_value_division() {
        let inf = R::infinity();
        assert!((&inf / &inf).is_nan());
        assert_eq!(&r(3, 1) / &inf, R::default());
        assert_eq!(&r(3, 1) / &R::default(), inf);
        assert_eq!(&r(-3, 1) / &R::default(), R::neg_infinity());
        assert!((&R::default() / &R::default()).is_nan());
        assert_eq!(&inf / &r(-1, 2), R::neg_infinity());
        assert_eq!(&R::neg_infinity() / &R::default(), R::neg_infinity());
    }

    #[test]
    fn test_comparison() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(R::neg_infinity() < r(-1000, 1));
        assert!(R::infinity() > r(1000, 1));
        assert!(R::nan() < R::neg_infinity());
        assert_eq!(R::nan(), R::nan());
    }

    #[test]
    fn test_negation() {
        assert_eq!(-r(1, 3), r(-1, 3));
        assert_eq!(-R::infinity(), R::neg_infinity());
        assert!((-R::nan()).is_nan());
        assert_eq!(-R::default(), R::default());
    }

    #[test]
    fn test_compound_operators() {
        let mut x = r(1, 2);
        x += r(1, 3);
        assert_eq!(x, r(5, 6));
        x -= &r(1, 6);
        assert_eq!(x, r(2, 3));
        x *= r(3, 4);
        assert_eq!(x, r(1, 2));
        x /= r(1, 4);
        assert_eq!(x, r(2, 1));
    }

    #[test]
    fn test_big_int_backing() {
        let a = Rational::new(BigInt::from(2), BigInt::from(4));
        assert_eq!(a.to_string(), "1/2");
        let invalid = Rational::new(BigInt::invalid(), BigInt::from(3));
        assert!(invalid.is_nan());
        assert_eq!(invalid.to_string(), "0/0");
        let b = Rational::new(BigInt::from(-1485209), BigInt::from(3));
        assert_eq!((&b + &a).to_string(), "-2970415/6");
    }

    #[test]
    fn test_limits() {
        assert_eq!(<R as NumericLimits>::max_value(), r(i64::MAX, 1));
        assert_eq!(<R as NumericLimits>::min_value(), r(1, i64::MAX));
        assert_eq!(<R as NumericLimits>::round_error(), r(1, 2));
        assert!(<R as NumericLimits>::quiet_nan().is_nan());
        assert!(<Rational as NumericLimits>::max_value().is_pos_infinity());
        assert!(<Rational as NumericLimits>::epsilon().is_neg_infinity());
        assert_eq!(<Rational as NumericLimits>::lowest(), Rational::default());
    }
}
