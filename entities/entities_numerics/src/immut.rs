//! Immutable Big Integer
//!
//! Same contract as [`crate::big::BigInt`], but the digit buffer lives behind
//! an [`Arc`] and is never written after construction. Cloning shares the
//! buffer and every operator allocates a fresh result. Zero, one and the
//! invalid value reuse process-wide interned buffers.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::big::{self, DEFAULT_BASE, INVALID, NEGATIVE};
use crate::byte_array::ByteArray;
use crate::error::RadixError;
use crate::magnitude::{self, Parts};
use crate::rational::RationalBase;

/// Rational over the immutable integer
pub type Rational = RationalBase<BigInt>;

lazy_static! {
    static ref ZERO: BigInt = BigInt {
        flags: 0,
        digits: Arc::new(ByteArray::new()),
    };
    static ref ONE: BigInt = BigInt {
        flags: 0,
        digits: Arc::new(ByteArray::from_uint(1u8)),
    };
    static ref INVALID_VALUE: BigInt = BigInt {
        flags: INVALID,
        digits: Arc::new(ByteArray::new()),
    };
}

/// Arbitrary precision signed integer with a shared digit buffer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    flags: u8,
    digits: Arc<ByteArray>,
}

impl BigInt {
    /// Build from raw parts, canonicalizing and interning
    pub fn from_parts(flags: u8, digits: ByteArray) -> Self {
        let flags = flags & (NEGATIVE | INVALID);
        if flags & INVALID != 0 {
            return Self::invalid();
        }
        if digits.is_empty() {
            return Self::zero();
        }
        if flags == 0 && digits.as_bytes() == [1] {
            return Self::one();
        }
        Self {
            flags,
            digits: Arc::new(digits),
        }
    }

    fn from_tuple((flags, digits): Parts) -> Self {
        Self::from_parts(flags, digits)
    }

    /// The value `0`, backed by the interned buffer
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// The value `1`, backed by the interned buffer
    pub fn one() -> Self {
        ONE.clone()
    }

    /// The not-a-number value, backed by the interned buffer
    pub fn invalid() -> Self {
        INVALID_VALUE.clone()
    }

    /// Parse `text` in `base`, as [`big::BigInt::from_str_base`]
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `MIN_BASE..=MAX_BASE`.
    pub fn from_str_base(text: &str, base: u32) -> Self {
        match Self::try_from_str_base(text, base) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Parse `text` in `base`, rejecting unusable bases
    pub fn try_from_str_base(text: &str, base: u32) -> Result<Self, RadixError> {
        let base = RadixError::check(base)?;
        Ok(Self::from_tuple(magnitude::parse(text, base)))
    }

    /// False for the not-a-number value
    pub fn is_valid(&self) -> bool {
        self.flags & INVALID == 0
    }

    /// True for a valid zero
    pub fn is_zero(&self) -> bool {
        self.is_valid() && self.digits.is_empty()
    }

    /// True when the value is below zero
    pub fn is_negative(&self) -> bool {
        self.flags & NEGATIVE != 0
    }

    /// Raw flag byte
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Magnitude, least significant byte first
    pub fn digits(&self) -> &ByteArray {
        &self.digits
    }

    /// True when both values point at the same digit buffer
    pub fn shares_digits(&self, other: &BigInt) -> bool {
        Arc::ptr_eq(&self.digits, &other.digits)
    }

    /// Absolute value; a non-negative input is returned sharing its buffer
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Truncating division returning `(remainder, quotient)`
    pub fn divide(&self, denominator: &BigInt) -> (BigInt, BigInt) {
        let (rem, quot) = magnitude::divide_signed(
            self.flags,
            &self.digits,
            denominator.flags,
            &denominator.digits,
        );
        (Self::from_tuple(rem), Self::from_tuple(quot))
    }

    /// Render in `base`; base 16 uses a `0x` prefix
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `MIN_BASE..=MAX_BASE`.
    pub fn to_string_base(&self, base: u32) -> String {
        match RadixError::check(base) {
            Ok(base) => magnitude::format(self.flags, &self.digits, base),
            Err(err) => panic!("{}", err),
        }
    }

    /// Render in `base`, or `None` for an unusable base
    pub fn checked_to_string_base(&self, base: u32) -> Option<String> {
        RadixError::check(base)
            .ok()
            .map(|base| magnitude::format(self.flags, &self.digits, base))
    }

    /// Low 64 bits as a signed value; invalid becomes zero
    pub fn as_i64(&self) -> i64 {
        magnitude::as_i64(self.flags, &self.digits)
    }

    /// Exact conversion to `i64`; `None` when invalid or out of range
    pub fn to_i64(&self) -> Option<i64> {
        magnitude::to_i64(self.flags, &self.digits)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_from_native {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                let value = big::BigInt::from(value);
                Self::from_parts(value.flags(), value.into_digits())
            }
        }
    )*};
}

impl_from_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<big::BigInt> for BigInt {
    fn from(value: big::BigInt) -> Self {
        let flags = value.flags();
        Self::from_parts(flags, value.into_digits())
    }
}

impl From<BigInt> for big::BigInt {
    fn from(value: BigInt) -> Self {
        let digits = Arc::try_unwrap(value.digits).unwrap_or_else(|shared| (*shared).clone());
        big::BigInt::from_parts(value.flags, digits)
    }
}

impl From<&BigInt> for big::BigInt {
    fn from(value: &BigInt) -> Self {
        big::BigInt::from_parts(value.flags, (*value.digits).clone())
    }
}

impl FromStr for BigInt {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tuple(magnitude::parse(s, DEFAULT_BASE)))
    }
}

impl From<&str> for BigInt {
    fn from(s: &str) -> Self {
        Self::from_tuple(magnitude::parse(s, DEFAULT_BASE))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&magnitude::format(self.flags, &self.digits, DEFAULT_BASE))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&magnitude::format(self.flags, &self.digits, 16))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        magnitude::compare_signed(self.flags, &self.digits, other.flags, &other.digits)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        if !self.is_valid() || self.digits.is_empty() {
            return self.clone();
        }
        BigInt::from_parts(self.flags ^ NEGATIVE, (*self.digits).clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

macro_rules! impl_binary_op {
    ($imp:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                <&BigInt as $imp<&BigInt>>::$method(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                <&BigInt as $imp<&BigInt>>::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                <&BigInt as $imp<&BigInt>>::$method(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, |a, b| BigInt::from_tuple(magnitude::add_signed(
    a.flags, &a.digits, b.flags, &b.digits
)));
impl_binary_op!(Sub, sub, |a, b| BigInt::from_tuple(magnitude::sub_signed(
    a.flags, &a.digits, b.flags, &b.digits
)));
impl_binary_op!(Mul, mul, |a, b| BigInt::from_tuple(magnitude::mul_signed(
    a.flags, &a.digits, b.flags, &b.digits
)));
impl_binary_op!(Div, div, |a, b| a.divide(b).1);
impl_binary_op!(Rem, rem, |a, b| a.divide(b).0);

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, amount: usize) -> BigInt {
        BigInt::from_parts(self.flags, &*self.digits << amount)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(self, amount: usize) -> BigInt {
        &self << amount
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, amount: usize) -> BigInt {
        BigInt::from_parts(self.flags, &*self.digits >> amount)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(self, amount: usize) -> BigInt {
        &self >> amount
    }
}
