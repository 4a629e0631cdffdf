//! Big Integer
//!
//! Sign-magnitude arbitrary precision integer with exclusive ownership of
//! its digits. Compound operators (`+=`, `<<=`, ...) update the value in
//! place. See [`crate::immut::BigInt`] for the shared, never-mutated flavor.
//!
//! Arithmetic never fails. An invalid operand, or a zero divisor, produces
//! the invalid value, which then absorbs every later operation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};
use std::str::FromStr;

use crate::byte_array::ByteArray;
use crate::error::RadixError;
use crate::magnitude::{self, Parts};

/// Flag bit: the value is below zero
pub const NEGATIVE: u8 = 0x01;
/// Flag bit: the value is not a number
pub const INVALID: u8 = 0x02;

/// Base used by `Display`, `FromStr` and `From<&str>`
pub const DEFAULT_BASE: u32 = 10;
/// Smallest base accepted for parsing and formatting
pub const MIN_BASE: u32 = 2;
/// Largest base accepted for parsing and formatting
pub const MAX_BASE: u32 = 36;

/// Arbitrary precision signed integer
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    flags: u8,
    digits: ByteArray,
}

impl BigInt {
    /// Build from raw flags and little-endian magnitude, canonicalizing
    ///
    /// Unknown flag bits are dropped, an invalid value loses its digits and
    /// zero loses its sign.
    pub fn from_parts(flags: u8, digits: ByteArray) -> Self {
        let flags = flags & (NEGATIVE | INVALID);
        if flags & INVALID != 0 {
            return Self::invalid();
        }
        if digits.is_empty() {
            return Self::zero();
        }
        Self { flags, digits }
    }

    fn from_tuple((flags, digits): Parts) -> Self {
        Self::from_parts(flags, digits)
    }

    /// The value `0`, never negative
    pub fn zero() -> Self {
        Self {
            flags: 0,
            digits: ByteArray::new(),
        }
    }

    /// The value `1`
    pub fn one() -> Self {
        Self {
            flags: 0,
            digits: ByteArray::from_uint(1u8),
        }
    }

    /// The not-a-number value
    ///
    /// Carries only the `INVALID` flag. It renders as `"NaN"` and every
    /// operation involving it yields it again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numerics::BigInt;
    ///
    /// let nan = BigInt::invalid();
    /// assert_eq!(nan.to_string(), "NaN");
    /// assert!(!(nan + BigInt::from(1)).is_valid());
    /// assert!(!(BigInt::from(7) / BigInt::zero()).is_valid());
    /// ```
    pub fn invalid() -> Self {
        Self {
            flags: INVALID,
            digits: ByteArray::new(),
        }
    }

    /// Parse `text` in `base`
    ///
    /// An optional sign comes first; for base 16 an optional `0x` follows.
    /// Parsing stops at the first character that is not a digit of `base`.
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

    /// Raw flag byte, a combination of `NEGATIVE` and `INVALID`
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Magnitude, least significant byte first
    pub fn digits(&self) -> &ByteArray {
        &self.digits
    }

    /// Consume the value into its magnitude
    pub fn into_digits(self) -> ByteArray {
        self.digits
    }

    /// Absolute value; invalid stays invalid
    pub fn abs(&self) -> Self {
        Self {
            flags: self.flags & INVALID,
            digits: self.digits.clone(),
        }
    }

    /// Truncating division returning `(remainder, quotient)`
    ///
    /// The quotient rounds toward zero and the remainder carries the sign of
    /// `self`, so `quotient * denominator + remainder == self`.
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

    /// Render in `base`, or `None` if `base` is outside `MIN_BASE..=MAX_BASE`
    pub fn checked_to_string_base(&self, base: u32) -> Option<String> {
        RadixError::check(base)
            .ok()
            .map(|base| magnitude::format(self.flags, &self.digits, base))
    }

    /// Low 64 bits as a signed value; invalid becomes zero
    pub fn as_i64(&self) -> i64 {
        magnitude::as_i64(self.flags, &self.digits)
    }

    /// Exact conversion to `i64`
    ///
    /// # Returns
    ///
    /// `None` for the invalid value and for magnitudes outside
    /// `i64::MIN..=i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numerics::BigInt;
    ///
    /// assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
    /// assert_eq!(BigInt::from(u64::MAX).to_i64(), None);
    /// assert_eq!(BigInt::invalid().to_i64(), None);
    /// ```
    pub fn to_i64(&self) -> Option<i64> {
        magnitude::to_i64(self.flags, &self.digits)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                let flags = if value < 0 { NEGATIVE } else { 0 };
                Self::from_parts(flags, ByteArray::from_uint(value.unsigned_abs()))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_parts(0, ByteArray::from_uint(value))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

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

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if self.is_valid() && !self.digits.is_empty() {
            self.flags ^= NEGATIVE;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

macro_rules! impl_binary_op {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, |$a:ident, $b:ident| $body:expr) => {
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

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(self, rhs);
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(self, &rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, |a, b| BigInt::from_tuple(
    magnitude::add_signed(a.flags, &a.digits, b.flags, &b.digits)
));
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |a, b| BigInt::from_tuple(
    magnitude::sub_signed(a.flags, &a.digits, b.flags, &b.digits)
));
impl_binary_op!(Mul, mul, MulAssign, mul_assign, |a, b| BigInt::from_tuple(
    magnitude::mul_signed(a.flags, &a.digits, b.flags, &b.digits)
));
impl_binary_op!(Div, div, DivAssign, div_assign, |a, b| a.divide(b).1);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, |a, b| a.divide(b).0);

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, amount: usize) {
        self.digits <<= amount;
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, amount: usize) {
        self.digits >>= amount;
        if self.digits.is_empty() {
            self.flags &= INVALID;
        }
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, amount: usize) -> BigInt {
        self <<= amount;
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, amount: usize) -> BigInt {
        self.clone() << amount
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, amount: usize) -> BigInt {
        self >>= amount;
        self
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, amount: usize) -> BigInt {
        self.clone() >> amount
    }
}
