//! Entities Layer: Numerics
//!
//! Provides the arbitrary precision arithmetic core:
//! - [`ByteArray`]: little-endian byte container with bitwise operators and
//!   shifts that cross byte boundaries
//! - [`BigInt`]: sign-magnitude integer with exclusive ownership and in-place
//!   compound operators
//! - [`immut::BigInt`]: the same integer with a reference-counted, never
//!   mutated digit buffer
//! - [`RationalBase`]: exact fractions over any [`IntegerLike`] backing type,
//!   with NaN and signed infinities encoded by a zero denominator
//!
//! ## Invalid values
//!
//! Big integers carry an *invalid* state instead of raising errors. Any
//! arithmetic touching an invalid operand, and division by zero, yields the
//! invalid value. Invalid values compare equal to each other and below every
//! valid value.
//!
//! ```rust
//! use entities_numerics::BigInt;
//!
//! let a = BigInt::from(1485209);
//! let b = BigInt::from(934889);
//! assert_eq!((&a - &b).to_string_base(16), "0x865b0");
//! assert!(!(a / BigInt::zero()).is_valid());
//! ```

pub mod big;
pub mod byte_array;
pub mod error;
pub mod immut;
pub mod integer;
pub mod limits;
mod magnitude;
pub mod rational;

pub use big::{BigInt, DEFAULT_BASE, INVALID, MAX_BASE, MIN_BASE, NEGATIVE};
pub use byte_array::{ByteArray, Word};
pub use error::RadixError;
pub use integer::IntegerLike;
pub use limits::{NumericLimits, RoundStyle};
pub use rational::{Rational, RationalBase};
