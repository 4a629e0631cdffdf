//! API Facades Layer
//!
//! `#[no_mangle] extern "C"` entry points over the record types of
//! `infrastructure_record_encoding`. The crate builds as a `cdylib` for
//! foreign callers and as an `rlib` for Rust tests.
//!
//! Conventions shared by every facade:
//! - output records must be initialized with `init_*` before first use and
//!   are released with `free_*`
//! - a null output pointer turns the call into a no-op
//! - a null or undecodable input record reads as the invalid big integer
//!   (or NaN rational) and is logged at `warn` level
//! - no data condition unwinds across the boundary; an unusable radix makes
//!   the call return `false`

pub mod big_int_facades;
pub mod common_facades;
pub mod rational_facades;
pub mod string_facades;

pub use big_int_facades::*;
pub use common_facades::*;
pub use rational_facades::*;
pub use string_facades::*;

pub use infrastructure_record_encoding::{BigIntRecord, ByteArrayRecord, RationalRecord};
