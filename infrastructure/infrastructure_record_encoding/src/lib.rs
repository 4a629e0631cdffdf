//! Infrastructure Layer: Record Encoding
//!
//! Plain-data `#[repr(C)]` mirrors of the numeric entities and the
//! conversions between them, for callers on the far side of a C ABI.
//!
//! ## Records
//!
//! - [`ByteArrayRecord`]: length plus `malloc`ed byte buffer
//! - [`BigIntRecord`]: flag byte plus digit record, for either big integer
//!   flavor
//! - [`RationalRecord`]: numerator and denominator records
//!
//! ## Conversions
//!
//! Every record type has the same family of functions:
//! - `encode_*` copies a value into a newly allocated record
//! - `decode_*` copies a borrowed record out, leaving it owned by the caller
//! - `take_*` copies a record out and releases its buffers
//! - `write_*` releases what an output record held, then encodes into it
//! - `release_*` frees the buffers and resets the record
//!
//! ## See Also
//!
//! - [`entities_numerics`]: the value types these records carry

mod common;

pub mod big_int_records;
pub mod c_strings;
pub mod rational_records;

pub use big_int_records::{
    decode_big_int, encode_big_int, release_big_int, take_big_int, write_big_int, BigIntParts,
    BigIntRecord,
};
pub use c_strings::{
    decode_c_str, decode_str_with_len, encode_c_string, release_c_string, write_truncated,
};
pub use common::{
    decode_byte_array, encode_byte_array, release_byte_array, take_byte_array, ByteArrayRecord,
    DecodeError,
};
pub use rational_records::{
    decode_rational, encode_rational, release_rational, take_rational, write_rational,
    RationalRecord,
};
