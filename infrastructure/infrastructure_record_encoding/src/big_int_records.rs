//! Big Integer Records
//!
//! `BigIntRecord` mirrors a big integer as its flag byte plus a byte buffer
//! record. The flag bits are the ones the entities use (`NEGATIVE`,
//! `INVALID`); unknown bits are dropped on decode.

use entities_numerics::{immut, BigInt, ByteArray};

use crate::common::{
    decode_byte_array, encode_byte_array, release_byte_array, ByteArrayRecord, DecodeError,
};

/// Flag byte plus magnitude
#[repr(C)]
#[derive(Debug, Default)]
pub struct BigIntRecord {
    pub flags: u8,
    pub digits: ByteArrayRecord,
}

/// Big integer flavors that can cross the record boundary
pub trait BigIntParts: Sized {
    fn record_flags(&self) -> u8;
    fn record_digits(&self) -> &ByteArray;
    fn from_record_parts(flags: u8, digits: ByteArray) -> Self;
}

impl BigIntParts for BigInt {
    fn record_flags(&self) -> u8 {
        self.flags()
    }

    fn record_digits(&self) -> &ByteArray {
        self.digits()
    }

    fn from_record_parts(flags: u8, digits: ByteArray) -> Self {
        BigInt::from_parts(flags, digits)
    }
}

impl BigIntParts for immut::BigInt {
    fn record_flags(&self) -> u8 {
        self.flags()
    }

    fn record_digits(&self) -> &ByteArray {
        self.digits()
    }

    fn from_record_parts(flags: u8, digits: ByteArray) -> Self {
        immut::BigInt::from_parts(flags, digits)
    }
}

/// Copy a big integer into a freshly allocated record
pub fn encode_big_int<B: BigIntParts>(value: &B) -> BigIntRecord {
    BigIntRecord {
        flags: value.record_flags(),
        digits: encode_byte_array(value.record_digits()),
    }
}

/// Copy a borrowed record into a big integer
///
/// # Safety
///
/// The digit buffer must satisfy [`decode_byte_array`]'s requirements.
pub unsafe fn decode_big_int<B: BigIntParts>(record: &BigIntRecord) -> Result<B, DecodeError> {
    let digits = decode_byte_array(&record.digits)?;
    Ok(B::from_record_parts(record.flags, digits))
}

/// Free the digit buffer and reset the record to zero
///
/// # Safety
///
/// The digit buffer must satisfy [`release_byte_array`]'s requirements.
pub unsafe fn release_big_int(record: &mut BigIntRecord) {
    release_byte_array(&mut record.digits);
    record.flags = 0;
}

/// Decode then release
///
/// # Safety
///
/// Same requirements as [`decode_big_int`] and [`release_big_int`].
pub unsafe fn take_big_int<B: BigIntParts>(record: &mut BigIntRecord) -> Result<B, DecodeError> {
    let res = decode_big_int(record);
    release_big_int(record);
    res
}

/// Replace the content of `out` with `value`, releasing what it held
///
/// # Safety
///
/// `out` must be an initialized record whose buffer may be released.
pub unsafe fn write_big_int<B: BigIntParts>(value: &B, out: &mut BigIntRecord) {
    release_big_int(out);
    *out = encode_big_int(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numerics::{INVALID, NEGATIVE};

    #[test]
    fn test_encode_negative() {
        let mut record = encode_big_int(&BigInt::from(-0x1234));
        assert_eq!(record.flags, NEGATIVE);
        assert_eq!(record.digits.len, 2);
        let back: BigInt = unsafe { take_big_int(&mut record) }.unwrap();
        assert_eq!(back, BigInt::from(-0x1234));
    }

    #[test]
    fn test_zero_owns_nothing() {
        let record = encode_big_int(&BigInt::zero());
        assert_eq!(record.flags, 0);
        assert!(record.digits.bytes.is_null());
    }

    #[test]
    fn test_invalid_round_trip() {
        let mut record = encode_big_int(&immut::BigInt::invalid());
        assert_eq!(record.flags, INVALID);
        let back: immut::BigInt = unsafe { take_big_int(&mut record) }.unwrap();
        assert!(!back.is_valid());
    }

    #[test]
    fn test_unknown_flags_dropped() {
        let record = BigIntRecord {
            flags: 0xf0 | NEGATIVE,
            digits: ByteArrayRecord::empty(),
        };
        let value: BigInt = unsafe { decode_big_int(&record) }.unwrap();
        assert_eq!(value, BigInt::zero());
        assert_eq!(value.flags(), 0);
    }

    #[test]
    fn test_write_replaces() {
        let mut out = encode_big_int(&BigInt::from(1_000_000));
        unsafe { write_big_int(&BigInt::from(7), &mut out) };
        let value: BigInt = unsafe { decode_big_int(&out) }.unwrap();
        assert_eq!(value, BigInt::from(7));
        unsafe { release_big_int(&mut out) };
        assert!(out.digits.is_empty());
    }
}
