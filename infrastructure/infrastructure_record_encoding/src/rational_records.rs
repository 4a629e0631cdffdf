//! Rational Records
//!
//! A rational crosses the boundary as two big integer records. Decoding runs
//! the rational constructor again, so a record built by foreign code in
//! non-reduced form comes back in lowest terms.

use entities_numerics::{IntegerLike, RationalBase};

use crate::big_int_records::{
    decode_big_int, encode_big_int, release_big_int, BigIntParts, BigIntRecord,
};
use crate::common::DecodeError;

#[repr(C)]
#[derive(Debug, Default)]
pub struct RationalRecord {
    pub numerator: BigIntRecord,
    pub denominator: BigIntRecord,
}

pub fn encode_rational<B>(value: &RationalBase<B>) -> RationalRecord
where
    B: BigIntParts + IntegerLike,
{
    RationalRecord {
        numerator: encode_big_int(value.numerator()),
        denominator: encode_big_int(value.denominator()),
    }
}

/// # Safety
///
/// Both digit buffers must satisfy `decode_byte_array`'s requirements.
pub unsafe fn decode_rational<B>(record: &RationalRecord) -> Result<RationalBase<B>, DecodeError>
where
    B: BigIntParts + IntegerLike,
{
    let numerator = decode_big_int::<B>(&record.numerator)?;
    let denominator = decode_big_int::<B>(&record.denominator)?;
    Ok(RationalBase::new(numerator, denominator))
}

/// # Safety
///
/// Both digit buffers must satisfy `release_byte_array`'s requirements.
pub unsafe fn release_rational(record: &mut RationalRecord) {
    release_big_int(&mut record.numerator);
    release_big_int(&mut record.denominator);
}

/// # Safety
///
/// Same requirements as [`decode_rational`] and [`release_rational`].
pub unsafe fn take_rational<B>(record: &mut RationalRecord) -> Result<RationalBase<B>, DecodeError>
where
    B: BigIntParts + IntegerLike,
{
    let res = decode_rational(record);
    release_rational(record);
    res
}

/// # Safety
///
/// `out` must be an initialized record whose buffers may be released.
pub unsafe fn write_rational<B>(value: &RationalBase<B>, out: &mut RationalRecord)
where
    B: BigIntParts + IntegerLike,
{
    release_rational(out);
    *out = encode_rational(value);
}
