//! Common API Facades
//!
//! Record lifecycle entry points (`init_*`, `free_*`) and the helpers every
//! other facade uses to read inputs and store outputs.
//!
//! Input records that are null or cannot be decoded are treated as the
//! invalid value (NaN for rationals) and logged. Null output pointers make
//! the call a no-op.

use log::{debug, warn};

use entities_numerics::{BigInt, Rational};
use infrastructure_record_encoding::{
    decode_big_int, decode_rational, release_big_int, release_byte_array, release_rational,
    write_big_int, write_rational, BigIntRecord, ByteArrayRecord, RationalRecord,
};

pub(crate) unsafe fn read_big_int(record: *const BigIntRecord, caller: &str) -> BigInt {
    let Some(record) = record.as_ref() else {
        warn!("{}: null big integer input, using invalid", caller);
        return BigInt::invalid();
    };
    decode_big_int(record).unwrap_or_else(|err| {
        warn!("{}: {}, using invalid", caller, err);
        BigInt::invalid()
    })
}

pub(crate) unsafe fn store_big_int(value: &BigInt, out: *mut BigIntRecord, caller: &str) {
    match out.as_mut() {
        Some(out) => write_big_int(value, out),
        None => debug!("{}: no output record", caller),
    }
}

pub(crate) unsafe fn read_rational(record: *const RationalRecord, caller: &str) -> Rational {
    let Some(record) = record.as_ref() else {
        warn!("{}: null rational input, using NaN", caller);
        return Rational::nan();
    };
    decode_rational(record).unwrap_or_else(|err| {
        warn!("{}: {}, using NaN", caller, err);
        Rational::nan()
    })
}

pub(crate) unsafe fn store_rational(value: &Rational, out: *mut RationalRecord, caller: &str) {
    match out.as_mut() {
        Some(out) => write_rational(value, out),
        None => debug!("{}: no output record", caller),
    }
}

/// Reset a byte array record to empty without freeing
///
/// # Safety
/// `ba` must be null or point to writable memory for a record.
#[no_mangle]
pub unsafe extern "C" fn init_byte_array(ba: *mut ByteArrayRecord) {
    if !ba.is_null() {
        ba.write(ByteArrayRecord::empty());
    }
}

/// Reset a big integer record to zero without freeing
///
/// # Safety
/// `bi` must be null or point to writable memory for a record.
#[no_mangle]
pub unsafe extern "C" fn init_big_int(bi: *mut BigIntRecord) {
    if !bi.is_null() {
        bi.write(BigIntRecord::default());
    }
}

/// # Safety
/// `ra` must be null or point to writable memory for a record.
#[no_mangle]
pub unsafe extern "C" fn init_rational(ra: *mut RationalRecord) {
    if !ra.is_null() {
        ra.write(RationalRecord::default());
    }
}

/// # Safety
/// `ba` must be null or an initialized record owning its buffer.
#[no_mangle]
pub unsafe extern "C" fn free_byte_array(ba: *mut ByteArrayRecord) {
    if let Some(ba) = ba.as_mut() {
        release_byte_array(ba);
    }
}

/// # Safety
/// `bi` must be null or an initialized record owning its buffer.
#[no_mangle]
pub unsafe extern "C" fn free_big_int(bi: *mut BigIntRecord) {
    if let Some(bi) = bi.as_mut() {
        release_big_int(bi);
    }
}

/// # Safety
/// `ra` must be null or an initialized record owning its buffers.
#[no_mangle]
pub unsafe extern "C" fn free_rational(ra: *mut RationalRecord) {
    if let Some(ra) = ra.as_mut() {
        release_rational(ra);
    }
}
