//! Big Integer Facades
//!
//! C entry points that build big integers and run arithmetic on them. Each
//! output record must have been initialized (`init_big_int`); its previous
//! buffer is released before the result is written.

use std::ffi::{c_char, c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong};

use log::warn;

use entities_numerics::BigInt;
use infrastructure_record_encoding::{decode_c_str, decode_str_with_len, BigIntRecord};

use crate::common_facades::{read_big_int, store_big_int};

/// Parse `strlen` bytes of decimal text
///
/// An empty input (`strlen == 0`, with or without a pointer) is zero.
///
/// # Safety
/// `str` must be null or point to `strlen` readable bytes; `out` must be
/// null or an initialized record.
#[no_mangle]
pub unsafe extern "C" fn set_big_int_to_str_safe(
    str: *const c_char,
    strlen: c_ulonglong,
    out: *mut BigIntRecord,
) {
    let value = match usize::try_from(strlen) {
        Ok(0) => BigInt::zero(),
        Ok(_) if str.is_null() => {
            warn!("set_big_int_to_str_safe: null string, using invalid");
            BigInt::invalid()
        }
        Ok(len) => BigInt::from(decode_str_with_len(str, len).as_str()),
        Err(_) => {
            warn!("set_big_int_to_str_safe: length {} too large", strlen);
            BigInt::invalid()
        }
    };
    store_big_int(&value, out, "set_big_int_to_str_safe");
}

/// Parse NUL-terminated decimal text
///
/// # Safety
/// `str` must be null or NUL-terminated; `out` must be null or an
/// initialized record.
#[no_mangle]
pub unsafe extern "C" fn set_big_int_to_str(str: *const c_char, out: *mut BigIntRecord) {
    let value = if str.is_null() {
        warn!("set_big_int_to_str: null string, using invalid");
        BigInt::invalid()
    } else {
        BigInt::from(decode_c_str(str).as_str())
    };
    store_big_int(&value, out, "set_big_int_to_str");
}

/// Parse NUL-terminated text in `radix`; false when the radix is unusable
///
/// # Safety
/// Same as [`set_big_int_to_str`].
#[no_mangle]
pub unsafe extern "C" fn set_big_int_to_str_rdx(
    str: *const c_char,
    radix: c_int,
    out: *mut BigIntRecord,
) -> bool {
    if str.is_null() {
        warn!("set_big_int_to_str_rdx: null string");
        return false;
    }
    let parsed = u32::try_from(radix)
        .ok()
        .and_then(|radix| BigInt::try_from_str_base(&decode_c_str(str), radix).ok());
    match parsed {
        Some(value) => {
            store_big_int(&value, out, "set_big_int_to_str_rdx");
            true
        }
        None => {
            warn!("set_big_int_to_str_rdx: unusable radix {}", radix);
            false
        }
    }
}

macro_rules! set_big_int_from_native {
    ($($name:ident: $t:ty),* $(,)?) => {$(
        /// # Safety
        /// `out` must be null or an initialized record.
        #[no_mangle]
        pub unsafe extern "C" fn $name(val: $t, out: *mut BigIntRecord) {
            store_big_int(&BigInt::from(val), out, stringify!($name));
        }
    )*};
}

set_big_int_from_native!(
    set_big_int_to_int: c_int,
    set_big_int_to_long: c_long,
    set_big_int_to_long_long: c_longlong,
    set_big_int_to_uint: c_uint,
    set_big_int_to_ulong: c_ulong,
    set_big_int_to_ulong_long: c_ulonglong,
);

/// # Safety
/// Inputs must be null or valid records; `out` must be null or an
/// initialized record.
#[no_mangle]
pub unsafe extern "C" fn add_big_int(
    left: *const BigIntRecord,
    right: *const BigIntRecord,
    out: *mut BigIntRecord,
) {
    if out.is_null() {
        return;
    }
    let mut value = read_big_int(left, "add_big_int");
    value += read_big_int(right, "add_big_int");
    store_big_int(&value, out, "add_big_int");
}

/// # Safety
/// Same as [`add_big_int`].
#[no_mangle]
pub unsafe extern "C" fn sub_big_int(
    left: *const BigIntRecord,
    right: *const BigIntRecord,
    out: *mut BigIntRecord,
) {
    if out.is_null() {
        return;
    }
    let mut value = read_big_int(left, "sub_big_int");
    value -= read_big_int(right, "sub_big_int");
    store_big_int(&value, out, "sub_big_int");
}

/// # Safety
/// Same as [`add_big_int`].
#[no_mangle]
pub unsafe extern "C" fn mul_big_int(
    left: *const BigIntRecord,
    right: *const BigIntRecord,
    out: *mut BigIntRecord,
) {
    if out.is_null() {
        return;
    }
    let mut value = read_big_int(left, "mul_big_int");
    value *= read_big_int(right, "mul_big_int");
    store_big_int(&value, out, "mul_big_int");
}

/// # Safety
/// Same as [`add_big_int`].
#[no_mangle]
pub unsafe extern "C" fn div_big_int(
    left: *const BigIntRecord,
    right: *const BigIntRecord,
    out: *mut BigIntRecord,
) {
    div_rem_big_int(left, right, out, std::ptr::null_mut());
}

/// Truncating division; either output may be null
///
/// # Safety
/// Inputs must be null or valid records; outputs must be null or
/// initialized records.
#[no_mangle]
pub unsafe extern "C" fn div_rem_big_int(
    left: *const BigIntRecord,
    right: *const BigIntRecord,
    quotient: *mut BigIntRecord,
    remainder: *mut BigIntRecord,
) {
    let numerator = read_big_int(left, "div_rem_big_int");
    let denominator = read_big_int(right, "div_rem_big_int");
    let (rem, quot) = numerator.divide(&denominator);
    if !quotient.is_null() {
        store_big_int(&quot, quotient, "div_rem_big_int");
    }
    if !remainder.is_null() {
        store_big_int(&rem, remainder, "div_rem_big_int");
    }
}

/// # Safety
/// Same as [`add_big_int`].
#[no_mangle]
pub unsafe extern "C" fn rem_big_int(
    left: *const BigIntRecord,
    right: *const BigIntRecord,
    out: *mut BigIntRecord,
) {
    div_rem_big_int(left, right, std::ptr::null_mut(), out);
}

/// Low 64 bits as a signed value; invalid reads as zero
///
/// # Safety
/// `val` must be null or a valid record.
#[no_mangle]
pub unsafe extern "C" fn big_int_ll(val: *const BigIntRecord) -> c_longlong {
    read_big_int(val, "big_int_ll").as_i64()
}
