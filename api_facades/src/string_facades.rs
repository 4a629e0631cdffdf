//! String Facades
//!
//! Render big integers and rationals as text, either into a caller buffer
//! (truncated, always NUL-terminated) or into a `malloc`ed string released
//! with `free_big_int_str` or the C `free`.

use std::ffi::{c_char, c_int, c_ulong};

use log::debug;

use infrastructure_record_encoding::{
    encode_c_string, release_c_string, write_truncated, BigIntRecord, RationalRecord,
};

use crate::common_facades::{read_big_int, read_rational};

unsafe fn store_c_string(text: &str, out: *mut *mut c_char) {
    *out = encode_c_string(text);
}

fn radix_of(radix: c_int) -> Option<u32> {
    u32::try_from(radix).ok()
}

/// Decimal text in a new heap string
///
/// # Safety
/// `val` must be null or a valid record; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn big_int_str_alloc(val: *const BigIntRecord, out: *mut *mut c_char) {
    if out.is_null() {
        debug!("big_int_str_alloc: no output pointer");
        return;
    }
    store_c_string(&read_big_int(val, "big_int_str_alloc").to_string(), out);
}

/// Decimal text copied into `buffer`, truncated to `buffer_size - 1` bytes
///
/// # Safety
/// `val` must be null or a valid record; `buffer` must be null or point to
/// `buffer_size` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn big_int_str(
    val: *const BigIntRecord,
    buffer: *mut c_char,
    buffer_size: c_ulong,
) {
    if buffer.is_null() || buffer_size == 0 {
        debug!("big_int_str: no output buffer");
        return;
    }
    let text = read_big_int(val, "big_int_str").to_string();
    let size = usize::try_from(buffer_size).unwrap_or(usize::MAX);
    write_truncated(&text, buffer, size);
}

/// Text in `radix` in a new heap string; false for an unusable radix
///
/// # Safety
/// Same as [`big_int_str_alloc`].
#[no_mangle]
pub unsafe extern "C" fn big_int_str_alloc_rdx(
    val: *const BigIntRecord,
    out: *mut *mut c_char,
    radix: c_int,
) -> bool {
    if out.is_null() {
        debug!("big_int_str_alloc_rdx: no output pointer");
        return false;
    }
    let value = read_big_int(val, "big_int_str_alloc_rdx");
    match radix_of(radix).and_then(|radix| value.checked_to_string_base(radix)) {
        Some(text) => {
            store_c_string(&text, out);
            true
        }
        None => false,
    }
}

/// Text in `radix` copied into `buffer`; false for an unusable radix or a
/// missing buffer
///
/// # Safety
/// Same as [`big_int_str`].
#[no_mangle]
pub unsafe extern "C" fn big_int_str_rdx(
    val: *const BigIntRecord,
    buffer: *mut c_char,
    buffer_size: c_ulong,
    radix: c_int,
) -> bool {
    if buffer.is_null() || buffer_size == 0 {
        debug!("big_int_str_rdx: no output buffer");
        return false;
    }
    let value = read_big_int(val, "big_int_str_rdx");
    match radix_of(radix).and_then(|radix| value.checked_to_string_base(radix)) {
        Some(text) => {
            let size = usize::try_from(buffer_size).unwrap_or(usize::MAX);
            write_truncated(&text, buffer, size);
            true
        }
        None => false,
    }
}

/// `numerator/denominator` text in a new heap string
///
/// # Safety
/// `val` must be null or a valid record; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn rational_str_alloc(val: *const RationalRecord, out: *mut *mut c_char) {
    if out.is_null() {
        debug!("rational_str_alloc: no output pointer");
        return;
    }
    store_c_string(&read_rational(val, "rational_str_alloc").to_string(), out);
}

/// Release a string from one of the `*_str_alloc*` functions
///
/// # Safety
/// `str` must be null or an unreleased string from this library.
#[no_mangle]
pub unsafe extern "C" fn free_big_int_str(str: *mut c_char) {
    release_c_string(str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big_int_facades::set_big_int_to_int;
    use infrastructure_record_encoding::decode_c_str;

    fn record_of(value: c_int) -> BigIntRecord {
        let mut record = BigIntRecord::default();
        unsafe { set_big_int_to_int(value, &mut record) };
        record
    }

    #[test]
    fn test_str_into_buffer() {
        let record = record_of(-7);
        let mut buffer = [0 as c_char; 128];
        unsafe {
            big_int_str(&record, buffer.as_mut_ptr(), 128);
            assert_eq!(decode_c_str(buffer.as_ptr()), "-7");
        }
    }

    #[test]
    fn test_str_truncates() {
        let record = record_of(123456);
        let mut buffer = [0x55 as c_char; 4];
        unsafe {
            big_int_str(&record, buffer.as_mut_ptr(), 4);
            assert_eq!(decode_c_str(buffer.as_ptr()), "123");
        }
    }

    #[test]
    fn test_str_alloc() {
        let record = record_of(800);
        let mut out: *mut c_char = std::ptr::null_mut();
        unsafe {
            big_int_str_alloc(&record, &mut out);
            assert_eq!(decode_c_str(out), "800");
            free_big_int_str(out);
        }
    }

    #[test]
    fn test_rdx() {
        let record = record_of(1485209);
        let mut out: *mut c_char = std::ptr::null_mut();
        let mut buffer = [0 as c_char; 32];
        unsafe {
            assert!(big_int_str_alloc_rdx(&record, &mut out, 36));
            assert_eq!(decode_c_str(out), "vtzt");
            free_big_int_str(out);

            assert!(big_int_str_rdx(&record, buffer.as_mut_ptr(), 32, 16));
            assert_eq!(decode_c_str(buffer.as_ptr()), "0x16a999");

            assert!(!big_int_str_rdx(&record, buffer.as_mut_ptr(), 32, 1));
            assert!(!big_int_str_alloc_rdx(&record, &mut out, -3));
            assert!(!big_int_str_rdx(&record, std::ptr::null_mut(), 32, 10));
        }
    }

    #[test]
    fn test_buffer_size_is_c_unsigned_long() {
        let _: unsafe extern "C" fn(*const BigIntRecord, *mut c_char, c_ulong) = big_int_str;
        let _: unsafe extern "C" fn(*const BigIntRecord, *mut c_char, c_ulong, c_int) -> bool =
            big_int_str_rdx;
    }

    #[test]
    fn test_null_outputs() {
        let record = record_of(5);
        unsafe {
            big_int_str_alloc(&record, std::ptr::null_mut());
            big_int_str(&record, std::ptr::null_mut(), 10);
            free_big_int_str(std::ptr::null_mut());
        }
    }
}
