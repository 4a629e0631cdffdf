//! C string helpers
//!
//! Rendered numbers leave the library either as a `malloc`ed NUL-terminated
//! string or copied into a caller buffer with truncation.

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::common::alloc_copy;

/// Copy `text` into a fresh `malloc`ed NUL-terminated string
pub fn encode_c_string(text: &str) -> *mut c_char {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(0);
    alloc_copy(&bytes) as *mut c_char
}

/// Copy as much of `text` as fits, always NUL-terminating
///
/// Returns the number of bytes written including the terminator.
///
/// # Safety
///
/// `buffer` must point to `size` writable bytes and `size` must be non-zero.
pub unsafe fn write_truncated(text: &str, buffer: *mut c_char, size: usize) -> usize {
    let written = (text.len() + 1).min(size);
    let copied = written - 1;
    std::ptr::copy_nonoverlapping(text.as_ptr(), buffer as *mut u8, copied);
    *buffer.add(copied) = 0;
    written
}

/// Read a NUL-terminated string, replacing invalid UTF-8
///
/// # Safety
///
/// `ptr` must be non-null and point to a NUL-terminated string.
pub unsafe fn decode_c_str(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Read exactly `len` bytes as text, replacing invalid UTF-8
///
/// # Safety
///
/// `ptr` must point to `len` readable bytes.
pub unsafe fn decode_str_with_len(ptr: *const c_char, len: usize) -> String {
    let bytes = std::slice::from_raw_parts(ptr as *const u8, len);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Free a string from [`encode_c_string`]
///
/// # Safety
///
/// `ptr` must be null or come from [`encode_c_string`] and not be freed yet.
pub unsafe fn release_c_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        libc::free(ptr as *mut libc::c_void);
    }
}
