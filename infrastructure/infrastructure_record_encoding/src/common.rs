//! Common Record Utilities
//!
//! Byte buffer records and the helpers every other record builds on:
//! allocating C-heap copies, releasing them, and reading borrowed buffers
//! back into [`ByteArray`] values.
//!
//! ## Ownership
//!
//! A record with `len == 0` owns nothing and its pointer is null. Any other
//! record owns a `libc::malloc` buffer of exactly `len` bytes, which the
//! foreign side may release with `free` or through the release helpers here.

use std::alloc::{handle_alloc_error, Layout};

use entities_numerics::ByteArray;

/// Decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Non-zero length with a null buffer
    NullBuffer,
    /// Length does not fit the address space
    LengthOverflow(u64),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::NullBuffer => write!(f, "Record has a length but no buffer"),
            DecodeError::LengthOverflow(len) => {
                write!(f, "Record length {} does not fit in memory", len)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Length-prefixed byte buffer, least significant byte first
#[repr(C)]
#[derive(Debug)]
pub struct ByteArrayRecord {
    pub len: u64,
    pub bytes: *mut u8,
}

impl ByteArrayRecord {
    /// A record owning no buffer
    pub const fn empty() -> Self {
        Self {
            len: 0,
            bytes: std::ptr::null_mut(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for ByteArrayRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// Copy `bytes` into a fresh `malloc` buffer
pub(crate) fn alloc_copy(bytes: &[u8]) -> *mut u8 {
    if bytes.is_empty() {
        return std::ptr::null_mut();
    }
    // SAFETY: a non-zero size is requested and the result is checked below.
    let ptr = unsafe { libc::malloc(bytes.len()) } as *mut u8;
    if ptr.is_null() {
        log::error!("Failed to allocate {} byte record buffer", bytes.len());
        handle_alloc_error(Layout::for_value(bytes));
    }
    // SAFETY: `ptr` holds `bytes.len()` writable bytes and cannot overlap a
    // buffer that was just allocated.
    unsafe { std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr, bytes.len()) };
    ptr
}

/// Copy a byte array into a freshly allocated record
pub fn encode_byte_array(value: &ByteArray) -> ByteArrayRecord {
    ByteArrayRecord {
        len: value.len() as u64,
        bytes: alloc_copy(value.as_bytes()),
    }
}

/// Copy a borrowed record into a byte array
///
/// A zero-length record decodes to the empty array whatever its pointer.
///
/// # Safety
///
/// When `len` is non-zero and `bytes` is non-null, `bytes` must point to at
/// least `len` readable bytes.
pub unsafe fn decode_byte_array(record: &ByteArrayRecord) -> Result<ByteArray, DecodeError> {
    if record.len == 0 {
        return Ok(ByteArray::new());
    }
    let len = usize::try_from(record.len).map_err(|_| DecodeError::LengthOverflow(record.len))?;
    if record.bytes.is_null() {
        return Err(DecodeError::NullBuffer);
    }
    let bytes = std::slice::from_raw_parts(record.bytes, len);
    Ok(ByteArray::from_bytes(bytes.to_vec()))
}

/// Free the record's buffer and reset it to empty
///
/// # Safety
///
/// `bytes` must be null or a live buffer from `libc::malloc` that nothing
/// else will free.
pub unsafe fn release_byte_array(record: &mut ByteArrayRecord) {
    if !record.bytes.is_null() {
        libc::free(record.bytes as *mut libc::c_void);
    }
    *record = ByteArrayRecord::empty();
}

/// Decode then release
///
/// # Safety
///
/// Same requirements as [`decode_byte_array`] and [`release_byte_array`].
pub unsafe fn take_byte_array(record: &mut ByteArrayRecord) -> Result<ByteArray, DecodeError> {
    let res = decode_byte_array(record);
    release_byte_array(record);
    res
}
