//! Digit algorithms shared by both big integer flavors.
//!
//! A value is handled here as its `(flags, digits)` parts so the mutable and
//! the reference-counted integer run exactly the same arithmetic. Results are
//! raw parts; the owning type canonicalizes them.

use std::cmp::Ordering;

use log::trace;

use crate::big::{INVALID, NEGATIVE};
use crate::byte_array::ByteArray;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub(crate) type Parts = (u8, ByteArray);

pub(crate) fn invalid_parts() -> Parts {
    (INVALID, ByteArray::new())
}

/// Byte-wise sum with carry
pub(crate) fn add(a: &ByteArray, b: &ByteArray) -> ByteArray {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u16;
    for i in 0..len {
        let sum = a.get(i) as u16 + b.get(i) as u16 + carry;
        out.push(sum as u8);
        carry = sum >> 8;
    }
    if carry != 0 {
        out.push(carry as u8);
    }
    ByteArray::from_bytes(out)
}

/// `larger - smaller` with borrow; `larger` must not be below `smaller`
pub(crate) fn sub(larger: &ByteArray, smaller: &ByteArray) -> ByteArray {
    let mut out = Vec::with_capacity(larger.len());
    let mut borrow = 0i16;
    for i in 0..larger.len() {
        let mut diff = larger.get(i) as i16 - smaller.get(i) as i16 - borrow;
        if diff < 0 {
            diff += 256;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }
    ByteArray::from_bytes(out)
}

/// Grade-school product
pub(crate) fn mul(a: &ByteArray, b: &ByteArray) -> ByteArray {
    if a.is_empty() || b.is_empty() {
        return ByteArray::new();
    }
    let mut acc = vec![0u64; a.len() + b.len() + 1];
    for (i, &x) in a.as_bytes().iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.as_bytes().iter().enumerate() {
            let cur = acc[i + j] + x as u64 * y as u64 + carry;
            acc[i + j] = cur & 0xff;
            carry = cur >> 8;
        }
        let mut k = i + b.len();
        while carry != 0 {
            let cur = acc[k] + carry;
            acc[k] = cur & 0xff;
            carry = cur >> 8;
            k += 1;
        }
    }
    ByteArray::from_bytes(acc.into_iter().map(|v| v as u8).collect())
}

/// Binary long division of magnitudes, returning `(remainder, quotient)`
///
/// The denominator must be non-zero.
pub(crate) fn divmod(num: &ByteArray, den: &ByteArray) -> (ByteArray, ByteArray) {
    trace!(
        "long division: {} byte numerator, {} byte denominator",
        num.len(),
        den.len()
    );
    let mut rem = ByteArray::new();
    let mut quot = ByteArray::new();
    for i in (0..num.bit_len()).rev() {
        rem <<= 1;
        if num.bit(i) {
            rem.set_bit(0);
        }
        if rem >= *den {
            rem = sub(&rem, den);
            quot.set_bit(i);
        }
    }
    (rem, quot)
}

/// Divide a magnitude by a single byte, returning `(remainder, quotient)`
fn div_small(num: &ByteArray, divisor: u8) -> (u8, ByteArray) {
    let mut quot = vec![0u8; num.len()];
    let mut rem = 0u16;
    for i in (0..num.len()).rev() {
        let cur = (rem << 8) | num.get(i) as u16;
        quot[i] = (cur / divisor as u16) as u8;
        rem = cur % divisor as u16;
    }
    (rem as u8, ByteArray::from_bytes(quot))
}

/// Convert digit values in `base` (most significant first) to bytes by
/// repeatedly dividing the digit sequence by 256.
pub(crate) fn compress(mut digits: Vec<u8>, base: u32) -> ByteArray {
    trace!("compressing {} base {} digits", digits.len(), base);
    let mut out = Vec::new();
    while !digits.is_empty() {
        let mut next = Vec::with_capacity(digits.len());
        let mut carry = 0u32;
        for &d in &digits {
            let cur = carry * base + d as u32;
            let q = cur / 256;
            carry = cur % 256;
            if !(next.is_empty() && q == 0) {
                next.push(q as u8);
            }
        }
        out.push(carry as u8);
        digits = next;
    }
    ByteArray::from_bytes(out)
}

/// Parse an optionally signed digit string, stopping at the first character
/// that is not a digit of `base`. `base` must already be validated.
pub(crate) fn parse(text: &str, base: u32) -> Parts {
    let mut rest = text;
    let mut flags = 0;
    if let Some(stripped) = rest.strip_prefix('-') {
        flags = NEGATIVE;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }
    if base == 16 {
        if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = stripped;
        }
    }
    let digits: Vec<u8> = rest
        .chars()
        .map_while(|c| c.to_digit(base))
        .map(|d| d as u8)
        .skip_while(|&d| d == 0)
        .collect();
    (flags, compress(digits, base))
}

pub(crate) fn format(flags: u8, digits: &ByteArray, base: u32) -> String {
    if flags & INVALID != 0 {
        return "NaN".to_string();
    }
    let negative = flags & NEGATIVE != 0 && !digits.is_empty();
    let body = if base == 16 {
        format_hex(digits)
    } else {
        format_radix(digits, base)
    };
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

fn format_hex(digits: &ByteArray) -> String {
    let mut out = String::from("0x");
    if digits.is_empty() {
        out.push('0');
        return out;
    }
    for (i, &byte) in digits.as_bytes().iter().rev().enumerate() {
        let high = byte >> 4;
        if !(i == 0 && high == 0) {
            out.push(DIGITS[high as usize] as char);
        }
        out.push(DIGITS[(byte & 0xf) as usize] as char);
    }
    out
}

fn format_radix(digits: &ByteArray, base: u32) -> String {
    if digits.is_empty() {
        return "0".to_string();
    }
    let mut rev = Vec::new();
    let mut cur = digits.clone();
    while !cur.is_empty() {
        let (rem, quot) = div_small(&cur, base as u8);
        rev.push(DIGITS[rem as usize]);
        cur = quot;
    }
    rev.iter().rev().map(|&b| b as char).collect()
}

fn is_negative(flags: u8, digits: &ByteArray) -> bool {
    flags & NEGATIVE != 0 && !digits.is_empty()
}

fn any_invalid(a_flags: u8, b_flags: u8) -> bool {
    (a_flags | b_flags) & INVALID != 0
}

pub(crate) fn add_signed(a_flags: u8, a: &ByteArray, b_flags: u8, b: &ByteArray) -> Parts {
    if any_invalid(a_flags, b_flags) {
        return invalid_parts();
    }
    let a_sign = a_flags & NEGATIVE;
    let b_sign = b_flags & NEGATIVE;
    if a_sign == b_sign {
        return (a_sign, add(a, b));
    }
    if a.compare(b) == Ordering::Less {
        (b_sign, sub(b, a))
    } else {
        (a_sign, sub(a, b))
    }
}

pub(crate) fn sub_signed(a_flags: u8, a: &ByteArray, b_flags: u8, b: &ByteArray) -> Parts {
    add_signed(a_flags, a, b_flags ^ NEGATIVE, b)
}

pub(crate) fn mul_signed(a_flags: u8, a: &ByteArray, b_flags: u8, b: &ByteArray) -> Parts {
    if any_invalid(a_flags, b_flags) {
        return invalid_parts();
    }
    ((a_flags ^ b_flags) & NEGATIVE, mul(a, b))
}

/// Truncating division returning `(remainder, quotient)` parts
pub(crate) fn divide_signed(
    n_flags: u8,
    n: &ByteArray,
    d_flags: u8,
    d: &ByteArray,
) -> (Parts, Parts) {
    if any_invalid(n_flags, d_flags) || d.is_empty() {
        return (invalid_parts(), invalid_parts());
    }
    let quot_sign = (n_flags ^ d_flags) & NEGATIVE;
    let rem_sign = n_flags & NEGATIVE;
    match n.compare(d) {
        Ordering::Less => return ((rem_sign, n.clone()), (0, ByteArray::new())),
        Ordering::Equal => {
            return ((0, ByteArray::new()), (quot_sign, ByteArray::from_uint(1u8)));
        }
        Ordering::Greater => {}
    }
    if d.as_bytes() == [1] {
        return ((0, ByteArray::new()), (quot_sign, n.clone()));
    }
    let (rem, quot) = divmod(n, d);
    ((rem_sign, rem), (quot_sign, quot))
}

/// Invalid first, then sign, then magnitude
pub(crate) fn compare_signed(a_flags: u8, a: &ByteArray, b_flags: u8, b: &ByteArray) -> Ordering {
    match (a_flags & INVALID != 0, b_flags & INVALID != 0) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    match (is_negative(a_flags, a), is_negative(b_flags, b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.compare(b),
        (true, true) => b.compare(a),
    }
}

/// Low 64 bits, two's-complement negated when negative
pub(crate) fn as_i64(flags: u8, digits: &ByteArray) -> i64 {
    if flags & INVALID != 0 {
        return 0;
    }
    let low = digits.as_uint::<u64>() as i64;
    if is_negative(flags, digits) {
        low.wrapping_neg()
    } else {
        low
    }
}

pub(crate) fn to_i64(flags: u8, digits: &ByteArray) -> Option<i64> {
    if flags & INVALID != 0 || digits.len() > 8 {
        return None;
    }
    let magnitude = digits.as_uint::<u64>();
    if is_negative(flags, digits) {
        if magnitude <= 1u64 << 63 {
            Some((magnitude as i64).wrapping_neg())
        } else {
            None
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}
