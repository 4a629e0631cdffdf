//! Byte Array
//!
//! Growable little-endian byte container used as the magnitude storage of
//! big integers. Index 0 holds the least significant byte.
//!
//! Every operation leaves the container *trimmed*: no high-order zero bytes
//! remain, so the empty container is the only representation of zero and two
//! containers holding the same value are byte-for-byte identical.

use std::cmp::Ordering;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Shl, ShlAssign, Shr,
    ShrAssign,
};

/// Fixed-width unsigned integers that a [`ByteArray`] can be read as or
/// built from.
///
/// Values are exchanged in native form; the byte order inside the container
/// is always little-endian regardless of the host.
pub trait Word: Copy {
    /// Width in bytes
    const BYTES: usize;

    /// Build a value from up to `BYTES` little-endian bytes, zero-extending
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Little-endian bytes of the value
    fn to_le_vec(self) -> Vec<u8>;
}

macro_rules! impl_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const BYTES: usize = std::mem::size_of::<$t>();

            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                <$t>::from_le_bytes(buf)
            }

            fn to_le_vec(self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64, u128, usize);

/// Trimmed little-endian byte sequence with bit-level operators
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteArray {
    bytes: Vec<u8>,
}

impl ByteArray {
    /// Create an empty (zero) byte array
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Wrap raw little-endian bytes, dropping high-order zeros
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let mut res = Self { bytes };
        res.simplify();
        res
    }

    /// Build from a fixed-width unsigned value
    ///
    /// ```rust
    /// use entities_numerics::ByteArray;
    ///
    /// let ba = ByteArray::from_uint(0x4f3f2f1fu64);
    /// assert_eq!(ba.as_bytes(), &[0x1f, 0x2f, 0x3f, 0x4f]);
    /// ```
    pub fn from_uint<W: Word>(value: W) -> Self {
        Self::from_bytes(value.to_le_vec())
    }

    /// Reinterpret the low `W::BYTES` bytes as a fixed-width unsigned value
    ///
    /// Bytes above the width are ignored, so this truncates like a native
    /// narrowing cast.
    pub fn as_uint<W: Word>(&self) -> W {
        W::from_le_slice(&self.bytes)
    }

    /// Number of stored bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the array represents zero
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Stored bytes, least significant first
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the array, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Byte at `index`, or zero past the stored length
    pub fn get(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(0)
    }

    /// Number of significant bits
    pub fn bit_len(&self) -> usize {
        match self.bytes.last() {
            Some(&top) => (self.bytes.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Bit at position `index` (0 = least significant)
    pub fn bit(&self, index: usize) -> bool {
        (self.get(index / 8) >> (index % 8)) & 1 == 1
    }

    /// Set the bit at `index`, growing the array if needed
    pub fn set_bit(&mut self, index: usize) {
        let byte = index / 8;
        if byte >= self.bytes.len() {
            self.bytes.resize(byte + 1, 0);
        }
        self.bytes[byte] |= 1 << (index % 8);
    }

    /// Compare magnitudes: longer is larger, then most significant byte down
    pub fn compare(&self, other: &Self) -> Ordering {
        self.bytes.len().cmp(&other.bytes.len()).then_with(|| {
            self.bytes
                .iter()
                .rev()
                .cmp(other.bytes.iter().rev())
        })
    }

    fn simplify(&mut self) {
        while let Some(&0) = self.bytes.last() {
            self.bytes.pop();
        }
    }

    fn and_bytes(&mut self, other: &[u8]) {
        self.bytes.truncate(other.len());
        for (byte, &o) in self.bytes.iter_mut().zip(other) {
            *byte &= o;
        }
        self.simplify();
    }

    fn or_bytes(&mut self, other: &[u8]) {
        if self.bytes.len() < other.len() {
            self.bytes.resize(other.len(), 0);
        }
        for (byte, &o) in self.bytes.iter_mut().zip(other) {
            *byte |= o;
        }
        self.simplify();
    }

    fn xor_bytes(&mut self, other: &[u8]) {
        if self.bytes.len() < other.len() {
            self.bytes.resize(other.len(), 0);
        }
        for (byte, &o) in self.bytes.iter_mut().zip(other) {
            *byte ^= o;
        }
        self.simplify();
    }

    fn shift_left(&mut self, amount: usize) {
        if self.bytes.is_empty() {
            return;
        }
        let whole_bytes = amount / 8;
        let inner = (amount % 8) as u32;

        if whole_bytes > 0 {
            self.bytes
                .splice(0..0, std::iter::repeat(0u8).take(whole_bytes));
        }

        if inner > 0 {
            let mut carry = 0u8;
            for byte in self.bytes.iter_mut() {
                let next_carry = *byte >> (8 - inner);
                *byte = (*byte << inner) | carry;
                carry = next_carry;
            }
            if carry != 0 {
                self.bytes.push(carry);
            }
        }
    }

    fn shift_right(&mut self, amount: usize) {
        let whole_bytes = amount / 8;
        let inner = (amount % 8) as u32;

        if inner > 0 {
            let mut carry = 0u8;
            for byte in self.bytes.iter_mut().rev() {
                let next_carry = *byte << (8 - inner);
                *byte = (*byte >> inner) | carry;
                carry = next_carry;
            }
        }

        if whole_bytes >= self.bytes.len() {
            self.bytes.clear();
        } else if whole_bytes > 0 {
            self.bytes.drain(..whole_bytes);
        }
        self.simplify();
    }
}

impl Ord for ByteArray {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for ByteArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Index<usize> for ByteArray {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

macro_rules! impl_bitwise {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $helper:ident) => {
        impl $assign_imp<&ByteArray> for ByteArray {
            fn $assign_method(&mut self, rhs: &ByteArray) {
                self.$helper(&rhs.bytes);
            }
        }

        impl $assign_imp<ByteArray> for ByteArray {
            fn $assign_method(&mut self, rhs: ByteArray) {
                self.$helper(&rhs.bytes);
            }
        }

        impl $imp<&ByteArray> for &ByteArray {
            type Output = ByteArray;

            fn $method(self, rhs: &ByteArray) -> ByteArray {
                let mut res = self.clone();
                res.$helper(&rhs.bytes);
                res
            }
        }

        impl $imp<&ByteArray> for ByteArray {
            type Output = ByteArray;

            fn $method(mut self, rhs: &ByteArray) -> ByteArray {
                self.$helper(&rhs.bytes);
                self
            }
        }

        impl $imp<ByteArray> for ByteArray {
            type Output = ByteArray;

            fn $method(mut self, rhs: ByteArray) -> ByteArray {
                self.$helper(&rhs.bytes);
                self
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, and_bytes);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, or_bytes);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor_bytes);

impl ShlAssign<usize> for ByteArray {
    fn shl_assign(&mut self, amount: usize) {
        self.shift_left(amount);
    }
}

impl ShrAssign<usize> for ByteArray {
    fn shr_assign(&mut self, amount: usize) {
        self.shift_right(amount);
    }
}

impl Shl<usize> for ByteArray {
    type Output = ByteArray;

    fn shl(mut self, amount: usize) -> ByteArray {
        self.shift_left(amount);
        self
    }
}

impl Shl<usize> for &ByteArray {
    type Output = ByteArray;

    fn shl(self, amount: usize) -> ByteArray {
        self.clone() << amount
    }
}

impl Shr<usize> for ByteArray {
    type Output = ByteArray;

    fn shr(mut self, amount: usize) -> ByteArray {
        self.shift_right(amount);
        self
    }
}

impl Shr<usize> for &ByteArray {
    type Output = ByteArray;

    fn shr(self, amount: usize) -> ByteArray {
        self.clone() >> amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_from_vec() {
        let ba = ByteArray::from_bytes(vec![0x1f, 0x2f, 0x3f, 0x4f]);
        assert_eq!(ba.as_uint::<u64>(), 0x4f3f2f1f);
    }

    #[test]
    fn test_initialize_from_u64() {
        let ba = ByteArray::from_uint(0x4f3f2f1fu64);
        assert_eq!(ba.len(), 4);
        assert_eq!(ba.as_uint::<u64>(), 0x4f3f2f1f);
    }

    #[test]
    fn test_from_bytes_trims_high_zeros() {
        let ba = ByteArray::from_bytes(vec![1, 2, 0, 0]);
        assert_eq!(ba.as_bytes(), &[1, 2]);
        assert!(ByteArray::from_bytes(vec![0, 0]).is_empty());
    }

    #[test]
    fn test_as_uint_truncates() {
        let ba = ByteArray::from_uint(0x1122334455u64);
        assert_eq!(ba.as_uint::<u16>(), 0x4455);
        assert_eq!(ba.as_uint::<u8>(), 0x55);
    }

    #[test]
    fn test_and() {
        let mut ba = ByteArray::from_uint(0xffffff0fu64);
        ba &= ByteArray::from_uint(0x1f003fu64);
        assert_eq!(ba.as_uint::<u64>(), 0x001f000f);
    }

    #[test]
    fn test_and_is_no_longer_than_shorter() {
        let ba = &ByteArray::from_uint(0xff00_0000_00ffu64) & &ByteArray::from_uint(0xffu64);
        assert_eq!(ba.as_bytes(), &[0xff]);
        let ba = &ByteArray::from_uint(0xff00u64) & &ByteArray::from_uint(0x00ffu64);
        assert!(ba.is_empty());
    }

    #[test]
    fn test_or() {
        let mut ba = ByteArray::from_uint(0x30u64);
        ba |= ByteArray::from_uint(0x001f003fu64);
        assert_eq!(ba.as_uint::<u64>(), 0x001f003f);
    }

    #[test]
    fn test_xor() {
        let mut ba = ByteArray::from_uint(0x30u64);
        ba ^= ByteArray::from_uint(0x001f003fu64);
        assert_eq!(ba.as_uint::<u64>(), 0x001f000f);
    }

    #[test]
    fn test_xor_with_self_is_empty() {
        let ba = ByteArray::from_uint(0xdeadbeefu64);
        assert!((&ba ^ &ba).is_empty());
    }

    #[test]
    fn test_shift_left() {
        let cases: &[(u64, usize)] = &[
            (0x01020304, 16),
            (0x01020304, 4),
            (0x00ffff, 15),
            (0xae8472818, 15),
            (0x10203040, 4),
            (0xae8472818, 3),
        ];
        for &(value, amount) in cases {
            let ba = ByteArray::from_uint(value) << amount;
            assert_eq!(ba.as_uint::<u64>(), value << amount, "{:#x} << {}", value, amount);
        }
    }

    #[test]
    fn test_shift_right() {
        let cases: &[(u64, usize)] = &[
            (0x01020304, 16),
            (0x01020304, 4),
            (0x00ffff, 15),
            (0xae8472818, 15),
            (0x10203040, 4),
            (0xae8472818, 3),
        ];
        for &(value, amount) in cases {
            let ba = ByteArray::from_uint(value) >> amount;
            assert_eq!(ba.as_uint::<u64>(), value >> amount, "{:#x} >> {}", value, amount);
        }
    }

    #[test]
    fn test_shift_right_past_bit_length_is_empty() {
        let ba = ByteArray::from_uint(0x1ffu64);
        assert!((&ba >> 9).is_empty());
        assert!((&ba >> 64).is_empty());
        assert_eq!((&ba >> 8).as_bytes(), &[1]);
    }

    #[test]
    fn test_shift_left_of_zero_stays_empty() {
        assert!((ByteArray::new() << 17).is_empty());
    }

    #[test]
    fn test_compare() {
        let small = ByteArray::from_uint(0x01ffu64);
        let big = ByteArray::from_uint(0x0200u64);
        let longer = ByteArray::from_uint(0x010000u64);
        assert_eq!(small.compare(&big), Ordering::Less);
        assert_eq!(big.compare(&small), Ordering::Greater);
        assert_eq!(big.compare(&longer), Ordering::Less);
        assert_eq!(big.compare(&big.clone()), Ordering::Equal);
        assert!(ByteArray::new() < small);
    }

    #[test]
    fn test_get_zero_extends() {
        let ba = ByteArray::from_uint(0xabcdu64);
        assert_eq!(ba.get(0), 0xcd);
        assert_eq!(ba.get(1), 0xab);
        assert_eq!(ba.get(7), 0);
    }

    #[test]
    #[should_panic]
    fn test_index_requires_bounds() {
        let ba = ByteArray::from_uint(0xabu64);
        let _ = ba[1];
    }

    #[test]
    fn test_bits() {
        let mut ba = ByteArray::new();
        assert_eq!(ba.bit_len(), 0);
        ba.set_bit(9);
        assert_eq!(ba.as_uint::<u64>(), 0x200);
        assert_eq!(ba.bit_len(), 10);
        assert!(ba.bit(9));
        assert!(!ba.bit(8));
        assert!(!ba.bit(100));
    }
}
