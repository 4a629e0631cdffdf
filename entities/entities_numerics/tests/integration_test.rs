//! Integration tests for entities_numerics crate
//!
//! End-to-end scenarios plus property tests. Arithmetic is checked against
//! malachite's `Integer` on decimal strings.

use std::str::FromStr;

use entities_numerics::*;
use proptest::prelude::*;

fn oracle(text: &str) -> malachite::Integer {
    malachite::Integer::from_str(text).unwrap()
}

#[test]
fn test_scenario_mixed_bases() {
    let a = BigInt::from(1485209);
    let b = BigInt::from(934889);

    let diff = &a - &b;
    assert_eq!(diff.to_string_base(10), "550320");
    assert_eq!(diff.to_string_base(16), "0x865b0");

    assert_eq!((&a * &BigInt::from(2)).to_string_base(16), "0x2d5332");

    let (rem, quot) = a.divide(&BigInt::from(3));
    assert_eq!(quot.to_string_base(10), "495069");
    assert_eq!(rem.to_string_base(10), "2");

    assert_eq!(BigInt::from_str_base("vtzt", 36).to_string_base(16), "0x16a999");
}

#[test]
fn test_flavors_agree() {
    let m = BigInt::from_str_base("123456789abcdef0123456789", 16);
    let i = immut::BigInt::from(m.clone());
    let m2 = &m * &m - BigInt::from(17);
    let i2 = &i * &i - immut::BigInt::from(17);
    assert_eq!(m2.to_string(), i2.to_string());
    assert_eq!(BigInt::from(i2), m2);
}

#[test]
fn test_rational_over_both_flavors() {
    let a = Rational::new(BigInt::from(2), BigInt::from(6));
    let b = immut::Rational::new(immut::BigInt::from(2), immut::BigInt::from(6));
    assert_eq!(a.to_string(), "1/3");
    assert_eq!(b.to_string(), "1/3");

    let inf = Rational::new(BigInt::from(-4), BigInt::zero());
    assert!(inf.is_neg_infinity());
    assert_eq!((&a / &Rational::default()).to_string(), "1/0");
    assert!((&inf * &Rational::default()).is_nan());
}

#[test]
fn test_rational_gcd_is_exact_for_large_values() {
    let big = BigInt::from_str("340282366920938463463374607431768211456").unwrap();
    let r = Rational::new(&big * &BigInt::from(3), &big * &BigInt::from(9));
    assert_eq!(r.to_string(), "1/3");
}

fn decimal() -> impl Strategy<Value = String> {
    "-?[1-9][0-9]{0,60}"
}

proptest! {
    #[test]
    fn prop_add_sub_mul_match_oracle(a in decimal(), b in decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        let (ox, oy) = (oracle(&a), oracle(&b));
        prop_assert_eq!((&x + &y).to_string(), (&ox + &oy).to_string());
        prop_assert_eq!((&x - &y).to_string(), (&ox - &oy).to_string());
        prop_assert_eq!((&x * &y).to_string(), (&ox * &oy).to_string());
    }

    #[test]
    fn prop_divide_matches_oracle(a in decimal(), b in decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        let (ox, oy) = (oracle(&a), oracle(&b));
        let (rem, quot) = x.divide(&y);
        prop_assert_eq!(quot.to_string(), (&ox / &oy).to_string());
        prop_assert_eq!(rem.to_string(), (&ox % &oy).to_string());
    }

    #[test]
    fn prop_division_identity(a in any::<i128>(), b in any::<i128>()) {
        prop_assume!(b != 0);
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (rem, quot) = x.divide(&y);
        prop_assert_eq!(&(&quot * &y) + &rem, x);
        prop_assert!(rem.abs() < y.abs());
    }

    #[test]
    fn prop_round_trip_every_base(a in decimal(), base in 2u32..=36) {
        let x = BigInt::from(a.as_str());
        let rendered = x.to_string_base(base);
        prop_assert_eq!(BigInt::from_str_base(&rendered, base), x);
    }

    #[test]
    fn prop_identities(a in decimal(), b in decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        prop_assert_eq!(&(&x - &y) + &y, x.clone());
        prop_assert_eq!(&x * &BigInt::one(), x.clone());
        prop_assert_eq!(&BigInt::zero() * &x, BigInt::zero());
        prop_assert_eq!(-(-x.clone()), x.clone());
        prop_assert!(BigInt::invalid() < x);
    }

    #[test]
    fn prop_invalid_absorbs(a in decimal()) {
        let x = BigInt::from(a.as_str());
        prop_assert!(!(&x / &BigInt::zero()).is_valid());
        prop_assert!(!(&x / &BigInt::invalid()).is_valid());
        prop_assert!(!(&x + &BigInt::invalid()).is_valid());
        prop_assert!(!(&BigInt::invalid() * &x).is_valid());
    }

    #[test]
    fn prop_shift_consistency(bytes in proptest::collection::vec(any::<u8>(), 0..32), n in 0usize..200) {
        let ba = ByteArray::from_bytes(bytes);
        prop_assert_eq!(&(&ba << n) >> n, ba.clone());
        prop_assert!((&ba >> ba.bit_len()).is_empty());

        let x = BigInt::from_parts(NEGATIVE, ba.clone());
        prop_assert_eq!(&(&x << n) >> n, x.clone());
        prop_assert!((&x >> (ba.bit_len() + n)).is_zero());
    }

    #[test]
    fn prop_ordering_matches_oracle(a in decimal(), b in decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        prop_assert_eq!(x.cmp(&y), oracle(&a).cmp(&oracle(&b)));
    }

    #[test]
    fn prop_rational_reduction(n in -1000i64..1000, d in 1i64..1000, k in 1i64..50) {
        let reduced = RationalBase::new(n, d);
        prop_assert_eq!(RationalBase::new(n * k, d * k), reduced.clone());
        let big = Rational::new(BigInt::from(n * k), BigInt::from(d * k));
        prop_assert_eq!(big.to_string(), reduced.to_string());
    }

    #[test]
    fn prop_rational_division_by_zero(n in -1000i64..1000) {
        let r = RationalBase::new(n, 1) / RationalBase::new(0, 1);
        match n.signum() {
            1 => prop_assert!(r.is_pos_infinity()),
            -1 => prop_assert!(r.is_neg_infinity()),
            _ => prop_assert!(r.is_nan()),
        }
    }
}
