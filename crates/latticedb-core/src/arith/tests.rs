use super::{div::long_divide, *};
use num_bigint::BigUint;
use proptest::prelude::*;

fn big(limbs: &[Limb]) -> BigUnsigned {
    BigUnsigned::from_limbs(limbs.to_vec())
}

fn oracle(value: &BigUnsigned) -> BigUint {
    let mut le = value.limbs().to_vec();
    le.reverse();
    BigUint::new(le)
}

fn from_oracle(value: &BigUint) -> BigUnsigned {
    let mut limbs = value.to_u32_digits();
    limbs.reverse();
    BigUnsigned::from_limbs(limbs)
}

fn limbs_strategy() -> impl Strategy<Value = Vec<Limb>> {
    prop::collection::vec(any::<Limb>(), 0..6)
}

// Multi-limb divisors with a tiny leading limb; the leading-limb estimate
// overshoots for these and the quotient has to be refined.
fn small_lead_divisor_strategy() -> impl Strategy<Value = Vec<Limb>> {
    (1..4u32, prop::collection::vec(any::<Limb>(), 1..3)).prop_map(|(lead, mut tail)| {
        tail.insert(0, lead);
        tail
    })
}

#[test]
fn zero_is_the_empty_limb_sequence() {
    assert!(BigUnsigned::ZERO.is_zero());
    assert_eq!(big(&[0, 0, 0]), BigUnsigned::ZERO);
    assert_eq!(BigUnsigned::from(0u64).limb_count(), 0);
}

#[test]
fn from_limbs_strips_leading_zeros() {
    let value = big(&[0, 0, 7, 0]);

    assert_eq!(value.limbs(), &[7, 0]);
}

#[test]
fn ordering_compares_length_then_limbs() {
    assert!(big(&[1, 0]) > big(&[u32::MAX]));
    assert!(big(&[2, 0]) > big(&[1, u32::MAX]));
    assert_eq!(big(&[0, 5]).cmp(&big(&[5])), Ordering::Equal);
}

#[test]
fn addition_carries_into_new_limb() {
    let sum = &big(&[u32::MAX, u32::MAX]) + &BigUnsigned::one();

    assert_eq!(sum.limbs(), &[1, 0, 0]);
}

#[test]
fn subtraction_returns_magnitude_either_way() {
    let a = big(&[1, 0]);
    let b = big(&[1]);

    assert_eq!((&a - &b).limbs(), &[u32::MAX]);
    assert_eq!((&b - &a).limbs(), &[u32::MAX]);
    assert!((&a - &a).is_zero());
}

#[test]
fn multiplication_crosses_limb_boundaries() {
    let a = big(&[u32::MAX]);
    let product = &a * &a;

    // (2^32 - 1)^2 = 2^64 - 2^33 + 1
    assert_eq!(product.limbs(), &[u32::MAX - 1, 1]);
    assert!((&a * &BigUnsigned::ZERO).is_zero());
}

#[test]
fn division_rejects_zero_and_larger_divisor() {
    let ten = BigUnsigned::from(10u64);

    assert_eq!(
        ten.checked_div(&BigUnsigned::ZERO),
        Err(ArithError::DivisionByZero)
    );
    assert!(matches!(
        BigUnsigned::from(3u64).checked_div(&ten),
        Err(ArithError::DivisorExceedsDividend { .. })
    ));
}

#[test]
fn division_by_single_limb_is_exact() {
    let q = BigUnsigned::from(10u64)
        .checked_div(&BigUnsigned::from(3u64))
        .unwrap();

    assert_eq!(q, BigUnsigned::from(3u64));
}

#[test]
fn division_refines_overshooting_estimate() {
    // the leading-limb estimate of 2^64 / (2^33 - 1) is 2^32, far too high
    let n = big(&[1, 0, 0]);
    let d = big(&[1, u32::MAX]);

    let q = n.checked_div(&d).unwrap();

    assert_eq!(oracle(&q), oracle(&n) / oracle(&d));
}

#[test]
fn long_division_matches_refined_division() {
    let n = big(&[7, 0x1234_5678, 0, 9, u32::MAX]);
    let d = big(&[3, 0xFFFF_0000, 42]);

    assert_eq!(long_divide(&n, &d), n.checked_div(&d).unwrap());
    assert_eq!(oracle(&long_divide(&n, &d)), oracle(&n) / oracle(&d));
}

#[test]
fn div_rem_limb_returns_remainder() {
    let (q, r) = BigUnsigned::from(1_000_003u64).div_rem_limb(10).unwrap();

    assert_eq!(q, BigUnsigned::from(100_000u64));
    assert_eq!(r, 3);
    assert_eq!(
        BigUnsigned::one().div_rem_limb(0),
        Err(ArithError::DivisionByZero)
    );
}

#[test]
fn pow_handles_zero_exponent_and_limb_growth() {
    let two = BigUnsigned::from(2u64);

    assert_eq!(BigUnsigned::ZERO.pow(&BigUnsigned::ZERO), BigUnsigned::one());
    assert_eq!(two.pow(&BigUnsigned::from(64u64)).limbs(), &[1, 0, 0]);
    assert_eq!(
        BigUnsigned::from(10u64).pow(&BigUnsigned::from(8u64)),
        BigUnsigned::from(100_000_000u64)
    );
}

#[test]
fn decimal_conversion_crosses_the_base() {
    let value: BigUnsigned = "4294967296".parse().unwrap();

    assert_eq!(value.limbs(), &[1, 0]);
    assert_eq!(value.to_string(), "4294967296");
    assert_eq!(BigUnsigned::ZERO.to_decimal_digits(), vec![0]);
    assert_eq!(BigUnsigned::ZERO.to_string(), "0");
}

#[test]
fn decimal_parsing_ignores_leading_zeros_and_rejects_garbage() {
    assert_eq!(
        BigUnsigned::from_decimal_digits(&[0, 0, 4, 2]).unwrap(),
        BigUnsigned::from(42u64)
    );
    assert_eq!(
        "12a".parse::<BigUnsigned>(),
        Err(ArithError::InvalidDigit {
            position: 2,
            found: 'a'
        })
    );
    assert_eq!(
        BigUnsigned::from_decimal_digits(&[1, 10]),
        Err(ArithError::DigitOutOfRange {
            position: 1,
            value: 10
        })
    );
    assert_eq!(
        BigUnsigned::from_decimal_digits(&[]),
        Err(ArithError::EmptyInput)
    );
}

#[test]
fn to_f64_limits_limb_count() {
    assert_eq!(DOUBLE_CONVERSION_LIMBS, 30);

    let at_limit = big(&[1; 30]);
    let past_limit = big(&[1; 31]);

    assert!(at_limit.to_f64().unwrap().is_finite());
    assert_eq!(
        past_limit.to_f64(),
        Err(ArithError::PrecisionLoss { limbs: 31, max: 30 })
    );
    assert!((BigUnsigned::from(1u64 << 40).to_f64().unwrap() - 1_099_511_627_776.0).abs() < 1.0);
}

#[test]
fn wide_limbs_must_fit_a_limb() {
    assert_eq!(
        BigUnsigned::try_from_wide_limbs(&[0, 5, 7]).unwrap().limbs(),
        &[5, 7]
    );
    assert_eq!(
        BigUnsigned::try_from_wide_limbs(&[1, BASE]),
        Err(ArithError::LimbOutOfRange {
            position: 1,
            value: BASE
        })
    );
}

proptest! {
    #[test]
    fn addition_matches_oracle(a in limbs_strategy(), b in limbs_strategy()) {
        let (a, b) = (big(&a), big(&b));

        prop_assert_eq!(oracle(&(&a + &b)), oracle(&a) + oracle(&b));
    }

    #[test]
    fn subtraction_matches_oracle_magnitude(a in limbs_strategy(), b in limbs_strategy()) {
        let (a, b) = (big(&a), big(&b));
        let (hi, lo) = if a >= b { (&a, &b) } else { (&b, &a) };

        prop_assert_eq!(oracle(&(&a - &b)), oracle(hi) - oracle(lo));
    }

    #[test]
    fn multiplication_matches_oracle(a in limbs_strategy(), b in limbs_strategy()) {
        let (a, b) = (big(&a), big(&b));

        prop_assert_eq!(oracle(&(&a * &b)), oracle(&a) * oracle(&b));
    }

    #[test]
    fn division_matches_oracle(n in limbs_strategy(), d in limbs_strategy()) {
        let (n, d) = (big(&n), big(&d));
        prop_assume!(!d.is_zero() && n >= d);

        let q = n.checked_div(&d).unwrap();

        prop_assert_eq!(oracle(&q), oracle(&n) / oracle(&d));
    }

    #[test]
    fn division_by_small_leading_limb_matches_oracle(
        n in prop::collection::vec(any::<Limb>(), 3..7),
        d in small_lead_divisor_strategy(),
    ) {
        let (n, d) = (big(&n), big(&d));
        prop_assume!(n >= d);

        let q = n.checked_div(&d).unwrap();

        prop_assert_eq!(oracle(&q), oracle(&n) / oracle(&d));
        prop_assert_eq!(long_divide(&n, &d), q);
    }

    #[test]
    fn pow_matches_oracle(base in limbs_strategy(), exponent in 0..12u32) {
        let base = big(&base);
        let result = base.pow(&BigUnsigned::from(exponent));

        prop_assert_eq!(oracle(&result), oracle(&base).pow(exponent));
        prop_assert_eq!(result.to_string(), oracle(&base).pow(exponent).to_string());
    }

    #[test]
    fn decimal_rendering_matches_oracle(a in limbs_strategy()) {
        let a = big(&a);
        let rendered = a.to_string();

        prop_assert_eq!(&rendered, &oracle(&a).to_string());
        prop_assert_eq!(rendered.parse::<BigUnsigned>().unwrap(), a);
    }

    #[test]
    fn operations_stay_canonical(a in limbs_strategy(), b in limbs_strategy()) {
        let (a, b) = (big(&a), big(&b));

        for value in [&a + &b, &a - &b, &a * &b] {
            prop_assert!(value.limbs().first().is_none_or(|&limb| limb != 0));
            prop_assert_eq!(from_oracle(&oracle(&value)), value);
        }
    }
}

#[test]
fn small_division_matches_repeated_subtraction() {
    let (a, b) = (BigUnsigned::from(100u64), BigUnsigned::from(7u64));
    let q = a.checked_div(&b).unwrap();
    let r = &a - &(&q * &b);

    assert_eq!(q, BigUnsigned::from(14u64));
    assert_eq!(&(&q * &b) + &r, a);
    assert!(r < b);
}

#[test]
fn trimming_is_idempotent() {
    let mut once = vec![0, 0, 3, 0, 1];
    trim_leading_zeros(&mut once);
    let mut twice = once.clone();
    trim_leading_zeros(&mut twice);

    assert_eq!(once, vec![3, 0, 1]);
    assert_eq!(once, twice);
}
