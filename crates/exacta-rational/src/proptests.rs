//! Property-based tests for the rational layer.

use proptest::prelude::*;

use exacta_integers::{calc, Integer};
use exacta_natural::Natural;

use crate::rational::Rational;

fn rat() -> impl Strategy<Value = Rational> {
    (any::<i64>(), 1_u64..).prop_map(|(num, den)| {
        Rational::from_integers(Integer::from(num), Integer::from(den))
            .expect("denominator is nonzero")
    })
}

fn reduced(q: &Rational) -> bool {
    !q.denominator().is_zero()
        && calc::gcd(q.numerator().clone(), q.denominator().clone()) <= Natural::one()
        && !(q.is_zero() && q.is_negative())
}

proptest! {
    #[test]
    fn results_stay_reduced(a in rat(), b in rat()) {
        prop_assert!(reduced(&(&a + &b)));
        prop_assert!(reduced(&(&a - &b)));
        prop_assert!(reduced(&(&a * &b)));
        if !b.is_zero() {
            prop_assert!(reduced(&(&a / &b)));
        }
    }

    #[test]
    fn equal_values_share_one_representation(num in any::<i32>(), den in 1_i32.., k in 1_i32..1000) {
        let plain = Rational::<u64>::from_integers(num.into(), den.into()).unwrap();
        let scaled = Rational::from_integers(
            Integer::from(i64::from(num) * i64::from(k)),
            Integer::from(i64::from(den) * i64::from(k)),
        )
        .unwrap();
        prop_assert_eq!(plain, scaled);
    }

    #[test]
    fn addition_commutes(a in rat(), b in rat()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn addition_associates(a in rat(), b in rat(), c in rat()) {
        prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn negation_is_the_additive_inverse(a in rat()) {
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn inverse_is_the_multiplicative_inverse(a in rat()) {
        prop_assume!(!a.is_zero());
        prop_assert!((&a * &a.inverse().unwrap()).is_one());
    }

    #[test]
    fn multiplication_distributes(a in rat(), b in rat(), c in rat()) {
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn division_inverts_multiplication(a in rat(), b in rat()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!((&a * &b) / &b, a);
    }

    #[test]
    fn ordering_agrees_with_subtraction(a in rat(), b in rat()) {
        let difference = &a - &b;
        prop_assert_eq!(a < b, difference.is_negative());
        prop_assert_eq!(a == b, difference.is_zero());
    }

    #[test]
    fn increment_and_decrement_are_inverses(a in rat()) {
        let mut stepped = a.clone();
        stepped.increment();
        prop_assert_eq!(&stepped - &a, Rational::one());
        stepped.decrement();
        prop_assert_eq!(stepped, a);
    }

    #[test]
    fn string_round_trip(a in rat(), base in 2_u32..=64) {
        let s = a.to_str_radix(base).unwrap();
        prop_assert_eq!(Rational::from_str_radix(&s, base).unwrap(), a);
    }

    #[test]
    fn shift_round_trip(a in rat(), pos in 0_usize..120) {
        prop_assert_eq!(&(&a << pos) >> pos, a);
    }

    #[test]
    fn finite_floats_round_trip(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        prop_assume!(value.is_finite());
        prop_assume!(value == 0.0 || value.is_normal());
        let q = Rational::<u64>::from_float(value).unwrap();
        prop_assert_eq!(q.fits_into::<f64>(), Some(value));
    }

    #[test]
    fn subnormal_floats_convert_but_do_not_come_back(bits in 1_u64..(1 << 52)) {
        let value = f64::from_bits(bits);
        let q = Rational::<u64>::from_float(value).unwrap();
        prop_assert!(!q.is_zero());
        prop_assert_eq!(q.fits_into::<f64>(), None);
    }
}
