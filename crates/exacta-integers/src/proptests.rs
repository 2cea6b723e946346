//! Property-based tests for the signed layer and the algorithms.

use proptest::collection::vec;
use proptest::prelude::*;

use exacta_natural::Natural;

use crate::calc;
use crate::integer::Integer;
use crate::sign::Sign;

fn nat() -> impl Strategy<Value = Natural> {
    vec(any::<u64>(), 0..3).prop_map(|blocks| {
        let mut n = Natural::new();
        for block in blocks {
            n = (n << 64) + Natural::from(block);
        }
        n
    })
}

fn int() -> impl Strategy<Value = Integer> {
    (any::<bool>(), nat()).prop_map(|(negative, magnitude)| {
        Integer::from_parts(Sign::from_negative(negative), magnitude)
    })
}

fn canonical(n: &Integer) -> bool {
    !(n.is_zero() && n.sign().is_negative())
}

proptest! {
    #[test]
    fn results_never_carry_a_negative_zero(a in int(), b in int()) {
        prop_assert!(canonical(&(&a + &b)));
        prop_assert!(canonical(&(&a - &b)));
        prop_assert!(canonical(&(&a * &b)));
        prop_assert!(canonical(&(-&a)));
    }

    #[test]
    fn addition_commutes(a in int(), b in int()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn addition_associates(a in int(), b in int(), c in int()) {
        prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn negation_is_the_additive_inverse(a in int()) {
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert_eq!(-(-&a), a);
    }

    #[test]
    fn subtraction_adds_the_negation(a in int(), b in int()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    #[test]
    fn multiplication_distributes(a in int(), b in int(), c in int()) {
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn truncating_division_identity(a in int(), b in int()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.magnitude() < b.magnitude());
        // The remainder never crosses zero away from the dividend.
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn division_matches_native_semantics(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        prop_assume!(!(a == i64::MIN && b == -1));
        let (q, r) = Integer::<u64>::from(a).div_rem(&Integer::from(b)).unwrap();
        prop_assert_eq!(q.fits_into::<i64>(), Some(a / b));
        prop_assert_eq!(r.fits_into::<i64>(), Some(a % b));
    }

    #[test]
    fn ordering_matches_i128(a in any::<i128>(), b in any::<i128>()) {
        let ia: Integer = Integer::from(a);
        let ib: Integer = Integer::from(b);
        prop_assert_eq!(ia.cmp(&ib), a.cmp(&b));
    }

    #[test]
    fn string_round_trip(a in int(), base in 2_u32..=64) {
        let s = a.to_str_radix(base).unwrap();
        prop_assert_eq!(Integer::from_str_radix(&s, base).unwrap(), a);
    }

    #[test]
    fn narrowing_round_trips(v in any::<i128>()) {
        let a: Integer = Integer::from(v);
        prop_assert_eq!(a.fits_into::<i128>(), Some(v));
    }

    #[test]
    fn gcd_divides_both_operands(a in nat(), b in nat()) {
        let g = calc::gcd(a.clone(), b.clone());
        if g.is_zero() {
            prop_assert!(a.is_zero() && b.is_zero());
        } else {
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }
    }

    #[test]
    fn gcd_commutes(a in nat(), b in nat()) {
        prop_assert_eq!(calc::gcd(a.clone(), b.clone()), calc::gcd(b, a));
    }

    #[test]
    fn gcd_of_scaled_coprimes_recovers_the_scale(k in 1_u32.., a in 1_u32..) {
        let k = Natural::<u64>::from(k);
        let a = Natural::from(a);
        let b = &a + &Natural::one();
        // Consecutive naturals are coprime.
        prop_assert_eq!(calc::gcd(&a * &k, &b * &k), k);
    }

    #[test]
    fn sqrt_brackets_the_input(n in nat()) {
        let (root, remainder) = calc::sqrt(&n);
        let square = &root * &root;
        prop_assert_eq!(&square + &remainder, n.clone());
        if !n.is_zero() {
            let next = &root + &Natural::one();
            prop_assert!(&next * &next > n);
        }
    }

    #[test]
    fn pow_matches_repeated_multiplication(base in 0_u64..50, exp in 0_u32..12) {
        let expected = (0..exp).fold(Natural::<u64>::one(), |acc, _| acc * Natural::from(base));
        prop_assert_eq!(calc::pow(&Natural::from(base), &Natural::from(exp)), expected);
    }

    #[test]
    fn pow_mod_agrees_with_pow(base in nat(), exp in 0_u32..40, modulus in nat()) {
        prop_assume!(!modulus.is_zero());
        let exp = Natural::from(exp);
        let expected = &calc::pow(&base, &exp) % &modulus;
        prop_assert_eq!(calc::pow_mod(&base, &exp, &modulus).unwrap(), expected);
    }

    #[test]
    fn signed_pow_parity(base in any::<i32>(), exp in 0_u32..8) {
        let result = calc::pow_signed(&Integer::<u64>::from(base), &Natural::from(exp));
        prop_assert_eq!(result.is_negative(), base < 0 && exp % 2 == 1);
        prop_assert_eq!(
            result.magnitude(),
            &calc::pow(&Natural::from(base.unsigned_abs()), &Natural::from(exp))
        );
    }
}
