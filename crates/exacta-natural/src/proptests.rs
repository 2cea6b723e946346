//! Property-based tests for the digit engine.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::Natural;

/// Multi-word naturals built from raw `u64` blocks, so carries cross
/// digit boundaries for every digit width under test.
fn nat64() -> impl Strategy<Value = Natural> {
    vec(any::<u64>(), 0..4).prop_map(|blocks| {
        let mut n = Natural::new();
        for block in blocks {
            n = (n << 64) + Natural::from(block);
        }
        n
    })
}

fn nat8() -> impl Strategy<Value = Natural<u8>> {
    vec(any::<u8>(), 0..9).prop_map(|blocks| {
        let mut n = Natural::new();
        for block in blocks {
            n = (n << 8) + Natural::from(block);
        }
        n
    })
}

fn canonical<D: crate::Digit>(n: &Natural<D>) -> bool {
    n.digits().last() != Some(&D::ZERO)
}

proptest! {
    #[test]
    fn results_stay_canonical(a in nat8(), b in nat8()) {
        prop_assert!(canonical(&(&a + &b)));
        prop_assert!(canonical(&a.abs_diff(&b)));
        prop_assert!(canonical(&(&a * &b)));
        prop_assert!(canonical(&(&a & &b)));
        prop_assert!(canonical(&(&a ^ &b)));
        prop_assert!(canonical(&(!&a)));
    }

    #[test]
    fn addition_commutes(a in nat64(), b in nat64()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn addition_associates(a in nat64(), b in nat64(), c in nat64()) {
        prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn multiplication_commutes(a in nat64(), b in nat64()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn multiplication_distributes(a in nat64(), b in nat64(), c in nat64()) {
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn subtraction_inverts_addition(a in nat64(), b in nat64()) {
        prop_assert_eq!((&a + &b).checked_sub(&b).unwrap(), a);
    }

    #[test]
    fn division_identity(a in nat64(), b in nat64()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(&q * &b + &r, a);
    }

    #[test]
    fn division_by_small_digits_agrees(a in nat8(), d in 1_u8..) {
        let (q, r) = a.div_rem_digit(d);
        let d = Natural::from(d);
        prop_assert!(Natural::from(r) < d);
        prop_assert_eq!(&q * &d + &Natural::from(r), a);
    }

    #[test]
    fn string_round_trip(n in nat64(), base in 2_u32..=64) {
        let s = n.to_str_radix(base).unwrap();
        prop_assert_eq!(Natural::from_str_radix(&s, base).unwrap(), n);
    }

    #[test]
    fn shift_round_trip(n in nat64(), pos in 0_usize..300) {
        prop_assert_eq!(&(&n << pos) >> pos, n);
    }

    #[test]
    fn shift_left_multiplies_by_two(n in nat64()) {
        prop_assert_eq!(&n << 1_usize, &n + &n);
    }

    #[test]
    fn bit_accessor_agrees_with_shift(n in nat64(), pos in 0_usize..200) {
        let shifted = &n >> pos;
        prop_assert_eq!(n.bit(pos), shifted.is_odd());
    }

    #[test]
    fn narrowing_round_trips_via_u128(v in any::<u128>()) {
        let n: Natural<u16> = Natural::from(v);
        prop_assert_eq!(n.fits_into::<u128>(), Some(v));
    }

    #[test]
    fn ordering_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        let na: Natural = Natural::from(a);
        let nb: Natural = Natural::from(b);
        prop_assert_eq!(na.cmp(&nb), a.cmp(&b));
    }
}
