//! Number-theoretic algorithms over the arbitrary precision types.
//!
//! Free functions rather than methods: each one combines both layers
//! (digit sequences and signs) and none needs private state.

use std::cmp::Ordering;

use exacta_natural::{Digit, Error, Natural};

use crate::integer::Integer;
use crate::sign::Sign;

/// Greatest common divisor by the binary (Stein) algorithm.
///
/// Only shifts, comparisons and subtractions; no division. `gcd(a, 0)`
/// is `a` and `gcd(0, 0)` is zero.
#[must_use]
pub fn gcd<D: Digit>(mut a: Natural<D>, mut b: Natural<D>) -> Natural<D> {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    // Common factors of two are pulled out up front and restored at the
    // end; everything past this point works on odd `a`.
    let shift = a.trailing_zeros().min(b.trailing_zeros());
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= &a;
        if b.is_zero() {
            break;
        }
    }

    a << shift
}

/// Integer square root with remainder: the pair `(r, n - r^2)` where `r`
/// is the largest natural with `r^2 <= n`.
///
/// Binary search over `[1, n / 2]`, which contains the root of every
/// `n >= 2`.
#[must_use]
pub fn sqrt<D: Digit>(n: &Natural<D>) -> (Natural<D>, Natural<D>) {
    if n.is_zero() || n.is_one() {
        return (n.clone(), Natural::new());
    }

    let mut low: Natural<D> = Natural::one();
    let mut high = n >> 1_usize;
    let mut root = Natural::new();

    while low <= high {
        let mid = (&low + &high) >> 1_usize;
        let square = &mid * &mid;
        match square.cmp(n) {
            Ordering::Equal => return (mid, Natural::new()),
            Ordering::Less => {
                root = mid.clone();
                low = mid + Natural::one();
            }
            Ordering::Greater => {
                high = mid - Natural::one();
            }
        }
    }

    let remainder = n.abs_diff(&(&root * &root));
    (root, remainder)
}

/// The integer square root alone, discarding the remainder.
#[must_use]
pub fn sqrt_whole<D: Digit>(n: &Natural<D>) -> Natural<D> {
    sqrt(n).0
}

/// `base^exponent` by binary exponentiation. `0^0` is one.
#[must_use]
pub fn pow<D: Digit>(base: &Natural<D>, exponent: &Natural<D>) -> Natural<D> {
    let mut result = Natural::one();
    let mut base = base.clone();
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result *= &base;
        }
        exponent >>= 1_usize;
        if !exponent.is_zero() {
            base = &base * &base;
        }
    }

    result
}

/// `base^exponent mod modulus`, reducing every intermediate product so
/// nothing grows past twice the modulus width.
///
/// # Errors
///
/// [`Error::DivisionByZero`] when `modulus` is zero.
pub fn pow_mod<D: Digit>(
    base: &Natural<D>,
    exponent: &Natural<D>,
    modulus: &Natural<D>,
) -> Result<Natural<D>, Error> {
    if modulus.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if modulus.is_one() {
        return Ok(Natural::new());
    }

    let mut result = Natural::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = &(&result * &base) % modulus;
        }
        exponent >>= 1_usize;
        if !exponent.is_zero() {
            base = &(&base * &base) % modulus;
        }
    }

    Ok(result)
}

/// Signed power: the magnitude is `|base|^exponent` and the result is
/// negative exactly when the base is negative and the exponent odd.
#[must_use]
pub fn pow_signed<D: Digit>(base: &Integer<D>, exponent: &Natural<D>) -> Integer<D> {
    let magnitude = pow(base.magnitude(), exponent);
    let negative = base.is_negative() && exponent.is_odd();
    Integer::from_parts(Sign::from_negative(negative), magnitude)
}
