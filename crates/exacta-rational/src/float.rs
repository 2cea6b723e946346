//! Conversions between rationals and IEEE 754 binary floats.
//!
//! Both directions work on the bit representation rather than through
//! rounded decimal arithmetic. A finite float is a mantissa scaled by a
//! power of two, so every finite float converts to an exact rational.
//! Going back, the leading digits of numerator and denominator are
//! folded into an `f64` quotient and the digit-count difference is
//! applied directly to its exponent field, so a value that fits does
//! not suffer intermediate overflow no matter how wide the operands
//! are.

use std::ops::Neg;

use exacta_integers::Sign;
use exacta_natural::{Digit, Natural};

use crate::rational::Rational;

mod sealed {
    pub trait Sealed {}
}

/// IEEE 754 binary float types a [`Rational`] converts to and from.
///
/// Implemented for `f32` and `f64`; not implementable outside this
/// crate.
pub trait Float: sealed::Sealed + Copy + PartialEq + Neg<Output = Self> {
    /// Explicit mantissa width, without the implicit leading one.
    const MANTISSA_BITS: u32;
    /// Exponent field width.
    const EXPONENT_BITS: u32;

    /// Rounds from an `f64`. Lossless for `f64` itself.
    fn from_f64(value: f64) -> Self;

    /// Sign, integral mantissa and binary exponent of a finite value,
    /// so that the value is `±mantissa * 2^exponent` exactly. `None`
    /// for infinities and NaN; zero decomposes to a zero mantissa.
    fn decompose(self) -> Option<(bool, u64, i32)>;
}

macro_rules! impl_float {
    ($t:ty, $mantissa:literal, $exponent:literal) => {
        impl sealed::Sealed for $t {}

        impl Float for $t {
            const MANTISSA_BITS: u32 = $mantissa;
            const EXPONENT_BITS: u32 = $exponent;

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn decompose(self) -> Option<(bool, u64, i32)> {
                if !self.is_finite() {
                    return None;
                }

                let bits = self.to_bits();
                let negative = self.is_sign_negative();
                let raw = u64::from(bits & ((1 << $mantissa) - 1));
                let field = (bits >> $mantissa) & ((1 << $exponent) - 1);
                let bias = (1_i32 << ($exponent - 1)) - 1;

                Some(if field == 0 {
                    // Zero or subnormal: no implicit bit, minimum exponent.
                    (negative, raw, 1 - bias - $mantissa)
                } else {
                    (negative, raw | (1 << $mantissa), field as i32 - bias - $mantissa)
                })
            }
        }
    };
}

impl_float!(f32, 23, 8);
impl_float!(f64, 52, 11);

/// Folds the top `slots` digits into an `f64`, padding with zero digits
/// when the value is shorter. The result is `n / 2^((len - slots) *
/// BITS)`, exact whenever the significant bits of `n` fit a mantissa.
fn fold_digits<D: Digit>(n: &Natural<D>, slots: usize) -> f64 {
    let radix = f64::from(D::BITS).exp2();
    let mut value = 0.0_f64;

    let mut used = 0;
    for &digit in n.digits().iter().rev().take(slots) {
        value = value * radix + digit.to_u64() as f64;
        used += 1;
    }
    for _ in used..slots {
        value *= radix;
    }

    value
}

impl<D: Digit> Rational<D> {
    /// The exact rational value of a finite float. `None` for
    /// infinities and NaN; both zeroes map to the rational zero.
    #[must_use]
    pub fn from_float<F: Float>(value: F) -> Option<Self> {
        let (negative, mantissa, exponent) = value.decompose()?;
        if mantissa == 0 {
            return Some(Self::new());
        }

        // An odd mantissa against a power of two is already reduced.
        let shift = mantissa.trailing_zeros();
        let mantissa = Natural::from(mantissa >> shift);
        let exponent = exponent + shift as i32;

        let sign = Sign::from_negative(negative);
        let (num, den) = if exponent >= 0 {
            (mantissa << exponent as usize, Natural::one())
        } else {
            (mantissa, Natural::one() << exponent.unsigned_abs() as usize)
        };

        Some(Self { sign, num, den })
    }

    /// The nearest float of type `F`.
    ///
    /// Values past the largest finite float map to the signed infinity.
    /// Values whose magnitude falls below the smallest normal float
    /// return `None`: the subnormal range is not produced.
    #[must_use]
    pub fn fits_into<F: Float>(&self) -> Option<F> {
        if self.num.is_zero() {
            return Some(F::from_f64(0.0));
        }

        let magnitude = if self.num.is_one() && self.den.is_one() {
            F::from_f64(1.0)
        } else {
            // Enough digit slots to cover a full f64 mantissa even when
            // it straddles a digit boundary.
            let slots = (f64::MANTISSA_DIGITS as usize).div_ceil(D::BITS as usize) + 1;
            let quotient = fold_digits(&self.num, slots) / fold_digits(&self.den, slots);

            // Both folds are scaled by the same slot count, so the true
            // exponent differs from the quotient's by the digit-count
            // difference alone.
            let delta =
                (self.num.digit_len() as i64 - self.den.digit_len() as i64) * i64::from(D::BITS);

            let bits = quotient.to_bits();
            let exp_field = ((bits >> 52) & 0x7FF) as i64;
            let unbiased = exp_field - 1023 + delta;

            let target_bias = i64::from((1_u32 << (F::EXPONENT_BITS - 1)) - 1);
            if unbiased > target_bias {
                F::from_f64(f64::INFINITY)
            } else if unbiased < 1 - target_bias {
                return None;
            } else {
                let mantissa = bits & ((1_u64 << 52) - 1);
                let adjusted = ((unbiased + 1023) as u64) << 52 | mantissa;
                F::from_f64(f64::from_bits(adjusted))
            }
        };

        Some(if self.sign.is_negative() { -magnitude } else { magnitude })
    }
}
