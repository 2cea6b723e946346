//! Random digit-sequence generation.
//!
//! Generators are always passed in by the caller; this crate keeps no
//! process-wide RNG state. Whole digits are drawn uniformly from the
//! generator and the final partial digit is masked down to the exact
//! requested bit count, so the result is uniform over `[0, 2^bit_len)`.

use rand::RngCore;

use crate::digit::Digit;
use crate::natural::{DigitVec, Natural};

impl<D: Digit> Natural<D> {
    /// Draws a uniform value below `2^bit_len` from `rng`.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, bit_len: usize) -> Self {
        let whole = bit_len / D::BITS as usize;
        let partial = (bit_len % D::BITS as usize) as u32;

        let mut digits: DigitVec<D> = DigitVec::with_capacity(whole + 1);
        for _ in 0..whole {
            digits.push(D::from_u64(rng.next_u64()));
        }
        if partial > 0 {
            digits.push(D::from_u64(rng.next_u64()) >> (D::BITS - partial));
        }

        Self::from_digits(digits)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn respects_the_bit_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bit_len in [0_usize, 1, 7, 8, 9, 63, 64, 65, 200] {
            for _ in 0..50 {
                let n: Natural<u8> = Natural::random(&mut rng, bit_len);
                assert!(n.bits() <= bit_len.max(1));
                assert!(n < Natural::one() << bit_len);
            }
        }
    }

    #[test]
    fn zero_bits_always_yields_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let n: Natural = Natural::random(&mut rng, 0);
        assert!(n.is_zero());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let x: Natural = Natural::random(&mut a, 256);
        let y: Natural = Natural::random(&mut b, 256);
        assert_eq!(x, y);
    }

    #[test]
    fn long_draws_eventually_use_the_top_bit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let hit = (0..64).any(|_| {
            let n: Natural = Natural::random(&mut rng, 128);
            n.bits() == 128
        });
        assert!(hit);
    }
}
