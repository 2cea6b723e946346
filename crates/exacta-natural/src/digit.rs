//! The digit abstraction.
//!
//! [`Natural`](crate::Natural) is generic over the width of its digits.
//! The [`Digit`] trait captures the handful of primitive operations the
//! arithmetic engine needs, together with a wide intermediate type that
//! holds a full digit-pair product without overflow. The default
//! instantiation uses `u64` digits with `u128` intermediates, matching the
//! host word size; the narrower widths mostly exist so tests can force
//! carries and borrows across many digit boundaries with small values.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// One fixed-width unsigned unit of the positional representation.
///
/// The implicit radix of a digit sequence is `2^Self::BITS`.
pub trait Digit:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Unsigned type of twice the digit width, wide enough for any
    /// digit-pair product plus a carry.
    type Wide;

    /// Width of the digit in bits.
    const BITS: u32;

    /// The digit 0.
    const ZERO: Self;

    /// The digit 1.
    const ONE: Self;

    /// The largest digit, `radix - 1`.
    const MAX: Self;

    /// `self + rhs + carry`, returning the new carry.
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool);

    /// `self - rhs - borrow`, returning the new borrow.
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Full product of two digits as `(low, high)` halves.
    fn widening_mul(self, rhs: Self) -> (Self, Self);

    /// Divides the two-digit value `hi:lo` by `divisor`, returning the
    /// quotient digit and remainder. Requires `hi < divisor` so the
    /// quotient fits in a single digit.
    fn div_rem_wide(hi: Self, lo: Self, divisor: Self) -> (Self, Self);

    /// Addition discarding overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Number of leading zero bits.
    fn leading_zeros(self) -> u32;

    /// Number of trailing zero bits.
    fn trailing_zeros(self) -> u32;

    /// Truncates a `u64` to digit width.
    fn from_u64(value: u64) -> Self;

    /// Widens the digit to a `u64`.
    fn to_u64(self) -> u64;
}

macro_rules! impl_digit {
    ($digit:ty, $wide:ty) => {
        impl Digit for $digit {
            type Wide = $wide;

            const BITS: u32 = <$digit>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$digit>::MAX;

            #[inline]
            fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (sum, c1) = self.overflowing_add(rhs);
                let (sum, c2) = sum.overflowing_add(carry as $digit);
                (sum, c1 | c2)
            }

            #[inline]
            fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (diff, b1) = self.overflowing_sub(rhs);
                let (diff, b2) = diff.overflowing_sub(borrow as $digit);
                (diff, b1 | b2)
            }

            #[inline]
            fn widening_mul(self, rhs: Self) -> (Self, Self) {
                let wide = <$wide>::from(self) * <$wide>::from(rhs);
                (wide as $digit, (wide >> Self::BITS) as $digit)
            }

            #[inline]
            fn div_rem_wide(hi: Self, lo: Self, divisor: Self) -> (Self, Self) {
                debug_assert!(hi < divisor);
                let wide = (<$wide>::from(hi) << Self::BITS) | <$wide>::from(lo);
                let divisor = <$wide>::from(divisor);
                ((wide / divisor) as $digit, (wide % divisor) as $digit)
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$digit>::wrapping_add(self, rhs)
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$digit>::leading_zeros(self)
            }

            #[inline]
            fn trailing_zeros(self) -> u32 {
                <$digit>::trailing_zeros(self)
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $digit
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }
        }
    };
}

impl_digit!(u8, u16);
impl_digit!(u16, u32);
impl_digit!(u32, u64);
impl_digit!(u64, u128);
