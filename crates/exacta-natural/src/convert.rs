//! Conversions: radix strings, native integers and narrowing.
//!
//! The string grammar covers bases 2 through 64 over the character set
//! `0-9A-Za-z+~`, where a character's position is its digit value. Base
//! validity is enforced here, at the boundary, never inside the
//! arithmetic primitives.

use std::fmt;
use std::str::FromStr;

use crate::digit::Digit;
use crate::error::Error;
use crate::natural::{DigitVec, Natural};

/// Digit characters in value order for bases up to 64.
pub(crate) const CHARSET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+~";

/// Smallest and largest supported string bases.
pub(crate) const BASE_RANGE: std::ops::RangeInclusive<u32> = 2..=64;

/// Maps a character to its digit value, independent of base.
fn char_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(ch as u32 - 'a' as u32 + 36),
        '+' => Some(62),
        '~' => Some(63),
        _ => None,
    }
}

pub(crate) fn check_base(base: u32) -> Result<(), Error> {
    if BASE_RANGE.contains(&base) {
        Ok(())
    } else {
        Err(Error::InvalidBase(base))
    }
}

impl<D: Digit> Natural<D> {
    /// Parses a string of digit characters in the given base.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBase`] for bases outside 2..=64,
    /// [`Error::EmptyInput`] for an empty string and
    /// [`Error::InvalidDigit`] for characters whose value is not below the
    /// base.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, Error> {
        check_base(base)?;
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }

        let multiplier = D::from_u64(u64::from(base));
        let mut value = Self::new();
        for ch in s.chars() {
            let digit = char_value(ch)
                .filter(|&v| v < base)
                .ok_or(Error::InvalidDigit { ch, base })?;
            value.mul_add_digit(multiplier, D::from_u64(u64::from(digit)));
        }

        Ok(value)
    }

    /// Renders the value in the given base by repeated short division,
    /// collecting remainders least-significant first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBase`] for bases outside 2..=64.
    pub fn to_str_radix(&self, base: u32) -> Result<String, Error> {
        check_base(base)?;
        Ok(self.to_radix_unchecked(base))
    }

    pub(crate) fn to_radix_unchecked(&self, base: u32) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }

        let divisor = D::from_u64(u64::from(base));
        let mut out = Vec::with_capacity(self.bits() / (32 - base.leading_zeros()) as usize + 1);
        let mut helper = self.clone();
        while !helper.is_zero() {
            let (quotient, remainder) = helper.div_rem_digit(divisor);
            out.push(CHARSET[remainder.to_u64() as usize]);
            helper = quotient;
        }
        out.reverse();

        String::from_utf8(out).expect("charset is ASCII")
    }

    /// Narrows to a native integer type, returning `None` whenever any
    /// significant bit lies beyond the target's width.
    #[must_use]
    pub fn fits_into<T: NativeInt>(&self) -> Option<T> {
        T::from_natural(self)
    }

    /// Folds the canonical digits into a `u128` accumulator. `None` when
    /// more than 128 bits are significant.
    pub(crate) fn to_u128(&self) -> Option<u128> {
        if self.is_zero() {
            return Some(0);
        }
        if self.bits() > 128 {
            return None;
        }

        let mut accumulator = 0_u128;
        for &digit in self.digits.iter().rev() {
            accumulator = (accumulator << D::BITS) | u128::from(digit.to_u64());
        }
        Some(accumulator)
    }
}

impl<D: Digit> FromStr for Natural<D> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

macro_rules! fmt_via_radix {
    ($base:literal) => {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.to_radix_unchecked($base))
        }
    };
}

impl<D: Digit> fmt::Display for Natural<D> {
    fmt_via_radix!(10);
}

impl<D: Digit> fmt::Debug for Natural<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({self})")
    }
}

impl<D: Digit> fmt::UpperHex for Natural<D> {
    fmt_via_radix!(16);
}

impl<D: Digit> fmt::Binary for Natural<D> {
    fmt_via_radix!(2);
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl<D: Digit> From<$t> for Natural<D> {
            fn from(value: $t) -> Self {
                let mut value = u128::from(value);
                let mut digits = DigitVec::new();
                while value != 0 {
                    digits.push(D::from_u64(value as u64));
                    value >>= D::BITS;
                }
                Self::from_digits(digits)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128);

impl<D: Digit> From<usize> for Natural<D> {
    fn from(value: usize) -> Self {
        Self::from(value as u128)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Native integer types a [`Natural`] (or a sign-magnitude pair) can
/// narrow into.
///
/// Implemented for every primitive integer width; not implementable
/// outside this crate.
pub trait NativeInt: Sized + sealed::Sealed {
    /// Converts from a natural, `None` on overflow.
    fn from_natural<D: Digit>(n: &Natural<D>) -> Option<Self>;

    /// Converts from a sign-magnitude pair, `None` on overflow. The
    /// magnitude of the most-negative signed value is accepted, honouring
    /// the two's-complement asymmetry.
    fn from_sign_magnitude<D: Digit>(negative: bool, magnitude: &Natural<D>) -> Option<Self>;
}

fn signed_value<D: Digit>(negative: bool, magnitude: &Natural<D>) -> Option<i128> {
    let magnitude = magnitude.to_u128()?;
    if negative {
        if magnitude > 1_u128 << 127 {
            return None;
        }
        // Exactly 2^127 maps onto i128::MIN.
        Some((magnitude as i128).wrapping_neg())
    } else {
        i128::try_from(magnitude).ok()
    }
}

macro_rules! impl_native_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl NativeInt for $t {
            fn from_natural<D: Digit>(n: &Natural<D>) -> Option<Self> {
                <$t>::try_from(n.to_u128()?).ok()
            }

            fn from_sign_magnitude<D: Digit>(
                negative: bool,
                magnitude: &Natural<D>,
            ) -> Option<Self> {
                if negative {
                    return None;
                }
                Self::from_natural(magnitude)
            }
        }
    )*};
}

macro_rules! impl_native_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl NativeInt for $t {
            fn from_natural<D: Digit>(n: &Natural<D>) -> Option<Self> {
                <$t>::try_from(n.to_u128()?).ok()
            }

            fn from_sign_magnitude<D: Digit>(
                negative: bool,
                magnitude: &Natural<D>,
            ) -> Option<Self> {
                <$t>::try_from(signed_value(negative, magnitude)?).ok()
            }
        }
    )*};
}

impl_native_unsigned!(u8, u16, u32, u64, u128, usize);
impl_native_signed!(i8, i16, i32, i64, i128, isize);
