//! Sign-magnitude signed integers.
//!
//! An [`Integer`] is a [`Sign`] paired with a [`Natural`] magnitude.
//! Every binary operation case-splits on the two signs and hands the
//! digit work to the magnitude, so the digit algorithms exist exactly
//! once. Zero always carries a positive sign; [`Integer::from_parts`]
//! re-establishes that after any operation which could produce a
//! negative zero.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

use num_traits::{One, Zero};
use rand::RngCore;

use exacta_natural::{Digit, Error, NativeInt, Natural};

use crate::sign::Sign;

/// An arbitrary precision signed integer.
///
/// Division truncates toward zero: the quotient's sign is the XOR of the
/// operand signs and the remainder takes the dividend's sign, matching
/// the native `/` and `%` operators.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Integer<D: Digit = u64> {
    sign: Sign,
    magnitude: Natural<D>,
}

impl<D: Digit> Integer<D> {
    /// Creates a new integer equal to zero.
    #[must_use]
    pub fn new() -> Self {
        Self { sign: Sign::Positive, magnitude: Natural::new() }
    }

    /// The integer one.
    #[must_use]
    pub fn one() -> Self {
        Self { sign: Sign::Positive, magnitude: Natural::one() }
    }

    /// Assembles an integer from a sign and a magnitude, forcing a
    /// positive sign onto zero.
    #[must_use]
    pub fn from_parts(sign: Sign, magnitude: Natural<D>) -> Self {
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
        Self { sign, magnitude }
    }

    /// The sign flag. Zero reports [`Sign::Positive`].
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Borrows the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Natural<D> {
        &self.magnitude
    }

    /// Consumes the integer and returns its magnitude.
    #[must_use]
    pub fn into_magnitude(self) -> Natural<D> {
        self.magnitude
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self { sign: Sign::Positive, magnitude: self.magnitude.clone() }
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns true if this is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.is_one()
    }

    /// Returns true for values strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Returns true for values of zero or above.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.sign.is_negative()
    }

    /// Returns true if this is even. Zero is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.magnitude.is_even()
    }

    /// Returns true if this is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.magnitude.is_odd()
    }

    /// `-1`, `0` or `1` according to the value's sign.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.magnitude.is_zero() {
            0
        } else if self.sign.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Number of significant bits in the magnitude.
    #[must_use]
    pub fn bits(&self) -> usize {
        self.magnitude.bits()
    }

    /// Reads the bit at `pos` of the magnitude.
    #[must_use]
    pub fn bit(&self, pos: usize) -> bool {
        self.magnitude.bit(pos)
    }

    /// Writes the bit at `pos` of the magnitude. Clearing the last set
    /// bit leaves canonical zero.
    pub fn set_bit(&mut self, pos: usize, value: bool) {
        self.magnitude.set_bit(pos, value);
        if self.magnitude.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// Adds one in place.
    pub fn increment(&mut self) {
        match self.sign {
            Sign::Positive => self.magnitude.increment(),
            Sign::Negative => {
                self.magnitude.decrement();
                if self.magnitude.is_zero() {
                    self.sign = Sign::Positive;
                }
            }
        }
    }

    /// Subtracts one in place, crossing zero into the negatives.
    pub fn decrement(&mut self) {
        match self.sign {
            Sign::Positive => {
                if self.magnitude.is_zero() {
                    self.sign = Sign::Negative;
                    self.magnitude.increment();
                } else {
                    self.magnitude.decrement();
                }
            }
            Sign::Negative => self.magnitude.increment(),
        }
    }

    /// Truncating quotient and remainder.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        let (quotient, remainder) = self.magnitude.div_rem(&rhs.magnitude)?;
        Ok((
            Self::from_parts(self.sign.xor(rhs.sign), quotient),
            Self::from_parts(self.sign, remainder),
        ))
    }

    /// Narrows to a native integer type, returning `None` on overflow.
    /// The magnitude of the target's most-negative value is accepted.
    #[must_use]
    pub fn fits_into<T: NativeInt>(&self) -> Option<T> {
        T::from_sign_magnitude(self.sign.is_negative(), &self.magnitude)
    }

    /// Parses an optionally `-`-prefixed digit string in the given base.
    ///
    /// # Errors
    ///
    /// The magnitude grammar errors of
    /// [`Natural::from_str_radix`]; a lone `-` is [`Error::EmptyInput`].
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, Error> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        Ok(Self::from_parts(sign, Natural::from_str_radix(digits, base)?))
    }

    /// Renders the value in the given base, `-`-prefixed when negative.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBase`] for bases outside 2..=64.
    pub fn to_str_radix(&self, base: u32) -> Result<String, Error> {
        let digits = self.magnitude.to_str_radix(base)?;
        Ok(if self.sign.is_negative() {
            format!("-{digits}")
        } else {
            digits
        })
    }

    /// Draws a value whose magnitude is uniform below `2^bit_len`, with
    /// an independently drawn sign.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, bit_len: usize) -> Self {
        let magnitude = Natural::random(rng, bit_len);
        Self::from_parts(Sign::from_negative(rng.next_u32() & 1 == 1), magnitude)
    }

    fn add_ref(lhs: &Self, rhs: &Self) -> Self {
        if lhs.sign == rhs.sign {
            return Self::from_parts(lhs.sign, &lhs.magnitude + &rhs.magnitude);
        }

        // Opposite signs: the larger magnitude wins the sign.
        let sign = if lhs.magnitude >= rhs.magnitude { lhs.sign } else { rhs.sign };
        Self::from_parts(sign, lhs.magnitude.abs_diff(&rhs.magnitude))
    }

    fn sub_ref(lhs: &Self, rhs: &Self) -> Self {
        if lhs.sign != rhs.sign {
            return Self::from_parts(lhs.sign, &lhs.magnitude + &rhs.magnitude);
        }

        let sign = if lhs.magnitude >= rhs.magnitude { lhs.sign } else { !lhs.sign };
        Self::from_parts(sign, lhs.magnitude.abs_diff(&rhs.magnitude))
    }

    fn mul_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_parts(lhs.sign.xor(rhs.sign), &lhs.magnitude * &rhs.magnitude)
    }
}

impl<D: Digit> Ord for Integer<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<D: Digit> PartialOrd for Integer<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Neg for &Integer<D> {
    type Output = Integer<D>;

    fn neg(self) -> Self::Output {
        Integer::from_parts(!self.sign, self.magnitude.clone())
    }
}

impl<D: Digit> Neg for Integer<D> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(!self.sign, self.magnitude)
    }
}

impl<D: Digit> Add for &Integer<D> {
    type Output = Integer<D>;

    fn add(self, rhs: Self) -> Self::Output {
        Integer::add_ref(self, rhs)
    }
}

impl<D: Digit> Sub for &Integer<D> {
    type Output = Integer<D>;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer::sub_ref(self, rhs)
    }
}

impl<D: Digit> Mul for &Integer<D> {
    type Output = Integer<D>;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer::mul_ref(self, rhs)
    }
}

impl<D: Digit> Div for &Integer<D> {
    type Output = Integer<D>;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Integer::div_rem`] for a checked
    /// division.
    fn div(self, rhs: Self) -> Self::Output {
        let (quotient, _) = self.div_rem(rhs).expect("division by zero");
        quotient
    }
}

impl<D: Digit> Rem for &Integer<D> {
    type Output = Integer<D>;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Integer::div_rem`] for a checked
    /// division.
    fn rem(self, rhs: Self) -> Self::Output {
        let (_, remainder) = self.div_rem(rhs).expect("division by zero");
        remainder
    }
}

impl<D: Digit> BitAnd for &Integer<D> {
    type Output = Integer<D>;

    fn bitand(self, rhs: Self) -> Self::Output {
        Integer::from_parts(self.sign & rhs.sign, &self.magnitude & &rhs.magnitude)
    }
}

impl<D: Digit> BitOr for &Integer<D> {
    type Output = Integer<D>;

    fn bitor(self, rhs: Self) -> Self::Output {
        Integer::from_parts(self.sign | rhs.sign, &self.magnitude | &rhs.magnitude)
    }
}

impl<D: Digit> BitXor for &Integer<D> {
    type Output = Integer<D>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Integer::from_parts(self.sign ^ rhs.sign, &self.magnitude ^ &rhs.magnitude)
    }
}

impl<D: Digit> Not for &Integer<D> {
    type Output = Integer<D>;

    /// Complements the magnitude digits and flips the sign flag. Purely
    /// representational, not a two's-complement negation.
    fn not(self) -> Self::Output {
        Integer::from_parts(!self.sign, !&self.magnitude)
    }
}

impl<D: Digit> Not for Integer<D> {
    type Output = Self;

    fn not(self) -> Self::Output {
        !&self
    }
}

impl<D: Digit> Shl<usize> for &Integer<D> {
    type Output = Integer<D>;

    fn shl(self, pos: usize) -> Self::Output {
        Integer::from_parts(self.sign, &self.magnitude << pos)
    }
}

impl<D: Digit> Shl<usize> for Integer<D> {
    type Output = Self;

    fn shl(self, pos: usize) -> Self::Output {
        Self::from_parts(self.sign, self.magnitude << pos)
    }
}

impl<D: Digit> ShlAssign<usize> for Integer<D> {
    fn shl_assign(&mut self, pos: usize) {
        self.magnitude <<= pos;
    }
}

impl<D: Digit> Shr<usize> for &Integer<D> {
    type Output = Integer<D>;

    /// Shifts the magnitude; a result shifted down to zero comes out
    /// positive.
    fn shr(self, pos: usize) -> Self::Output {
        Integer::from_parts(self.sign, &self.magnitude >> pos)
    }
}

impl<D: Digit> Shr<usize> for Integer<D> {
    type Output = Self;

    fn shr(self, pos: usize) -> Self::Output {
        Self::from_parts(self.sign, self.magnitude >> pos)
    }
}

impl<D: Digit> ShrAssign<usize> for Integer<D> {
    fn shr_assign(&mut self, pos: usize) {
        self.magnitude >>= pos;
        if self.magnitude.is_zero() {
            self.sign = Sign::Positive;
        }
    }
}

macro_rules! forward_int_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<D: Digit> $trait for Integer<D> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl<D: Digit> $trait<&Integer<D>> for Integer<D> {
            type Output = Self;

            fn $method(self, rhs: &Integer<D>) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl<D: Digit> $assign_trait<&Integer<D>> for Integer<D> {
            fn $assign_method(&mut self, rhs: &Integer<D>) {
                *self = $trait::$method(&*self, rhs);
            }
        }

        impl<D: Digit> $assign_trait for Integer<D> {
            fn $assign_method(&mut self, rhs: Integer<D>) {
                *self = $trait::$method(&*self, &rhs);
            }
        }
    };
}

forward_int_op!(Add, add, AddAssign, add_assign);
forward_int_op!(Sub, sub, SubAssign, sub_assign);
forward_int_op!(Mul, mul, MulAssign, mul_assign);
forward_int_op!(Div, div, DivAssign, div_assign);
forward_int_op!(Rem, rem, RemAssign, rem_assign);
forward_int_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_int_op!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_int_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<D: Digit> Zero for Integer<D> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Integer::is_zero(self)
    }
}

impl<D: Digit> One for Integer<D> {
    fn one() -> Self {
        Integer::one()
    }

    fn is_one(&self) -> bool {
        Integer::is_one(self)
    }
}

impl<D: Digit> From<Natural<D>> for Integer<D> {
    fn from(magnitude: Natural<D>) -> Self {
        Self { sign: Sign::Positive, magnitude }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl<D: Digit> From<$t> for Integer<D> {
            fn from(value: $t) -> Self {
                Self { sign: Sign::Positive, magnitude: Natural::from(value) }
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl<D: Digit> From<$t> for Integer<D> {
            fn from(value: $t) -> Self {
                Self::from_parts(
                    Sign::from_negative(value < 0),
                    Natural::from(value.unsigned_abs()),
                )
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl<D: Digit> FromStr for Integer<D> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

macro_rules! fmt_signed {
    ($trait:ident) => {
        impl<D: Digit> fmt::$trait for Integer<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.sign.is_negative() {
                    f.write_str("-")?;
                }
                fmt::$trait::fmt(&self.magnitude, f)
            }
        }
    };
}

fmt_signed!(Display);
fmt_signed!(UpperHex);
fmt_signed!(Binary);

impl<D: Digit> fmt::Debug for Integer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}
