//! The reduced fraction type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use std::str::FromStr;

use num_traits::{One, Zero};

use exacta_integers::{calc, Integer, Sign};
use exacta_natural::{Digit, Error, Natural};

/// An arbitrary precision rational number.
///
/// The fraction is kept fully reduced: numerator and denominator are
/// coprime, the denominator is nonzero, and zero is `0/1` with a
/// positive sign. Equal values therefore always have equal
/// representations, which is what makes the derived equality and hash
/// correct.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational<D: Digit = u64> {
    pub(crate) sign: Sign,
    pub(crate) num: Natural<D>,
    pub(crate) den: Natural<D>,
}

impl<D: Digit> Rational<D> {
    /// The rational zero, `0/1`.
    #[must_use]
    pub fn new() -> Self {
        Self { sign: Sign::Positive, num: Natural::new(), den: Natural::one() }
    }

    /// The rational one, `1/1`.
    #[must_use]
    pub fn one() -> Self {
        Self { sign: Sign::Positive, num: Natural::one(), den: Natural::one() }
    }

    /// Builds the quotient of two integers.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `den` is zero.
    pub fn from_integers(num: Integer<D>, den: Integer<D>) -> Result<Self, Error> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let sign = num.sign().xor(den.sign());
        Ok(Self::reduced(sign, num.into_magnitude(), den.into_magnitude()))
    }

    /// Builds the quotient of two naturals.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `den` is zero.
    pub fn from_naturals(num: Natural<D>, den: Natural<D>) -> Result<Self, Error> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(Sign::Positive, num, den))
    }

    /// Reduces by the gcd and forces a positive sign onto zero.
    /// Precondition: `den` is nonzero.
    pub(crate) fn reduced(sign: Sign, num: Natural<D>, den: Natural<D>) -> Self {
        debug_assert!(!den.is_zero());

        let gcd = calc::gcd(num.clone(), den.clone());
        let (num, den) = if gcd.is_one() {
            (num, den)
        } else {
            (num / &gcd, den / &gcd)
        };

        let sign = if num.is_zero() { Sign::Positive } else { sign };
        Self { sign, num, den }
    }

    /// The sign flag. Zero reports [`Sign::Positive`].
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The reduced numerator magnitude.
    #[must_use]
    pub fn numerator(&self) -> &Natural<D> {
        &self.num
    }

    /// The reduced denominator, always nonzero and coprime with the
    /// numerator.
    #[must_use]
    pub fn denominator(&self) -> &Natural<D> {
        &self.den
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if this is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.num.is_one() && self.den.is_one()
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

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self { sign: Sign::Positive, num: self.num.clone(), den: self.den.clone() }
    }

    /// The multiplicative inverse, keeping the sign.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when this is zero.
    pub fn inverse(&self) -> Result<Self, Error> {
        if self.num.is_zero() {
            return Err(Error::DivisionByZero);
        }
        // Swapping a reduced fraction leaves it reduced.
        Ok(Self { sign: self.sign, num: self.den.clone(), den: self.num.clone() })
    }

    /// Adds one in place.
    ///
    /// `num/den ± den/den` leaves the gcd untouched, so the fraction
    /// stays reduced without recomputing it.
    pub fn increment(&mut self) {
        match self.sign {
            Sign::Positive => self.num += &self.den,
            Sign::Negative => match self.num.cmp(&self.den) {
                // A reduced fraction with num == den is exactly -1.
                Ordering::Equal => {
                    self.num.set_zero();
                    self.sign = Sign::Positive;
                }
                Ordering::Greater => self.num -= &self.den,
                Ordering::Less => {
                    self.num = self.den.abs_diff(&self.num);
                    self.sign = Sign::Positive;
                }
            },
        }
    }

    /// Subtracts one in place.
    pub fn decrement(&mut self) {
        match self.sign {
            Sign::Positive => match self.num.cmp(&self.den) {
                Ordering::Equal => self.num.set_zero(),
                Ordering::Greater => self.num -= &self.den,
                Ordering::Less => {
                    self.num = self.den.abs_diff(&self.num);
                    self.sign = Sign::Negative;
                }
            },
            Sign::Negative => self.num += &self.den,
        }
    }

    /// Checked division.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(
            self.sign.xor(rhs.sign),
            &self.num * &rhs.den,
            &self.den * &rhs.num,
        ))
    }

    /// Parses `num`, `num/den`, `-num` or `-num/den` in the given base.
    ///
    /// # Errors
    ///
    /// The magnitude grammar errors of
    /// [`Natural::from_str_radix`], plus [`Error::DivisionByZero`] for a
    /// zero denominator.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, Error> {
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };

        let (num, den) = match rest.split_once('/') {
            Some((num_str, den_str)) => (
                Natural::from_str_radix(num_str, base)?,
                Natural::from_str_radix(den_str, base)?,
            ),
            None => (Natural::from_str_radix(rest, base)?, Natural::one()),
        };

        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(sign, num, den))
    }

    /// Renders the value as `num/den` in the given base, `-`-prefixed
    /// when negative.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBase`] for bases outside 2..=64.
    pub fn to_str_radix(&self, base: u32) -> Result<String, Error> {
        let num = self.num.to_str_radix(base)?;
        let den = self.den.to_str_radix(base)?;
        Ok(if self.sign.is_negative() {
            format!("-{num}/{den}")
        } else {
            format!("{num}/{den}")
        })
    }

    fn add_ref(lhs: &Self, rhs: &Self) -> Self {
        // Cross products as signed integers reuse the sign algebra of
        // Integer addition instead of redoing the four-way case split.
        let left = Integer::from_parts(lhs.sign, &lhs.num * &rhs.den);
        let right = Integer::from_parts(rhs.sign, &lhs.den * &rhs.num);
        let sum = left + right;
        let den = &lhs.den * &rhs.den;
        Self::reduced(sum.sign(), sum.into_magnitude(), den)
    }

    fn sub_ref(lhs: &Self, rhs: &Self) -> Self {
        let left = Integer::from_parts(lhs.sign, &lhs.num * &rhs.den);
        let right = Integer::from_parts(rhs.sign, &lhs.den * &rhs.num);
        let difference = left - right;
        let den = &lhs.den * &rhs.den;
        Self::reduced(difference.sign(), difference.into_magnitude(), den)
    }

    fn mul_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::reduced(
            lhs.sign.xor(rhs.sign),
            &lhs.num * &rhs.num,
            &lhs.den * &rhs.den,
        )
    }
}

impl<D: Digit> Default for Rational<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digit> Ord for Rational<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => {
                (&self.num * &other.den).cmp(&(&other.num * &self.den))
            }
            (Sign::Negative, Sign::Negative) => {
                (&other.num * &self.den).cmp(&(&self.num * &other.den))
            }
        }
    }
}

impl<D: Digit> PartialOrd for Rational<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Neg for &Rational<D> {
    type Output = Rational<D>;

    fn neg(self) -> Self::Output {
        let sign = if self.num.is_zero() { Sign::Positive } else { !self.sign };
        Rational { sign, num: self.num.clone(), den: self.den.clone() }
    }
}

impl<D: Digit> Neg for Rational<D> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.num.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl<D: Digit> Add for &Rational<D> {
    type Output = Rational<D>;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::add_ref(self, rhs)
    }
}

impl<D: Digit> Sub for &Rational<D> {
    type Output = Rational<D>;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::sub_ref(self, rhs)
    }
}

impl<D: Digit> Mul for &Rational<D> {
    type Output = Rational<D>;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::mul_ref(self, rhs)
    }
}

impl<D: Digit> Div for &Rational<D> {
    type Output = Rational<D>;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Rational::checked_div`] for a
    /// checked division.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl<D: Digit> BitAnd for &Rational<D> {
    type Output = Rational<D>;

    /// Digit-wise AND of the numerator pair and the denominator pair.
    ///
    /// # Panics
    ///
    /// Panics when the denominators AND to zero.
    fn bitand(self, rhs: Self) -> Self::Output {
        let den = &self.den & &rhs.den;
        assert!(!den.is_zero(), "division by zero");
        Rational::reduced(self.sign & rhs.sign, &self.num & &rhs.num, den)
    }
}

impl<D: Digit> BitOr for &Rational<D> {
    type Output = Rational<D>;

    /// Digit-wise OR of the numerator pair and the denominator pair.
    /// OR cannot clear the denominator, so this never fails.
    fn bitor(self, rhs: Self) -> Self::Output {
        Rational::reduced(self.sign | rhs.sign, &self.num | &rhs.num, &self.den | &rhs.den)
    }
}

impl<D: Digit> BitXor for &Rational<D> {
    type Output = Rational<D>;

    /// Digit-wise XOR of the numerator pair and the denominator pair.
    ///
    /// # Panics
    ///
    /// Panics when the denominators XOR to zero.
    fn bitxor(self, rhs: Self) -> Self::Output {
        let den = &self.den ^ &rhs.den;
        assert!(!den.is_zero(), "division by zero");
        Rational::reduced(self.sign ^ rhs.sign, &self.num ^ &rhs.num, den)
    }
}

impl<D: Digit> Not for &Rational<D> {
    type Output = Rational<D>;

    /// Complements both digit sequences and flips the sign. A
    /// complemented-to-zero numerator yields zero.
    ///
    /// # Panics
    ///
    /// Panics when the denominator complements to zero.
    fn not(self) -> Self::Output {
        let num = !&self.num;
        if num.is_zero() {
            return Rational::new();
        }
        let den = !&self.den;
        assert!(!den.is_zero(), "division by zero");
        Rational::reduced(!self.sign, num, den)
    }
}

impl<D: Digit> Not for Rational<D> {
    type Output = Self;

    fn not(self) -> Self::Output {
        !&self
    }
}

impl<D: Digit> Shl<usize> for &Rational<D> {
    type Output = Rational<D>;

    /// Multiplies by `2^pos`, shifting the numerator.
    fn shl(self, pos: usize) -> Self::Output {
        Rational::reduced(self.sign, &self.num << pos, self.den.clone())
    }
}

impl<D: Digit> Shl<usize> for Rational<D> {
    type Output = Self;

    fn shl(self, pos: usize) -> Self::Output {
        &self << pos
    }
}

impl<D: Digit> ShlAssign<usize> for Rational<D> {
    fn shl_assign(&mut self, pos: usize) {
        *self = &*self << pos;
    }
}

impl<D: Digit> Shr<usize> for &Rational<D> {
    type Output = Rational<D>;

    /// Divides by `2^pos`, growing the denominator. Exact, never
    /// truncating.
    fn shr(self, pos: usize) -> Self::Output {
        if self.is_zero() {
            return Rational::new();
        }
        Rational::reduced(self.sign, self.num.clone(), &self.den << pos)
    }
}

impl<D: Digit> Shr<usize> for Rational<D> {
    type Output = Self;

    fn shr(self, pos: usize) -> Self::Output {
        &self >> pos
    }
}

impl<D: Digit> ShrAssign<usize> for Rational<D> {
    fn shr_assign(&mut self, pos: usize) {
        *self = &*self >> pos;
    }
}

macro_rules! forward_rat_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<D: Digit> $trait for Rational<D> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl<D: Digit> $trait<&Rational<D>> for Rational<D> {
            type Output = Self;

            fn $method(self, rhs: &Rational<D>) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl<D: Digit> $assign_trait<&Rational<D>> for Rational<D> {
            fn $assign_method(&mut self, rhs: &Rational<D>) {
                *self = $trait::$method(&*self, rhs);
            }
        }

        impl<D: Digit> $assign_trait for Rational<D> {
            fn $assign_method(&mut self, rhs: Rational<D>) {
                *self = $trait::$method(&*self, &rhs);
            }
        }
    };
}

forward_rat_op!(Add, add, AddAssign, add_assign);
forward_rat_op!(Sub, sub, SubAssign, sub_assign);
forward_rat_op!(Mul, mul, MulAssign, mul_assign);
forward_rat_op!(Div, div, DivAssign, div_assign);
forward_rat_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_rat_op!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_rat_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<D: Digit> Zero for Rational<D> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl<D: Digit> One for Rational<D> {
    fn one() -> Self {
        Rational::one()
    }

    fn is_one(&self) -> bool {
        Rational::is_one(self)
    }
}

impl<D: Digit> From<Natural<D>> for Rational<D> {
    fn from(num: Natural<D>) -> Self {
        Self { sign: Sign::Positive, num, den: Natural::one() }
    }
}

impl<D: Digit> From<Integer<D>> for Rational<D> {
    fn from(num: Integer<D>) -> Self {
        Self {
            sign: num.sign(),
            num: num.into_magnitude(),
            den: Natural::one(),
        }
    }
}

macro_rules! impl_from_native {
    ($($t:ty),*) => {$(
        impl<D: Digit> From<$t> for Rational<D> {
            fn from(value: $t) -> Self {
                Self::from(Integer::from(value))
            }
        }
    )*};
}

impl_from_native!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<D: Digit> FromStr for Rational<D> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

macro_rules! fmt_fraction {
    ($trait:ident) => {
        impl<D: Digit> fmt::$trait for Rational<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.sign.is_negative() {
                    f.write_str("-")?;
                }
                fmt::$trait::fmt(&self.num, f)?;
                f.write_str("/")?;
                fmt::$trait::fmt(&self.den, f)
            }
        }
    };
}

fmt_fraction!(Display);
fmt_fraction!(UpperHex);
fmt_fraction!(Binary);

impl<D: Digit> fmt::Debug for Rational<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(num: i128, den: i128) -> Rational<u8> {
        Rational::from_integers(Integer::from(num), Integer::from(den)).unwrap()
    }

    #[test]
    fn construction_reduces_and_canonicalizes() {
        assert_eq!(rat(2, 4), rat(1, 2));
        assert_eq!(rat(2, 4).numerator(), &Natural::from(1_u8));
        assert_eq!(rat(2, 4).denominator(), &Natural::from(2_u8));
        assert_eq!(rat(-6, 9), rat(-2, 3));
        assert_eq!(rat(6, -9), rat(-2, 3));
        assert_eq!(rat(-6, -9), rat(2, 3));
        assert_eq!(rat(0, 7), Rational::new());
        assert!(rat(0, -7).is_positive());
        assert_eq!(
            Rational::<u8>::from_integers(Integer::from(1), Integer::new()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn addition_over_a_common_denominator() {
        assert_eq!(rat(1, 2) + rat(1, 3), rat(5, 6));
        assert_eq!(rat(1, 2) + rat(-1, 2), Rational::new());
        assert_eq!(rat(-1, 3) + rat(-1, 6), rat(-1, 2));
        assert_eq!(rat(3, 4) + rat(1, 4), rat(1, 1));
    }

    #[test]
    fn subtraction_mirrors_addition() {
        assert_eq!(rat(1, 2) - rat(1, 3), rat(1, 6));
        assert_eq!(rat(1, 3) - rat(1, 2), rat(-1, 6));
        assert_eq!(rat(-1, 2) - rat(-1, 2), Rational::new());
    }

    #[test]
    fn multiplication_and_division() {
        assert_eq!(rat(2, 3) * rat(3, 4), rat(1, 2));
        assert_eq!(rat(-2, 3) * rat(3, 4), rat(-1, 2));
        assert_eq!(rat(2, 3) / rat(4, 3), rat(1, 2));
        assert_eq!(rat(-2, 3) / rat(-4, 3), rat(1, 2));
        assert_eq!(
            rat(1, 2).checked_div(&Rational::new()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_by_zero_panics_through_operator() {
        let _ = rat(1, 2) / Rational::new();
    }

    #[test]
    fn inverse_swaps_and_keeps_the_sign() {
        assert_eq!(rat(2, 3).inverse().unwrap(), rat(3, 2));
        assert_eq!(rat(-2, 3).inverse().unwrap(), rat(-3, 2));
        assert_eq!(Rational::<u8>::new().inverse(), Err(Error::DivisionByZero));
    }

    #[test]
    fn increment_and_decrement_step_by_one() {
        let mut q = rat(1, 2);
        q.increment();
        assert_eq!(q, rat(3, 2));
        q.decrement();
        q.decrement();
        assert_eq!(q, rat(-1, 2));
        q.increment();
        assert_eq!(q, rat(1, 2));

        let mut minus_one = rat(-1, 1);
        minus_one.increment();
        assert_eq!(minus_one, Rational::new());
        assert!(minus_one.is_positive());

        let mut one = rat(1, 1);
        one.decrement();
        assert_eq!(one, Rational::new());
    }

    #[test]
    fn ordering_cross_multiplies() {
        assert!(rat(1, 3) < rat(1, 2));
        assert!(rat(-1, 2) < rat(-1, 3));
        assert!(rat(-1, 2) < rat(1, 3));
        assert!(rat(0, 1) < rat(1, 100));
        assert!(rat(-1, 100) < rat(0, 1));
        assert_eq!(rat(2, 4).cmp(&rat(1, 2)), Ordering::Equal);
        assert!(rat(7, 3) > rat(9, 4));
    }

    #[test]
    fn parsing_and_display_round_trip() {
        assert_eq!("1/2".parse::<Rational>().unwrap().to_string(), "1/2");
        assert_eq!(rat(-5, 6).to_string(), "-5/6");
        assert_eq!(rat(7, 1).to_string(), "7/1");
        assert_eq!("3".parse::<Rational>().unwrap().to_string(), "3/1");
        assert_eq!("-4/6".parse::<Rational>().unwrap().to_string(), "-2/3");
        assert_eq!(format!("{:X}", rat(-255, 16)), "-FF/10");
        assert_eq!(format!("{:?}", rat(1, 2)), "Rational(1/2)");

        assert_eq!("1/0".parse::<Rational>(), Err(Error::DivisionByZero));
        assert_eq!("-".parse::<Rational>(), Err(Error::EmptyInput));
        assert_eq!(
            Rational::<u64>::from_str_radix("FF/2", 16).unwrap(),
            Rational::from_str_radix("255/2", 10).unwrap()
        );
    }

    #[test]
    fn shifts_scale_by_powers_of_two() {
        assert_eq!(rat(3, 1) << 2, rat(12, 1));
        assert_eq!(rat(3, 4) << 2, rat(3, 1));
        assert_eq!(rat(3, 1) >> 2, rat(3, 4));
        assert_eq!(rat(12, 1) >> 2, rat(3, 1));
        assert_eq!(Rational::<u8>::new() >> 5, Rational::new());
        assert_eq!(rat(-3, 2) << 1, rat(-3, 1));
    }

    #[test]
    fn bitwise_operators_act_on_both_sequences() {
        assert_eq!(rat(0b1100, 0b111) & rat(0b1010, 0b111), rat(0b1000, 0b111));
        assert_eq!(rat(0b1100, 1) | rat(0b0011, 1), rat(0b1111, 1));
        assert_eq!(rat(0b1101, 0b11) ^ rat(0b1011, 0b10), rat(0b0110, 0b01));
        assert_eq!(!rat(0xFF, 3), Rational::new());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn bitwise_and_clearing_the_denominator_panics() {
        let _ = rat(1, 0b10) & rat(1, 0b101);
    }

    #[test]
    fn conversion_from_integers_and_natives() {
        assert_eq!(Rational::<u8>::from(Integer::from(-3)), rat(-3, 1));
        assert_eq!(Rational::<u8>::from(Natural::<u8>::from(9_u8)), rat(9, 1));
        assert_eq!(Rational::<u8>::from(-7_i32), rat(-7, 1));
        assert_eq!(Rational::<u8>::from(7_u64), rat(7, 1));
    }
}
