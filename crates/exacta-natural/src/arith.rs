//! Addition, subtraction, multiplication and division over [`Natural`].
//!
//! All four follow the schoolbook algorithms: digit-by-digit carry and
//! borrow propagation, an `O(n * m)` product accumulated through the wide
//! intermediate type, and binary long division walking the dividend from
//! its most significant bit.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Rem, Sub, SubAssign};

use crate::digit::Digit;
use crate::error::Error;
use crate::natural::{DigitVec, Natural};

impl<D: Digit> Natural<D> {
    /// Adds `rhs` into `self` with digit-wise carry propagation.
    fn add_in_place(&mut self, rhs: &Self) {
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            self.digits = rhs.digits.clone();
            return;
        }

        if self.digits.len() < rhs.digits.len() {
            self.digits.resize(rhs.digits.len(), D::ZERO);
        }

        let mut carry = false;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            if i >= rhs.digits.len() && !carry {
                break;
            }
            let addend = rhs.digits.get(i).copied().unwrap_or(D::ZERO);
            let (sum, next_carry) = digit.carrying_add(addend, carry);
            *digit = sum;
            carry = next_carry;
        }

        if carry {
            self.digits.push(D::ONE);
        }
    }

    /// Subtracts `rhs` from `self` in place. Precondition: `self >= rhs`;
    /// callers compare first.
    pub(crate) fn sub_in_place(&mut self, rhs: &Self) {
        debug_assert!(*self >= *rhs);

        let mut borrow = false;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            if i >= rhs.digits.len() && !borrow {
                break;
            }
            let subtrahend = rhs.digits.get(i).copied().unwrap_or(D::ZERO);
            let (diff, next_borrow) = digit.borrowing_sub(subtrahend, borrow);
            *digit = diff;
            borrow = next_borrow;
        }

        debug_assert!(!borrow);
        self.normalize();
    }

    /// Subtraction returning `None` when `rhs > self`.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if *self < *rhs {
            return None;
        }
        let mut difference = self.clone();
        difference.sub_in_place(rhs);
        Some(difference)
    }

    /// The absolute difference `|self - rhs|`.
    #[must_use]
    pub fn abs_diff(&self, rhs: &Self) -> Self {
        match self.cmp(rhs) {
            std::cmp::Ordering::Less => {
                let mut difference = rhs.clone();
                difference.sub_in_place(self);
                difference
            }
            std::cmp::Ordering::Equal => Self::new(),
            std::cmp::Ordering::Greater => {
                let mut difference = self.clone();
                difference.sub_in_place(rhs);
                difference
            }
        }
    }

    /// Schoolbook product, every digit pair computed through the wide
    /// intermediate so no partial product overflows.
    fn mul_ref(lhs: &Self, rhs: &Self) -> Self {
        if lhs.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return lhs.clone();
        }
        if lhs.is_zero() || rhs.is_zero() {
            return Self::new();
        }

        let mut product: DigitVec<D> = DigitVec::new();
        product.resize(lhs.digits.len() + rhs.digits.len(), D::ZERO);

        for (i, &a) in lhs.digits.iter().enumerate() {
            let mut carry = D::ZERO;
            for (j, &b) in rhs.digits.iter().enumerate() {
                let (low, high) = a.widening_mul(b);
                let (low, c1) = product[i + j].carrying_add(low, false);
                let (low, c2) = low.carrying_add(carry, false);
                product[i + j] = low;
                // high <= MAX - 1, so adding both carry bits cannot wrap.
                carry = high
                    .wrapping_add(if c1 { D::ONE } else { D::ZERO })
                    .wrapping_add(if c2 { D::ONE } else { D::ZERO });
            }
            product[i + rhs.digits.len()] = carry;
        }

        Self::from_digits(product)
    }

    /// `self * multiplier + addend` in place, for single-digit operands.
    /// Backbone of string parsing.
    pub(crate) fn mul_add_digit(&mut self, multiplier: D, addend: D) {
        let mut carry = addend;
        for digit in &mut self.digits {
            let (low, high) = digit.widening_mul(multiplier);
            let (low, c) = low.carrying_add(carry, false);
            *digit = low;
            carry = high.wrapping_add(if c { D::ONE } else { D::ZERO });
        }
        if carry != D::ZERO {
            self.digits.push(carry);
        }
        self.normalize();
    }

    /// Short division by a single digit, returning quotient and remainder.
    /// Backbone of stringification.
    pub(crate) fn div_rem_digit(&self, divisor: D) -> (Self, D) {
        debug_assert!(divisor != D::ZERO);

        let mut quotient: DigitVec<D> = DigitVec::new();
        quotient.resize(self.digits.len(), D::ZERO);
        let mut remainder = D::ZERO;

        for (i, &digit) in self.digits.iter().enumerate().rev() {
            let (q, r) = D::div_rem_wide(remainder, digit, divisor);
            quotient[i] = q;
            remainder = r;
        }

        (Self::from_digits(quotient), remainder)
    }

    /// Quotient and remainder of binary long division.
    ///
    /// The dividend's bits are consumed from most to least significant:
    /// the running remainder shifts left, takes the next bit, and whenever
    /// it reaches the divisor a quotient bit is set and the divisor is
    /// subtracted.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((Self::new(), Self::new()));
        }
        match self.cmp(rhs) {
            std::cmp::Ordering::Less => return Ok((Self::new(), self.clone())),
            std::cmp::Ordering::Equal => return Ok((Self::one(), Self::new())),
            std::cmp::Ordering::Greater => {}
        }

        let mut quotient = Self::new();
        let mut remainder = Self::new();

        for i in (0..self.bits()).rev() {
            remainder <<= 1_usize;
            if self.bit(i) {
                remainder.set_bit(0, true);
            }
            if remainder >= *rhs {
                remainder.sub_in_place(rhs);
                quotient.set_bit(i, true);
            }
        }

        debug_assert!(remainder < *rhs);
        Ok((quotient, remainder))
    }
}

impl<D: Digit> AddAssign<&Natural<D>> for Natural<D> {
    fn add_assign(&mut self, rhs: &Natural<D>) {
        self.add_in_place(rhs);
    }
}

impl<D: Digit> AddAssign for Natural<D> {
    fn add_assign(&mut self, rhs: Natural<D>) {
        self.add_in_place(&rhs);
    }
}

impl<D: Digit> Add for &Natural<D> {
    type Output = Natural<D>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self.clone();
        sum.add_in_place(rhs);
        sum
    }
}

impl<D: Digit> Add for Natural<D> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_in_place(&rhs);
        self
    }
}

impl<D: Digit> Add<&Natural<D>> for Natural<D> {
    type Output = Self;

    fn add(mut self, rhs: &Natural<D>) -> Self::Output {
        self.add_in_place(rhs);
        self
    }
}

impl<D: Digit> SubAssign<&Natural<D>> for Natural<D> {
    /// # Panics
    ///
    /// Panics when `rhs > self`; use [`Natural::checked_sub`] or
    /// [`Natural::abs_diff`] when the ordering is not known.
    fn sub_assign(&mut self, rhs: &Natural<D>) {
        assert!(*self >= *rhs, "natural subtraction underflow");
        self.sub_in_place(rhs);
    }
}

impl<D: Digit> SubAssign for Natural<D> {
    fn sub_assign(&mut self, rhs: Natural<D>) {
        *self -= &rhs;
    }
}

impl<D: Digit> Sub for &Natural<D> {
    type Output = Natural<D>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut difference = self.clone();
        difference -= rhs;
        difference
    }
}

impl<D: Digit> Sub for Natural<D> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl<D: Digit> Sub<&Natural<D>> for Natural<D> {
    type Output = Self;

    fn sub(mut self, rhs: &Natural<D>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<D: Digit> Mul for &Natural<D> {
    type Output = Natural<D>;

    fn mul(self, rhs: Self) -> Self::Output {
        Natural::mul_ref(self, rhs)
    }
}

impl<D: Digit> Mul for Natural<D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Natural::mul_ref(&self, &rhs)
    }
}

impl<D: Digit> Mul<&Natural<D>> for Natural<D> {
    type Output = Self;

    fn mul(self, rhs: &Natural<D>) -> Self::Output {
        Natural::mul_ref(&self, rhs)
    }
}

impl<D: Digit> MulAssign<&Natural<D>> for Natural<D> {
    fn mul_assign(&mut self, rhs: &Natural<D>) {
        *self = Natural::mul_ref(self, rhs);
    }
}

impl<D: Digit> MulAssign for Natural<D> {
    fn mul_assign(&mut self, rhs: Natural<D>) {
        *self = Natural::mul_ref(self, &rhs);
    }
}

impl<D: Digit> Div for &Natural<D> {
    type Output = Natural<D>;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Natural::div_rem`] for a checked
    /// division.
    fn div(self, rhs: Self) -> Self::Output {
        let (quotient, _) = self.div_rem(rhs).expect("division by zero");
        quotient
    }
}

impl<D: Digit> Div for Natural<D> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl<D: Digit> Div<&Natural<D>> for Natural<D> {
    type Output = Self;

    fn div(self, rhs: &Natural<D>) -> Self::Output {
        &self / rhs
    }
}

impl<D: Digit> Rem for &Natural<D> {
    type Output = Natural<D>;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Natural::div_rem`] for a checked
    /// division.
    fn rem(self, rhs: Self) -> Self::Output {
        let (_, remainder) = self.div_rem(rhs).expect("division by zero");
        remainder
    }
}

impl<D: Digit> Rem for Natural<D> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl<D: Digit> Rem<&Natural<D>> for Natural<D> {
    type Output = Self;

    fn rem(self, rhs: &Natural<D>) -> Self::Output {
        &self % rhs
    }
}
