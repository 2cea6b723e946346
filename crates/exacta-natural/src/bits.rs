//! Bitwise operations, shifts and single-bit access.
//!
//! Length rules follow directly from the unbounded-width representation:
//! AND truncates to the shorter operand, OR and XOR extend to the longer,
//! and complement flips only the digits currently present. The complement
//! of canonical zero (the empty sequence) is therefore zero again.

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::digit::Digit;
use crate::natural::{DigitVec, Natural};

impl<D: Digit> Natural<D> {
    /// Reads the bit at `pos`. Bits past the end are zero.
    #[must_use]
    pub fn bit(&self, pos: usize) -> bool {
        let whole = pos / D::BITS as usize;
        let within = (pos % D::BITS as usize) as u32;

        match self.digits.get(whole) {
            Some(&digit) => (digit >> within) & D::ONE == D::ONE,
            None => false,
        }
    }

    /// Writes the bit at `pos`, growing the digit sequence when setting a
    /// bit beyond the current length.
    pub fn set_bit(&mut self, pos: usize, value: bool) {
        let whole = pos / D::BITS as usize;
        let within = (pos % D::BITS as usize) as u32;

        if whole >= self.digits.len() {
            if !value {
                return;
            }
            self.digits.resize(whole, D::ZERO);
            self.digits.push(D::ONE << within);
            return;
        }

        let mask = D::ONE << within;
        if value {
            self.digits[whole] = self.digits[whole] | mask;
        } else {
            self.digits[whole] = self.digits[whole] & !mask;
            self.normalize();
        }
    }
}

impl<D: Digit> BitAnd for &Natural<D> {
    type Output = Natural<D>;

    fn bitand(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Natural::new();
        }

        let len = self.digits.len().min(rhs.digits.len());
        let mut digits: DigitVec<D> = DigitVec::with_capacity(len);
        for i in 0..len {
            digits.push(self.digits[i] & rhs.digits[i]);
        }

        Natural::from_digits(digits)
    }
}

impl<D: Digit> BitOr for &Natural<D> {
    type Output = Natural<D>;

    fn bitor(self, rhs: Self) -> Self::Output {
        let (longest, shortest) = if self.digits.len() < rhs.digits.len() {
            (rhs, self)
        } else {
            (self, rhs)
        };

        let mut digits: DigitVec<D> = DigitVec::with_capacity(longest.digits.len());
        for (i, &digit) in longest.digits.iter().enumerate() {
            match shortest.digits.get(i) {
                Some(&other) => digits.push(digit | other),
                None => digits.push(digit),
            }
        }

        // OR cannot clear the top digit of the longer operand.
        Natural { digits }
    }
}

impl<D: Digit> BitXor for &Natural<D> {
    type Output = Natural<D>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let (longest, shortest) = if self.digits.len() < rhs.digits.len() {
            (rhs, self)
        } else {
            (self, rhs)
        };

        let mut digits: DigitVec<D> = DigitVec::with_capacity(longest.digits.len());
        for (i, &digit) in longest.digits.iter().enumerate() {
            match shortest.digits.get(i) {
                Some(&other) => digits.push(digit ^ other),
                None => digits.push(digit),
            }
        }

        Natural::from_digits(digits)
    }
}

impl<D: Digit> Not for &Natural<D> {
    type Output = Natural<D>;

    /// Flips every digit of the current representation. With no bounded
    /// width there is no implicit sign extension, so `!zero == zero`.
    fn not(self) -> Self::Output {
        let mut digits: DigitVec<D> = DigitVec::with_capacity(self.digits.len());
        for &digit in &self.digits {
            digits.push(!digit);
        }
        Natural::from_digits(digits)
    }
}

impl<D: Digit> Not for Natural<D> {
    type Output = Self;

    fn not(self) -> Self::Output {
        !&self
    }
}

impl<D: Digit> Shl<usize> for &Natural<D> {
    type Output = Natural<D>;

    fn shl(self, pos: usize) -> Self::Output {
        let mut shifted = self.clone();
        shifted <<= pos;
        shifted
    }
}

impl<D: Digit> Shl<usize> for Natural<D> {
    type Output = Self;

    fn shl(mut self, pos: usize) -> Self::Output {
        self <<= pos;
        self
    }
}

impl<D: Digit> ShlAssign<usize> for Natural<D> {
    fn shl_assign(&mut self, pos: usize) {
        if self.is_zero() || pos == 0 {
            return;
        }

        let whole = pos / D::BITS as usize;
        let within = (pos % D::BITS as usize) as u32;

        if within != 0 {
            let down = D::BITS - within;
            let mut carry = D::ZERO;
            for digit in &mut self.digits {
                let next_carry = *digit >> down;
                *digit = (*digit << within) | carry;
                carry = next_carry;
            }
            if carry != D::ZERO {
                self.digits.push(carry);
            }
        }

        self.digits.insert_many(0, std::iter::repeat(D::ZERO).take(whole));
    }
}

impl<D: Digit> Shr<usize> for &Natural<D> {
    type Output = Natural<D>;

    fn shr(self, pos: usize) -> Self::Output {
        let mut shifted = self.clone();
        shifted >>= pos;
        shifted
    }
}

impl<D: Digit> Shr<usize> for Natural<D> {
    type Output = Self;

    fn shr(mut self, pos: usize) -> Self::Output {
        self >>= pos;
        self
    }
}

impl<D: Digit> ShrAssign<usize> for Natural<D> {
    fn shr_assign(&mut self, pos: usize) {
        if self.is_zero() || pos == 0 {
            return;
        }

        let whole = pos / D::BITS as usize;
        if whole >= self.digits.len() {
            self.digits.clear();
            return;
        }
        self.digits.drain(..whole);

        let within = (pos % D::BITS as usize) as u32;
        if within != 0 {
            let up = D::BITS - within;
            for i in 0..self.digits.len() - 1 {
                self.digits[i] = (self.digits[i] >> within) | (self.digits[i + 1] << up);
            }
            let last = self.digits.len() - 1;
            self.digits[last] = self.digits[last] >> within;
            self.normalize();
        }
    }
}

macro_rules! forward_bit_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<D: Digit> $trait for Natural<D> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl<D: Digit> $trait<&Natural<D>> for Natural<D> {
            type Output = Self;

            fn $method(self, rhs: &Natural<D>) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl<D: Digit> $assign_trait<&Natural<D>> for Natural<D> {
            fn $assign_method(&mut self, rhs: &Natural<D>) {
                *self = $trait::$method(&*self, rhs);
            }
        }

        impl<D: Digit> $assign_trait for Natural<D> {
            fn $assign_method(&mut self, rhs: Natural<D>) {
                *self = $trait::$method(&*self, &rhs);
            }
        }
    };
}

forward_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);
