//! The canonical digit-sequence representation.

use std::cmp::Ordering;

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::digit::Digit;

/// Digit storage. Two inline digits keep anything up to a double word off
/// the heap.
pub(crate) type DigitVec<D> = SmallVec<[D; 2]>;

/// An arbitrary precision natural number.
///
/// Digits are stored least-significant first over the radix `2^D::BITS`.
/// The sequence never ends in a zero digit; zero is the empty sequence.
/// Both invariants are re-established after every mutation, so two equal
/// values always have identical digit sequences.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Natural<D: Digit = u64> {
    pub(crate) digits: DigitVec<D>,
}

impl<D: Digit> Natural<D> {
    /// Creates a new natural equal to zero.
    #[must_use]
    pub fn new() -> Self {
        Self { digits: DigitVec::new() }
    }

    /// The natural number one.
    #[must_use]
    pub fn one() -> Self {
        let mut digits = DigitVec::new();
        digits.push(D::ONE);
        Self { digits }
    }

    /// Builds a natural from a raw digit sequence, stripping any
    /// most-significant zero digits.
    pub(crate) fn from_digits(digits: DigitVec<D>) -> Self {
        let mut n = Self { digits };
        n.normalize();
        n
    }

    /// Restores canonical form by removing most-significant zero digits.
    pub(crate) fn normalize(&mut self) {
        while let Some(&last) = self.digits.last() {
            if last != D::ZERO {
                break;
            }
            self.digits.pop();
        }
    }

    /// Returns the canonical little-endian digit sequence.
    ///
    /// The slice is empty for zero and never ends in a zero digit.
    #[must_use]
    pub fn digits(&self) -> &[D] {
        &self.digits
    }

    /// Number of digits in the canonical representation.
    #[must_use]
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    /// The least significant digit, or zero for the empty sequence.
    pub(crate) fn least_significant(&self) -> D {
        self.digits.first().copied().unwrap_or(D::ZERO)
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if this is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == D::ONE
    }

    /// Returns true if this is even. Zero is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Returns true if this is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.least_significant() & D::ONE == D::ONE
    }

    /// Resets the value to zero.
    pub fn set_zero(&mut self) {
        self.digits.clear();
    }

    /// Number of significant bits. Zero is reported as one bit wide, the
    /// width of its textual representation `"0"`.
    #[must_use]
    pub fn bits(&self) -> usize {
        match self.digits.last() {
            None => 1,
            Some(&top) => {
                self.digits.len() * D::BITS as usize - top.leading_zeros() as usize
            }
        }
    }

    /// Number of trailing zero bits. Zero has none.
    #[must_use]
    pub fn trailing_zeros(&self) -> usize {
        let mut count = 0;
        for &digit in &self.digits {
            if digit != D::ZERO {
                return count + digit.trailing_zeros() as usize;
            }
            count += D::BITS as usize;
        }
        count
    }

    /// Adds one in place, growing the sequence on carry out of the top
    /// digit.
    pub fn increment(&mut self) {
        for digit in &mut self.digits {
            let (sum, carry) = digit.carrying_add(D::ONE, false);
            *digit = sum;
            if !carry {
                return;
            }
        }
        self.digits.push(D::ONE);
    }

    /// Subtracts one in place. Does nothing when already zero, mirroring
    /// the unchecked subtraction precondition: callers on the zero
    /// boundary must handle it themselves.
    pub fn decrement(&mut self) {
        for digit in &mut self.digits {
            let (diff, borrow) = digit.borrowing_sub(D::ONE, false);
            *digit = diff;
            if !borrow {
                break;
            }
        }
        self.normalize();
    }
}

impl<D: Digit> Ord for Natural<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form has no leading zero digit, so more digits means
        // strictly larger.
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        for (lhs, rhs) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            match lhs.cmp(rhs) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl<D: Digit> PartialOrd for Natural<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Zero for Natural<D> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Natural::is_zero(self)
    }
}

impl<D: Digit> One for Natural<D> {
    fn one() -> Self {
        Natural::one()
    }

    fn is_one(&self) -> bool {
        Natural::is_one(self)
    }
}
