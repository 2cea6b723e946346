//! The sign flag shared by the signed numeric types.

use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Sign of a signed value.
///
/// Canonical zero is always `Positive`; the types carrying a `Sign`
/// enforce that after every mutation, so there is no negative zero.
/// The variant order makes the derived ordering numeric:
/// `Negative < Positive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Zero or greater.
    #[default]
    Positive,
}

impl Sign {
    /// Returns true for [`Sign::Negative`].
    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Self::Negative
    }

    /// Sign of a product or quotient of two values with these signs.
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        if self == other {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Builds a sign from a negative flag.
    #[must_use]
    pub fn from_negative(negative: bool) -> Self {
        if negative {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

impl Not for Sign {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

// Bit combination treats Negative as the set bit, mirroring how the
// bitwise operators on Integer and Rational combine their sign flags.

impl BitAnd for Sign {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_negative(self.is_negative() & rhs.is_negative())
    }
}

impl BitOr for Sign {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_negative(self.is_negative() | rhs.is_negative())
    }
}

impl BitXor for Sign {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_negative(self.is_negative() ^ rhs.is_negative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_matches_product_signs() {
        assert_eq!(Sign::Positive.xor(Sign::Positive), Sign::Positive);
        assert_eq!(Sign::Negative.xor(Sign::Negative), Sign::Positive);
        assert_eq!(Sign::Positive.xor(Sign::Negative), Sign::Negative);
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(Sign::Negative < Sign::Positive);
        assert_eq!(Sign::default(), Sign::Positive);
    }

    #[test]
    fn bit_combination_treats_negative_as_set() {
        assert_eq!(Sign::Negative & Sign::Negative, Sign::Negative);
        assert_eq!(Sign::Negative & Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Negative | Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative ^ Sign::Negative, Sign::Positive);
        assert_eq!(!Sign::Positive, Sign::Negative);
    }
}
