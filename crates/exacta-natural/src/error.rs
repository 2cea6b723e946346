//! Error types shared across the exacta workspace.

use thiserror::Error;

/// Errors reported by arithmetic operations and parsing.
///
/// Every failure in this workspace is deterministic and caused directly by
/// the caller's input; there is no fatal or unrecoverable class. Narrowing
/// conversions do not use this type at all, they report `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A divisor, modulus or denominator was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A requested string base fell outside the supported range.
    #[error("base {0} is outside the supported range 2..=64")]
    InvalidBase(u32),

    /// A character is not a valid digit in the requested base.
    #[error("invalid digit {ch:?} for base {base}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// The base it was parsed against.
        base: u32,
    },

    /// A numeric string was empty where a value was required.
    #[error("empty numeric string")]
    EmptyInput,
}
