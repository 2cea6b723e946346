//! # Exacta
//!
//! Arbitrary precision arithmetic with exact semantics.
//!
//! Three number types, each built on the one below:
//!
//! - **[`Natural`](exacta_natural::Natural)**: unsigned, a canonical
//!   little-endian digit sequence generic over the digit width
//! - **[`Integer`](exacta_integers::Integer)**: a sign paired with a
//!   natural magnitude
//! - **[`Rational`](exacta_rational::Rational)**: a fully reduced
//!   fraction with exact conversions to and from IEEE 754 floats
//!
//! The [`calc`](exacta_integers::calc) module adds binary GCD, integer
//! square roots and (modular) exponentiation on top.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exacta::prelude::*;
//!
//! let a: Natural = "123456789123456789".parse()?;
//! let b = Natural::from(987_654_321_u64);
//! let g = calc::gcd(a, b);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_integers as integers;
pub use exacta_natural as natural;
pub use exacta_rational as rational;

pub use exacta_integers::calc;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_integers::{calc, Integer, Sign};
    pub use exacta_natural::{Digit, Error, NativeInt, Natural};
    pub use exacta_rational::{Float, Rational};
}
