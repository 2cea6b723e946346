//! # exacta-rational
//!
//! Arbitrary precision rational numbers, always stored fully reduced.
//!
//! A [`Rational`] is a sign, a numerator and a denominator; the
//! numerator and denominator are coprime and the denominator is never
//! zero, re-established after every operation. The [`float`] module
//! carries the exact conversions between rationals and IEEE 754
//! binary floats.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod float;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use exacta_integers::{Integer, Sign};
pub use exacta_natural::{Digit, Error, Natural};
pub use float::Float;
pub use rational::Rational;
