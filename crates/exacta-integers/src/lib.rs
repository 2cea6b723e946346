//! # exacta-integers
//!
//! Signed arbitrary precision integers for the exacta workspace.
//!
//! [`Integer`] pairs a [`Sign`] with a [`Natural`](exacta_natural::Natural)
//! magnitude; every binary operation case-splits on the two signs and
//! delegates the digit work to the magnitude. The [`calc`] module collects
//! the number-theoretic algorithms (binary GCD, integer square root,
//! exponentiation by squaring, modular exponentiation) that operate on
//! both layers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calc;
pub mod integer;
pub mod sign;

#[cfg(test)]
mod proptests;

pub use exacta_natural::{Digit, Error, Natural};
pub use integer::Integer;
pub use sign::Sign;
