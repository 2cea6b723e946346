//! # exacta-natural
//!
//! Arbitrary precision natural numbers for the exacta workspace.
//!
//! This crate provides the digit-level arithmetic engine everything else
//! builds on:
//! - [`Natural`]: a canonical little-endian digit sequence over a generic
//!   digit type (`u64` by default)
//! - [`Digit`]: the digit abstraction, parameterising the digit width and
//!   the wide intermediate type used for digit-pair products
//! - base 2..=64 string conversion, bit access, narrowing conversions and
//!   random generation
//!
//! ## Representation
//!
//! A `Natural` never stores a most-significant zero digit; zero is the
//! empty sequence. Every operation returns values in this canonical form,
//! so equality and hashing are plain structural comparisons.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod bits;
pub mod convert;
pub mod digit;
pub mod error;
pub mod natural;
pub mod random;

#[cfg(test)]
mod proptests;

pub use convert::NativeInt;
pub use digit::Digit;
pub use error::Error;
pub use natural::Natural;
