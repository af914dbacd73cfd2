//! # Exact rational numbers
//!
//! Fractions of arbitrary precision integers with exact arithmetic. Integers come from
//! `num_bigint`; this crate adds the fraction on top: construction, reduction to lowest terms,
//! the field operations (also with integer operands on either side), a total order and hashing
//! that agrees with equality.
#![warn(missing_docs)]

pub use num_bigint::BigInt;

pub use error::{RationalError, Result};
pub use integer::IntoInteger;
pub use rational::Rational;

pub mod error;
pub mod integer;
pub mod rational;
