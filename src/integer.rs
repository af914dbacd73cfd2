//! # Integer operations
//!
//! The arbitrary precision integer itself is supplied by `num_bigint`. This module holds the
//! single conversion boundary through which all integer-like inputs enter the crate, and the
//! divisibility helpers the rational type is built on.
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::{RationalError, Result};

/// Values that can act as an integer: primitive integers, decimal text and `BigInt`s.
///
/// Every numerator, denominator and scalar operand is converted through this trait before any
/// arithmetic happens.
pub trait IntoInteger {
    /// Convert into an arbitrary precision integer.
    ///
    /// # Errors
    ///
    /// Only text can fail to convert, with a `RationalError::Parse`.
    fn into_integer(self) -> Result<BigInt>;
}

macro_rules! impl_into_integer_primitive {
    ($($t:ty),*) => {
        $(
            impl IntoInteger for $t {
                fn into_integer(self) -> Result<BigInt> {
                    Ok(BigInt::from(self))
                }
            }
        )*
    }
}
impl_into_integer_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoInteger for BigInt {
    fn into_integer(self) -> Result<BigInt> {
        Ok(self)
    }
}

impl IntoInteger for &BigInt {
    fn into_integer(self) -> Result<BigInt> {
        Ok(self.clone())
    }
}

impl IntoInteger for &str {
    fn into_integer(self) -> Result<BigInt> {
        let trimmed = self.trim();
        BigInt::from_str(trimmed).map_err(|error| RationalError::parse(self, error))
    }
}

impl IntoInteger for String {
    fn into_integer(self) -> Result<BigInt> {
        self.as_str().into_integer()
    }
}

impl IntoInteger for &String {
    fn into_integer(self) -> Result<BigInt> {
        self.as_str().into_integer()
    }
}

/// Greatest common divisor of the absolute values, by repeated remainder and swap.
///
/// `gcd(x, 0) == |x|`, and `gcd(0, 0) == 0`.
pub fn gcd(left: &BigInt, right: &BigInt) -> BigInt {
    let mut current = left.abs();
    let mut next = right.abs();

    while !next.is_zero() {
        let remainder = &current % &next;
        current = next;
        next = remainder;
    }

    current
}

/// Least common multiple, as `x * y / gcd(x, y)`.
///
/// The sign follows that of the product `x * y`.
///
/// # Arguments
///
/// * `left`, `right`: Nonzero integers.
pub fn lcm(left: &BigInt, right: &BigInt) -> BigInt {
    debug_assert!(!left.is_zero() && !right.is_zero());

    left * right / gcd(left, right)
}
