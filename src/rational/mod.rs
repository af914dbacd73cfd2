//! # Arbitrary precision rational numbers
//!
//! A `Rational` is a numerator and denominator pair of `BigInt`s. Values are not kept in lowest
//! terms between every step: products, quotients and sums of two rationals are reduced before
//! they are returned, but adding an integer to (or subtracting it from) a rational leaves the
//! denominator as it was. Equality, ordering and hashing only look at the value, so this is
//! visible only through `numer`, `denom` and `Display`.
use std::fmt;
use std::mem;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, Result};
use crate::integer::{gcd, IntoInteger};

mod creation;
mod field;
mod scalar;
mod ordering;
mod macros;

/// An exact fraction of two arbitrary precision integers.
///
/// The denominator is never zero. After `reduce`, the numerator and denominator are coprime and
/// the denominator is positive.
#[derive(Clone, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Create a new instance from a numerator and a denominator, without reducing.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer-like value, see `IntoInteger`.
    /// * `denominator`: Any integer-like value, see `IntoInteger`.
    ///
    /// # Errors
    ///
    /// `RationalError::InvalidDenominator` when the denominator equals zero, or a parse error when
    /// either part is text that isn't an integer.
    pub fn new(numerator: impl IntoInteger, denominator: impl IntoInteger) -> Result<Self> {
        let numerator = numerator.into_integer()?;
        let denominator = denominator.into_integer()?;

        if denominator.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }

        Ok(Self { numerator, denominator })
    }

    /// Wrap an integer-like value as a rational with denominator one.
    ///
    /// # Errors
    ///
    /// A parse error when the value is text that isn't an integer.
    pub fn from_scalar(value: impl IntoInteger) -> Result<Self> {
        value.into_integer().map(Self::from_integer)
    }

    pub(crate) fn from_integer(value: BigInt) -> Self {
        Self { numerator: value, denominator: BigInt::one() }
    }

    /// Numerator as currently stored, which need not be in lowest terms.
    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator as currently stored; nonzero, but possibly negative when not reduced.
    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    /// Take the numerator and denominator out.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Rewrite to lowest terms with a positive denominator, in place.
    ///
    /// Reducing a reduced value changes nothing.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if the denominator is zero. The value is then left as it
    /// was.
    pub fn reduce(&mut self) -> Result<()> {
        if self.denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        self.canonicalize();
        Ok(())
    }

    /// Consuming variant of `reduce`.
    pub fn reduced(mut self) -> Result<Self> {
        self.reduce()?;
        Ok(self)
    }

    /// Reduce, assuming a nonzero denominator.
    fn canonicalize(&mut self) {
        debug_assert!(!self.denominator.is_zero());

        let divisor = gcd(&self.numerator, &self.denominator);
        if self.denominator.is_negative() {
            self.numerator = -mem::take(&mut self.numerator);
            self.denominator = -mem::take(&mut self.denominator);
        }
        if !divisor.is_one() {
            self.numerator /= &divisor;
            self.denominator /= &divisor;
        }
    }

    /// Whether the value is in lowest terms with a positive denominator.
    pub fn is_reduced(&self) -> bool {
        self.denominator.is_positive() && gcd(&self.numerator, &self.denominator).is_one()
    }

    /// Whether the value is a whole number.
    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Quotient of numerator and denominator, truncated toward zero.
    ///
    /// The remainder is discarded, so `-7/2` becomes `-3`.
    pub fn to_integer(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Largest integer not greater than the value.
    pub fn floor(&self) -> BigInt {
        let (numerator, denominator) = self.signed_parts();
        Integer::div_floor(&numerator, &denominator)
    }

    /// Smallest integer not less than the value.
    pub fn ceil(&self) -> BigInt {
        let (numerator, denominator) = self.signed_parts();
        -Integer::div_floor(&-numerator, &denominator)
    }

    /// Numerator and denominator with the sign moved onto the numerator.
    fn signed_parts(&self) -> (BigInt, BigInt) {
        if self.denominator.is_negative() {
            (-&self.numerator, -&self.denominator)
        } else {
            (self.numerator.clone(), self.denominator.clone())
        }
    }

    /// Swap numerator and denominator.
    ///
    /// The new denominator carries the sign of the old numerator. The result is not reduced.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` when the value is zero.
    pub fn reciprocal(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(Self { numerator: self.denominator.clone(), denominator: self.numerator.clone() })
    }

    /// In place variant of `reciprocal`; on error, the value is unchanged.
    pub fn invert(&mut self) -> Result<()> {
        if self.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        mem::swap(&mut self.numerator, &mut self.denominator);
        Ok(())
    }

    /// Absolute values of both numerator and denominator.
    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.abs() }
    }

    /// Sign of the value, regardless of where the stored sign sits.
    pub fn sign(&self) -> Sign {
        self.numerator.sign() * self.denominator.sign()
    }

    /// Whether the value is larger than zero.
    pub fn is_positive(&self) -> bool {
        self.sign() == Sign::Plus
    }

    /// Whether the value is smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
