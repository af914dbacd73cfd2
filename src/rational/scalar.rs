//! # Operations with integer scalars
//!
//! A scalar acts as a rational with denominator one. Adding or subtracting a scalar keeps the
//! denominator as it is and does not reduce; multiplying and dividing by a scalar do reduce.
//!
//! Operators are implemented for every primitive integer type, so an unsuffixed literal operand
//! only gets its type at the end of inference. Calling a method directly on such an expression,
//! like `(x + 1).to_string()`, fails with "type annotations needed"; suffix the literal
//! (`x + 1_i32`) or bind the result to a `Rational` first.
use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_bigint::BigInt;

use crate::error::Result;
use crate::integer::IntoInteger;
use crate::rational::field::or_panic;
use crate::rational::Rational;

impl Rational {
    /// Add `value * denominator` to the numerator, or subtract it.
    fn shift(&mut self, value: &BigInt, subtract: bool) {
        let scaled = value * &self.denominator;
        if subtract {
            self.numerator -= scaled;
        } else {
            self.numerator += scaled;
        }
    }

    fn shifted(&self, value: &BigInt, subtract: bool) -> Self {
        let mut result = self.clone();
        result.shift(value, subtract);
        result
    }

    /// `value - self`, over the denominator of `self`.
    fn subtracted_from(&self, value: &BigInt) -> Self {
        Self {
            numerator: value * &self.denominator - &self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    fn scaled(&self, value: &BigInt) -> Self {
        let mut result = Self {
            numerator: &self.numerator * value,
            denominator: self.denominator.clone(),
        };
        result.canonicalize();
        result
    }

    fn divided_by(&self, value: &BigInt) -> Result<Self> {
        Self {
            numerator: self.numerator.clone(),
            denominator: &self.denominator * value,
        }.reduced()
    }

    /// `value / self`.
    fn dividing(&self, value: &BigInt) -> Result<Self> {
        Self {
            numerator: value * &self.denominator,
            denominator: self.numerator.clone(),
        }.reduced()
    }

    /// Add an integer-like value. The result keeps the denominator and is not reduced.
    ///
    /// # Errors
    ///
    /// A parse error when the value is text that isn't an integer.
    pub fn add_scalar(&self, value: impl IntoInteger) -> Result<Self> {
        Ok(self.shifted(&value.into_integer()?, false))
    }

    /// Subtract an integer-like value. The result keeps the denominator and is not reduced.
    ///
    /// # Errors
    ///
    /// A parse error when the value is text that isn't an integer.
    pub fn sub_scalar(&self, value: impl IntoInteger) -> Result<Self> {
        Ok(self.shifted(&value.into_integer()?, true))
    }

    /// Multiply by an integer-like value, reducing the result.
    ///
    /// # Errors
    ///
    /// A parse error when the value is text that isn't an integer.
    pub fn mul_scalar(&self, value: impl IntoInteger) -> Result<Self> {
        Ok(self.scaled(&value.into_integer()?))
    }

    /// Divide by an integer-like value, reducing the result.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` when the value is zero, or a parse error when the value is
    /// text that isn't an integer.
    pub fn div_scalar(&self, value: impl IntoInteger) -> Result<Self> {
        self.divided_by(&value.into_integer()?)
    }

    fn compare_integer(&self, value: Cow<'_, BigInt>) -> Ordering {
        self.compare(&Self::from_integer(value.into_owned()))
    }
}

/// Scalars that can be used as operands directly, because their conversion can't fail.
trait AsInteger {
    fn as_integer(&self) -> Cow<'_, BigInt>;
}

impl AsInteger for BigInt {
    fn as_integer(&self) -> Cow<'_, BigInt> {
        Cow::Borrowed(self)
    }
}

macro_rules! impl_as_integer_primitive {
    ($($t:ty),*) => {
        $(
            impl AsInteger for $t {
                fn as_integer(&self) -> Cow<'_, BigInt> {
                    Cow::Owned(BigInt::from(*self))
                }
            }
        )*
    }
}
impl_as_integer_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_scalar_field {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for Rational {
                type Output = Rational;

                fn add(mut self, rhs: $t) -> Self::Output {
                    self.shift(&rhs.as_integer(), false);
                    self
                }
            }

            impl Add<$t> for &Rational {
                type Output = Rational;

                fn add(self, rhs: $t) -> Self::Output {
                    self.shifted(&rhs.as_integer(), false)
                }
            }

            impl Add<Rational> for $t {
                type Output = Rational;

                fn add(self, mut rhs: Rational) -> Self::Output {
                    rhs.shift(&self.as_integer(), false);
                    rhs
                }
            }

            impl Add<&Rational> for $t {
                type Output = Rational;

                fn add(self, rhs: &Rational) -> Self::Output {
                    rhs.shifted(&self.as_integer(), false)
                }
            }

            impl AddAssign<$t> for Rational {
                fn add_assign(&mut self, rhs: $t) {
                    self.shift(&rhs.as_integer(), false);
                }
            }

            impl Sub<$t> for Rational {
                type Output = Rational;

                fn sub(mut self, rhs: $t) -> Self::Output {
                    self.shift(&rhs.as_integer(), true);
                    self
                }
            }

            impl Sub<$t> for &Rational {
                type Output = Rational;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.shifted(&rhs.as_integer(), true)
                }
            }

            impl Sub<Rational> for $t {
                type Output = Rational;

                fn sub(self, rhs: Rational) -> Self::Output {
                    rhs.subtracted_from(&self.as_integer())
                }
            }

            impl Sub<&Rational> for $t {
                type Output = Rational;

                fn sub(self, rhs: &Rational) -> Self::Output {
                    rhs.subtracted_from(&self.as_integer())
                }
            }

            impl SubAssign<$t> for Rational {
                fn sub_assign(&mut self, rhs: $t) {
                    self.shift(&rhs.as_integer(), true);
                }
            }

            impl Mul<$t> for Rational {
                type Output = Rational;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scaled(&rhs.as_integer())
                }
            }

            impl Mul<$t> for &Rational {
                type Output = Rational;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scaled(&rhs.as_integer())
                }
            }

            impl Mul<Rational> for $t {
                type Output = Rational;

                fn mul(self, rhs: Rational) -> Self::Output {
                    rhs.scaled(&self.as_integer())
                }
            }

            impl Mul<&Rational> for $t {
                type Output = Rational;

                fn mul(self, rhs: &Rational) -> Self::Output {
                    rhs.scaled(&self.as_integer())
                }
            }

            impl MulAssign<$t> for Rational {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = self.scaled(&rhs.as_integer());
                }
            }

            impl Div<$t> for Rational {
                type Output = Rational;

                fn div(self, rhs: $t) -> Self::Output {
                    or_panic(self.divided_by(&rhs.as_integer()))
                }
            }

            impl Div<$t> for &Rational {
                type Output = Rational;

                fn div(self, rhs: $t) -> Self::Output {
                    or_panic(self.divided_by(&rhs.as_integer()))
                }
            }

            impl Div<Rational> for $t {
                type Output = Rational;

                fn div(self, rhs: Rational) -> Self::Output {
                    or_panic(rhs.dividing(&self.as_integer()))
                }
            }

            impl Div<&Rational> for $t {
                type Output = Rational;

                fn div(self, rhs: &Rational) -> Self::Output {
                    or_panic(rhs.dividing(&self.as_integer()))
                }
            }

            impl DivAssign<$t> for Rational {
                fn div_assign(&mut self, rhs: $t) {
                    *self = or_panic(self.divided_by(&rhs.as_integer()));
                }
            }
        )*
    }
}
impl_scalar_field!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    BigInt, &BigInt
);

macro_rules! impl_scalar_ordering {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Rational {
                fn eq(&self, other: &$t) -> bool {
                    self.compare_integer(other.as_integer()) == Ordering::Equal
                }
            }

            impl PartialEq<Rational> for $t {
                fn eq(&self, other: &Rational) -> bool {
                    other.compare_integer(self.as_integer()) == Ordering::Equal
                }
            }

            impl PartialOrd<$t> for Rational {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.compare_integer(other.as_integer()))
                }
            }

            impl PartialOrd<Rational> for $t {
                fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
                    Some(other.compare_integer(self.as_integer()).reverse())
                }
            }
        )*
    }
}
impl_scalar_ordering!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);
