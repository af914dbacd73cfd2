//! # Field operations between rationals
//!
//! Sums, differences, products and quotients of two rationals are reduced before returning.
use num_traits::Zero;

use crate::error::Result;
use crate::integer::lcm;
use crate::rational::Rational;

impl Rational {
    /// Sum or difference over the least common multiple of both denominators.
    fn combine(&self, rhs: &Self, subtract: bool) -> Self {
        let common = lcm(&self.denominator, &rhs.denominator);
        let left = &common / &self.denominator * &self.numerator;
        let right = &common / &rhs.denominator * &rhs.numerator;
        let numerator = if subtract { left - right } else { left + right };

        let mut result = Self { numerator, denominator: common };
        result.canonicalize();
        result
    }

    fn multiply(&self, rhs: &Self) -> Self {
        let mut result = Self {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        };
        result.canonicalize();
        result
    }

    /// Divide by another rational.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` when `rhs` equals zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Self {
            numerator: &self.numerator * &rhs.denominator,
            denominator: &self.denominator * &rhs.numerator,
        }.reduced()
    }
}

/// Unwrap the result of a division for the operator traits, which can't report errors.
pub(super) fn or_panic(result: Result<Rational>) -> Rational {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}

mod add {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign};

    use num_traits::Zero;

    use crate::rational::Rational;

    impl Add for Rational {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            self.combine(&rhs, false)
        }
    }

    impl Add<&Rational> for Rational {
        type Output = Self;

        fn add(self, rhs: &Self) -> Self::Output {
            self.combine(rhs, false)
        }
    }

    impl Add<Rational> for &Rational {
        type Output = Rational;

        fn add(self, rhs: Rational) -> Self::Output {
            self.combine(&rhs, false)
        }
    }

    impl Add for &Rational {
        type Output = Rational;

        fn add(self, rhs: Self) -> Self::Output {
            self.combine(rhs, false)
        }
    }

    impl AddAssign<Rational> for Rational {
        fn add_assign(&mut self, rhs: Self) {
            *self = self.combine(&rhs, false);
        }
    }

    impl AddAssign<&Rational> for Rational {
        fn add_assign(&mut self, rhs: &Self) {
            *self = self.combine(rhs, false);
        }
    }

    impl Sum for Rational {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<'a> Sum<&'a Rational> for Rational {
        fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }
}

mod sub {
    use std::ops::{Sub, SubAssign};

    use crate::rational::Rational;

    impl Sub for Rational {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            self.combine(&rhs, true)
        }
    }

    impl Sub<&Rational> for Rational {
        type Output = Self;

        fn sub(self, rhs: &Self) -> Self::Output {
            self.combine(rhs, true)
        }
    }

    impl Sub<Rational> for &Rational {
        type Output = Rational;

        fn sub(self, rhs: Rational) -> Self::Output {
            self.combine(&rhs, true)
        }
    }

    impl Sub for &Rational {
        type Output = Rational;

        fn sub(self, rhs: Self) -> Self::Output {
            self.combine(rhs, true)
        }
    }

    impl SubAssign<Rational> for Rational {
        fn sub_assign(&mut self, rhs: Self) {
            *self = self.combine(&rhs, true);
        }
    }

    impl SubAssign<&Rational> for Rational {
        fn sub_assign(&mut self, rhs: &Self) {
            *self = self.combine(rhs, true);
        }
    }
}

mod mul {
    use std::iter::Product;
    use std::ops::{Mul, MulAssign};

    use num_traits::One;

    use crate::rational::Rational;

    impl Mul for Rational {
        type Output = Self;

        fn mul(self, rhs: Self) -> Self::Output {
            self.multiply(&rhs)
        }
    }

    impl Mul<&Rational> for Rational {
        type Output = Self;

        fn mul(self, rhs: &Self) -> Self::Output {
            self.multiply(rhs)
        }
    }

    impl Mul<Rational> for &Rational {
        type Output = Rational;

        fn mul(self, rhs: Rational) -> Self::Output {
            self.multiply(&rhs)
        }
    }

    impl Mul for &Rational {
        type Output = Rational;

        fn mul(self, rhs: Self) -> Self::Output {
            self.multiply(rhs)
        }
    }

    impl MulAssign<Rational> for Rational {
        fn mul_assign(&mut self, rhs: Self) {
            *self = self.multiply(&rhs);
        }
    }

    impl MulAssign<&Rational> for Rational {
        fn mul_assign(&mut self, rhs: &Self) {
            *self = self.multiply(rhs);
        }
    }

    impl Product for Rational {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }

    impl<'a> Product<&'a Rational> for Rational {
        fn product<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }
}

mod div {
    use std::ops::{Div, DivAssign};

    use crate::rational::field::or_panic;
    use crate::rational::Rational;

    impl Div<Rational> for Rational {
        type Output = Self;

        fn div(self, rhs: Self) -> Self::Output {
            or_panic(self.checked_div(&rhs))
        }
    }

    impl Div<&Rational> for Rational {
        type Output = Self;

        fn div(self, rhs: &Self) -> Self::Output {
            or_panic(self.checked_div(rhs))
        }
    }

    impl Div<Rational> for &Rational {
        type Output = Rational;

        fn div(self, rhs: Rational) -> Self::Output {
            or_panic(self.checked_div(&rhs))
        }
    }

    impl Div for &Rational {
        type Output = Rational;

        fn div(self, rhs: Self) -> Self::Output {
            or_panic(self.checked_div(rhs))
        }
    }

    impl DivAssign<Rational> for Rational {
        fn div_assign(&mut self, rhs: Self) {
            *self = or_panic(self.checked_div(&rhs));
        }
    }

    impl DivAssign<&Rational> for Rational {
        fn div_assign(&mut self, rhs: &Self) {
            *self = or_panic(self.checked_div(rhs));
        }
    }
}

mod neg {
    use std::ops::Neg;

    use crate::rational::Rational;

    /// Only the numerator changes sign; nothing is reduced.
    impl Neg for Rational {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self { numerator: -self.numerator, denominator: self.denominator }
        }
    }

    impl Neg for &Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational { numerator: -&self.numerator, denominator: self.denominator.clone() }
        }
    }
}

mod identities {
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    use crate::rational::Rational;

    impl Zero for Rational {
        fn zero() -> Self {
            Self::from_integer(BigInt::zero())
        }

        fn set_zero(&mut self) {
            *self = Self::zero();
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl One for Rational {
        fn one() -> Self {
            Self::from_integer(BigInt::one())
        }

        fn set_one(&mut self) {
            *self = Self::one();
        }

        fn is_one(&self) -> bool {
            self.numerator == self.denominator
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}
