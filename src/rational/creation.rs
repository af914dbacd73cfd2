//! # Creation and conversion
//!
//! Conversions from integers and floats are exact. Conversions to primitives are not.
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Float, FromPrimitive, Signed, ToPrimitive, Zero};

use crate::error::{RationalError, Result};
use crate::rational::Rational;

macro_rules! impl_from_primitive_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::from_integer(BigInt::from(value))
                }
            }
        )*
    }
}
impl_from_primitive_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Self::from_integer(value.clone())
    }
}

/// Reads `"numerator/denominator"` or a plain integer, without reducing.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(text: &str) -> Result<Self> {
        match text.split_once('/') {
            Some((numerator, denominator)) => Self::new(numerator, denominator),
            None => Self::from_scalar(text),
        }
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }

    /// Exact value of the float; `None` for infinities and NaN.
    fn from_f64(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }

        let (mantissa, exponent, sign) = Float::integer_decode(n);
        let mut numerator = BigInt::from(mantissa);
        if sign < 0 {
            numerator = -numerator;
        }

        let mut value = if exponent < 0 {
            let denominator = BigInt::from(1) << exponent.unsigned_abs();
            Self { numerator, denominator }
        } else {
            Self::from_integer(numerator << exponent.unsigned_abs())
        };
        value.canonicalize();

        Some(value)
    }
}

impl ToPrimitive for Rational {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    /// Truncates toward zero.
    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer().to_u128()
    }

    /// Nearby float, from an integer quotient of about 64 significant bits.
    fn to_f64(&self) -> Option<f64> {
        let (numerator, denominator) = self.signed_parts();
        if numerator.is_zero() {
            return Some(0.0);
        }

        let magnitude = numerator.abs();
        let shift = SIGNIFICANT_BITS + denominator.bits() as i64 - magnitude.bits() as i64;
        let quotient = if shift >= 0 {
            (magnitude << shift.unsigned_abs()) / &denominator
        } else {
            magnitude / (&denominator << shift.unsigned_abs())
        };

        let value = scale_by_power_of_two(quotient.to_f64()?, -shift);
        Some(if numerator.is_negative() { -value } else { value })
    }
}

/// Bits kept in the integer quotient when converting to a float.
const SIGNIFICANT_BITS: i64 = 64;

/// `value * 2^exponent`, in steps so that no intermediate power over- or underflows.
fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
    const STEP: i64 = 1000;

    while exponent > STEP && value.is_finite() {
        value *= 2f64.powi(STEP as i32);
        exponent -= STEP;
    }
    while exponent < -STEP && value != 0.0 {
        value *= 2f64.powi(-STEP as i32);
        exponent += STEP;
    }

    value * 2f64.powi(exponent as i32)
}
