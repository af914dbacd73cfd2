//! # Partial sums of series
//!
//! Sums whose denominators quickly outgrow every primitive integer type.
use bigratio::{BigInt, Rational};

#[allow(missing_docs)]
mod test;

/// Harmonic number `1 + 1/2 + ... + 1/n`.
fn harmonic(n: u32) -> Rational {
    (1..=n).map(|k| Rational::from(1) / k).sum()
}

/// Partial sum `1/0! + 1/1! + ... + 1/n!` of the series for `e`.
fn euler(n: u32) -> Rational {
    let mut factorial = BigInt::from(1);
    let mut total = Rational::from(1);
    for k in 1..=n {
        factorial *= k;
        total += Rational::from(1) / &factorial;
    }
    total
}
