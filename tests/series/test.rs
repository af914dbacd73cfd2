use num_traits::ToPrimitive;

use bigratio::{Rational, RB};

use super::{euler, harmonic};

#[test]
fn harmonic_numbers() {
    assert_eq!(harmonic(1), RB!(1));
    assert_eq!(harmonic(4).to_string(), "25/12");
    assert_eq!(harmonic(20).to_string(), "55835135/15519504");
    assert!(harmonic(20).is_reduced());
}

#[test]
fn telescoping() {
    let total: Rational = (1..=100_u64).map(|k| Rational::from(1) / (k * (k + 1))).sum();
    assert_eq!(total.to_string(), "100/101");
}

#[test]
fn approaches_e() {
    let partial = euler(30);
    assert_eq!(
        partial.to_string(),
        "55464002213405654539818183437977/20404066139399312202792960000000",
    );
    assert!(partial < RB!(2718281828459045236_u64, 1_000_000_000_000_000_000_u64));
    assert!(partial > RB!(2718281828459045235_u64, 1_000_000_000_000_000_000_u64));

    let approximation = partial.to_f64().unwrap();
    assert!((approximation - std::f64::consts::E).abs() < 1e-14);
}
