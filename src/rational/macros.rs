/// Shorthand for creating a rational number.
///
/// `RB!(value)` wraps an integer-like value, `RB!(numerator, denominator)` creates a fraction
/// without reducing it.
///
/// # Panics
///
/// When the denominator is zero or text can't be read as an integer. Use `Rational::new` to get
/// these as errors instead.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        match $crate::Rational::from_scalar($value) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
    ($numer:expr, $denom:expr) => {
        match $crate::Rational::new($numer, $denom) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
}
