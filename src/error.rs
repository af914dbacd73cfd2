//! # Error reporting
//!
//! All failures are input errors: they are reported at the call that triggered them and are never
//! replaced by a default value.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Result of a fallible operation on rational numbers.
pub type Result<T> = std::result::Result<T, RationalError>;

/// A `RationalError` describes why an arithmetic or construction step could not complete.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RationalError {
    /// A rational number was constructed with a denominator equal to zero.
    ///
    /// No value is produced for the failed construction.
    InvalidDenominator,
    /// A denominator of zero was found while reducing, or the reciprocal of zero was requested.
    ///
    /// Arithmetic only produces this when dividing by a value equal to zero.
    DivisionByZero,
    /// Text could not be read as an integer or as a `"numerator/denominator"` pair.
    ///
    /// The contained `String` is a message for the end user.
    Parse(String),
}

impl RationalError {
    /// Create a `Parse` error describing the text that was rejected.
    pub(crate) fn parse(text: &str, reason: impl Display) -> Self {
        RationalError::Parse(format!("Failed to parse \"{}\": {}", text, reason))
    }
}

impl Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RationalError::InvalidDenominator => f.write_str("InvalidDenominator: denominator is zero"),
            RationalError::DivisionByZero => f.write_str("DivisionByZero: attempt to divide by zero"),
            RationalError::Parse(message) => write!(f, "ParseError: {}", message),
        }
    }
}

impl Error for RationalError {
}
