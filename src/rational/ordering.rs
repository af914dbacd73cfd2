//! # Ordering, equality and hashing
//!
//! All relations derive from a single comparison: the sign of the numerator of the (reduced)
//! difference. Because the difference has a positive denominator, that sign orders the values.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use num_bigint::Sign;

use crate::rational::Rational;

impl Rational {
    pub(super) fn compare(&self, other: &Self) -> Ordering {
        match (self - other).numerator.sign() {
            Sign::Minus => Ordering::Less,
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => Ordering::Greater,
        }
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Rational {
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Hashes the reduced form, so that equal values hash equally.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut reduced = self.clone();
        reduced.canonicalize();

        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}
