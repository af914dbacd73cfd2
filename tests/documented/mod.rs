//! # Documented usage
//!
//! Four values that exercise large numerators, negative denominators and reduction.
use bigratio::{Rational, RB};

#[allow(missing_docs)]
mod test;

fn a() -> Rational {
    RB!("121211458858441234234", 2223)
}

fn b() -> Rational {
    RB!(-11821, -212121221)
}

fn c() -> Rational {
    RB!("99999999999999999999999999999999999999912121212", 18121882)
}

fn d() -> Rational {
    RB!(99999999, 3)
}
