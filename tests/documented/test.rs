use bigratio::{BigInt, Rational, RationalError};

use super::{a, b, c, d};

#[test]
fn display() {
    assert_eq!(a().to_string(), "121211458858441234234/2223");
    assert_eq!(b().to_string(), "-11821/-212121221");
}

#[test]
fn arithmetic() {
    assert_eq!((a() * b()).to_string(), "1432840655165633829880114/471545474283");
    assert_eq!(
        (b() - c()).to_string(),
        "-10606061049999999999999999999999999999990679414985336365/1922017868328961",
    );
    assert_eq!((c() / d()).to_string(), "16666666666666666666666666666666666666652020202/100677121215451");
    assert_eq!((d() + a()).to_string(), "121211458932541233493/2223");
}

#[test]
fn in_place() {
    let mut x = a();
    x *= b();
    x /= b();
    assert_eq!(x, a());
    assert_eq!(x.to_string(), "121211458858441234234/2223");

    let mut y = d();
    y -= c();
    y += &c();
    assert_eq!(y.to_string(), "33333333/1");
}

#[test]
fn comparison() {
    assert!(!(a() < b()));
    assert!(b() < c());
    assert!(c() >= d());
    assert!(d() <= a());
    assert!(!(b() == d()));
    assert!(c() != d());
}

#[test]
fn scalars() {
    let x = Rational::from_scalar("121211458858441234234").unwrap();
    assert_eq!(x.to_string(), "121211458858441234234/1");
    assert!(x > a());

    assert_eq!(a().to_integer(), BigInt::from(54526072360972215_u64));
    assert_eq!(d().to_integer(), BigInt::from(33333333));
    assert_eq!(b().div_scalar("0"), Err(RationalError::DivisionByZero));
    assert_eq!(Rational::new(a().numer(), 0), Err(RationalError::InvalidDenominator));
}
