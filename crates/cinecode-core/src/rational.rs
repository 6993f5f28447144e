//! Exact rational helpers.
//!
//! Seconds, ticks and scalars are arbitrary-precision [`BigRational`] values so
//! that long chains of add/sub/rebase never drift. Framerates stay small and
//! use [`Rational64`]; the helpers here bridge the two.

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};
use num_traits::{Signed, ToPrimitive, Zero};

/// Arbitrary-precision rational used for seconds and scalar operands.
pub type Rational = BigRational;

/// Build an exact rational from a numerator and denominator.
///
/// # Panics
///
/// Panics if `denominator` is zero.
pub fn rational(numerator: i64, denominator: i64) -> Rational {
    BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
}

/// Build an integer-valued rational.
pub fn integer(value: i64) -> Rational {
    BigRational::from_integer(BigInt::from(value))
}

/// Round to the nearest integer-valued rational. Halves round away from zero,
/// so `1/2` becomes `1` and `5/2` becomes `3`.
pub fn round_to_integer(value: &Rational) -> Rational {
    value.round()
}

/// Floor division with remainder: `q = floor(x / y)` and `r = x - q * y`.
///
/// The quotient rounds toward negative infinity, not toward zero, so
/// `floor_div_mod(-7, 2)` is `(-4, 1)`.
///
/// # Panics
///
/// Panics if `y` is zero.
pub fn floor_div_mod(x: &Rational, y: &Rational) -> (Rational, Rational) {
    assert!(!y.is_zero(), "floor_div_mod divisor cannot be zero");
    let quotient = (x / y).floor();
    let remainder = x - &quotient * y;
    (quotient, remainder)
}

/// Collapse an integer-valued rational into an `i64`, saturating at the `i64`
/// bounds. Fractional values are truncated toward zero.
pub fn integer_to_i64(value: &Rational) -> i64 {
    value.to_integer().to_i64().unwrap_or(if value.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Widen a framerate-sized rational, reducing it on the way.
pub fn from_rational64(value: Rational64) -> Rational {
    BigRational::new(BigInt::from(*value.numer()), BigInt::from(*value.denom()))
}

/// Narrow to a framerate-sized rational, if it fits.
pub fn to_rational64(value: &Rational) -> Option<Rational64> {
    let numer = value.numer().to_i64()?;
    let denom = value.denom().to_i64()?;
    // Already reduced and sign-normalized by BigRational.
    Some(Rational64::new_raw(numer, denom))
}

/// Parse an unsigned decimal literal like `"03.5"` or `"12"` exactly.
pub fn parse_decimal(text: &str) -> Option<Rational> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.ends_with('.') {
        return None;
    }

    let digits = format!("{whole}{fraction}");
    let numer = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    Some(BigRational::new(numer, denom))
}

/// `10^places` as a rational.
pub(crate) fn power_of_ten(places: usize) -> Rational {
    BigRational::from_integer(num_traits::pow(BigInt::from(10), places))
}
