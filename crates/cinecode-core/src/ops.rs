//! Timecode arithmetic.
//!
//! Results keep the left operand's framerate. Addition and subtraction work
//! on exact seconds; division works on whole frames so its results always
//! land on a frame.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::rate::Framerate;
use crate::rational::{self, Rational};
use crate::timecode::Timecode;

impl Timecode {
    /// Multiply the real-world duration by `scalar`, rounding to the nearest
    /// frame.
    pub fn mul_scalar(&self, scalar: &Rational) -> Self {
        Self::from_seconds(&(self.seconds_ref() * scalar), self.rate())
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Floor-divide the frame count by `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_floor(&self, divisor: &Rational) -> Self {
        self.div_mod(divisor).0
    }

    /// Floor-divide the frame count by `divisor`, returning the quotient and
    /// the remainder as timecodes at this rate.
    ///
    /// A fractional remainder (possible with a fractional divisor) is rounded
    /// to the nearest frame, so `quotient * divisor + remainder` only
    /// reproduces `self` exactly for whole-number divisors.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_mod(&self, divisor: &Rational) -> (Self, Self) {
        let rate = self.rate();
        let (quotient, remainder) =
            rational::floor_div_mod(&rational::integer(self.frames()), divisor);

        let quotient = Self::from_frames(rational::integer_to_i64(&quotient), rate);
        let remainder = Self::from_frames(
            rational::integer_to_i64(&rational::round_to_integer(&remainder)),
            rate,
        );
        (quotient, remainder)
    }

    /// The remainder of [`Timecode::div_mod`].
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn modulo(&self, divisor: &Rational) -> Self {
        self.div_mod(divisor).1
    }

    /// Keep the frame count and move it to `rate`.
    ///
    /// The real-world seconds change with the new playback speed:
    /// `01:00:00:00` at 119.88 rebased to 59.94 becomes `02:00:00:00`.
    pub fn rebase(&self, rate: Framerate) -> Self {
        Self::from_frames(self.frames(), rate)
    }
}

impl Add<&Timecode> for &Timecode {
    type Output = Timecode;

    fn add(self, rhs: &Timecode) -> Timecode {
        Timecode::from_seconds(&(self.seconds_ref() + rhs.seconds_ref()), self.rate())
    }
}

impl Add for Timecode {
    type Output = Timecode;

    fn add(self, rhs: Timecode) -> Timecode {
        &self + &rhs
    }
}

impl Sub<&Timecode> for &Timecode {
    type Output = Timecode;

    fn sub(self, rhs: &Timecode) -> Timecode {
        Timecode::from_seconds(&(self.seconds_ref() - rhs.seconds_ref()), self.rate())
    }
}

impl Sub for Timecode {
    type Output = Timecode;

    fn sub(self, rhs: Timecode) -> Timecode {
        &self - &rhs
    }
}

impl Neg for &Timecode {
    type Output = Timecode;

    fn neg(self) -> Timecode {
        Timecode::from_parts(-self.seconds_ref(), self.rate())
    }
}

impl Neg for Timecode {
    type Output = Timecode;

    fn neg(self) -> Timecode {
        -&self
    }
}

impl Mul<i64> for &Timecode {
    type Output = Timecode;

    fn mul(self, rhs: i64) -> Timecode {
        self.mul_scalar(&rational::integer(rhs))
    }
}

impl Mul<i64> for Timecode {
    type Output = Timecode;

    fn mul(self, rhs: i64) -> Timecode {
        &self * rhs
    }
}

impl Div<i64> for &Timecode {
    type Output = Timecode;

    fn div(self, rhs: i64) -> Timecode {
        self.div_floor(&rational::integer(rhs))
    }
}

impl Div<i64> for Timecode {
    type Output = Timecode;

    fn div(self, rhs: i64) -> Timecode {
        &self / rhs
    }
}

impl Rem<i64> for &Timecode {
    type Output = Timecode;

    fn rem(self, rhs: i64) -> Timecode {
        self.modulo(&rational::integer(rhs))
    }
}

impl Rem<i64> for Timecode {
    type Output = Timecode;

    fn rem(self, rhs: i64) -> Timecode {
        &self % rhs
    }
}
