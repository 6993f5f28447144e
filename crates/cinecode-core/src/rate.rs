//! Framerates for frame-accurate timecode.
//!
//! A [`Framerate`] carries two speeds. The *playback* is the real-world number
//! of frames per second (24000/1001 for 23.98 NTSC) and drives duration math.
//! The *timebase* is the whole number of frames per second that timecode is
//! displayed in (24 for 23.98 NTSC) and drives display math.

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{CinecodeError, ParseTarget, Result};
use crate::rational::{self, Rational};

/// Which NTSC convention, if any, a framerate follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ntsc {
    /// A true framerate: playback and timebase are the same.
    #[default]
    None,
    /// NTSC playback (`timebase * 1000/1001`) without frame-number skipping.
    NonDrop,
    /// NTSC playback with drop-frame timecode numbering.
    Drop,
}

impl Ntsc {
    /// Whether this is one of the NTSC conventions.
    #[inline]
    pub fn is_ntsc(self) -> bool {
        matches!(self, Self::NonDrop | Self::Drop)
    }
}

impl fmt::Display for Ntsc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "fps",
            Self::NonDrop => "NTSC NDF",
            Self::Drop => "NTSC DF",
        })
    }
}

impl FromStr for Ntsc {
    type Err = CinecodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fps" => Ok(Self::None),
            "NTSC NDF" => Ok(Self::NonDrop),
            "NTSC DF" => Ok(Self::Drop),
            _ => Err(CinecodeError::format(ParseTarget::Ntsc, s)),
        }
    }
}

/// Maps the integer tags used by external metadata (`0`, `1`, `2`).
impl TryFrom<i64> for Ntsc {
    type Error = CinecodeError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::NonDrop),
            2 => Ok(Self::Drop),
            other => Err(CinecodeError::BadNtsc(other.to_string())),
        }
    }
}

/// Frame rate as an exact rational plus its NTSC convention.
///
/// Only built through the validating constructors, so an NTSC rate always
/// has a playback of `1000k/1001` and a drop-frame rate is always a clean
/// multiple of 29.97.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FramerateRepr", into = "FramerateRepr")]
pub struct Framerate {
    playback: Rational64,
    ntsc: Ntsc,
}

impl Framerate {
    /// Create a framerate from an exact rational.
    ///
    /// If `ntsc` is an NTSC convention and `value` is not already
    /// `1000k/1001`, it is coerced by rounding it to a whole timebase and
    /// putting `timebase * 1000` over 1001: `1000` becomes `1000000/1001`.
    pub fn from_rational(value: Rational64, ntsc: Ntsc) -> Result<Self> {
        Self::from_big_rational(&rational::from_rational64(value), ntsc)
    }

    /// Create a framerate from an arbitrary-precision rational.
    pub fn from_big_rational(value: &Rational, ntsc: Ntsc) -> Result<Self> {
        if value.is_negative() {
            return Err(CinecodeError::Negative(value.to_string()));
        }

        let mut playback = value.clone();
        if ntsc.is_ntsc() && !is_ntsc_playback(&playback) {
            let timebase = rational::round_to_integer(&playback);
            playback = timebase / ntsc_ratio();
            debug!(input = %value, playback = %playback, "coerced value to NTSC playback");
        }

        if ntsc == Ntsc::Drop && !(&playback * drop_frame_divisor()).is_integer() {
            return Err(CinecodeError::BadDropFrameRate(value.to_string()));
        }

        let playback = rational::to_rational64(&playback)
            .ok_or_else(|| CinecodeError::format(ParseTarget::Framerate, value.to_string()))?;

        Ok(Self { playback, ntsc })
    }

    /// Create a framerate from a whole number.
    ///
    /// For NTSC conventions the value is taken as the timebase: `24` becomes
    /// `24000/1001`.
    pub fn from_int(value: i64, ntsc: Ntsc) -> Result<Self> {
        Self::from_rational(Rational64::from_integer(value), ntsc)
    }

    /// Create a framerate from a float.
    ///
    /// Fails with [`CinecodeError::Imprecise`] for non-NTSC rates: a float
    /// cannot pin an exact rate unless it is being coerced to NTSC.
    pub fn from_float(value: f64, ntsc: Ntsc) -> Result<Self> {
        if !ntsc.is_ntsc() {
            return Err(CinecodeError::Imprecise(value.to_string()));
        }

        let exact = BigRational::from_float(value)
            .ok_or_else(|| CinecodeError::format(ParseTarget::Framerate, value.to_string()))?;
        Self::from_big_rational(&exact, ntsc)
    }

    /// Parse a framerate from an integer (`"24"`), float (`"23.98"`) or
    /// rational (`"24000/1001"`) string.
    ///
    /// Metadata tools often report the timebase as seconds-per-frame
    /// (`"1/24"`), so a rational whose numerator is smaller than its
    /// denominator is inverted.
    pub fn from_string(text: &str, ntsc: Ntsc) -> Result<Self> {
        if let Ok(value) = text.parse::<i64>() {
            return Self::from_int(value, ntsc);
        }

        if let Ok(value) = text.parse::<f64>() {
            return Self::from_float(value, ntsc);
        }

        let Ok(mut value) = text.parse::<BigRational>() else {
            debug!(input = text, "framerate string not recognized");
            return Err(CinecodeError::format(ParseTarget::Framerate, text));
        };

        if value.numer() < value.denom() && !value.numer().is_zero() {
            value = value.recip();
        }

        Self::from_big_rational(&value, ntsc)
    }

    /// Real-world frames per second.
    #[inline]
    pub fn playback(self) -> Rational64 {
        self.playback
    }

    /// Frames per second that timecode is displayed in.
    ///
    /// Equal to the playback for true rates, and `k` for an NTSC playback of
    /// `1000k/1001`, which is the playback rounded to the nearest whole
    /// number for every rate up to 500 fps.
    #[inline]
    pub fn timebase(self) -> Rational64 {
        match self.ntsc {
            Ntsc::None => self.playback,
            Ntsc::NonDrop | Ntsc::Drop => self.playback * Rational64::new(1001, 1000),
        }
    }

    /// The NTSC convention of this rate.
    #[inline]
    pub fn ntsc(self) -> Ntsc {
        self.ntsc
    }

    /// Real-world duration of a single frame in seconds.
    ///
    /// # Panics
    ///
    /// Panics if the playback is zero.
    pub fn frame_duration(self) -> Rational {
        self.playback_rational().recip()
    }

    pub(crate) fn playback_rational(self) -> Rational {
        rational::from_rational64(self.playback)
    }

    pub(crate) fn timebase_rational(self) -> Rational {
        rational::from_rational64(self.timebase())
    }

    /// Whole-number timebase, if the timebase is integral.
    pub(crate) fn timebase_whole(self) -> Option<i64> {
        let timebase = self.timebase();
        timebase.is_integer().then(|| timebase.to_integer())
    }

    const fn catalog(timebase: i64, ntsc: Ntsc) -> Self {
        let playback = match ntsc {
            Ntsc::None => Rational64::new_raw(timebase, 1),
            Ntsc::NonDrop | Ntsc::Drop => Rational64::new_raw(timebase * 1000, 1001),
        };
        Self { playback, ntsc }
    }

    /// 23.98 NTSC, non-drop.
    pub const F23_98: Self = Self::catalog(24, Ntsc::NonDrop);
    /// 24 fps.
    pub const F24: Self = Self::catalog(24, Ntsc::None);
    /// 29.97 NTSC, non-drop.
    pub const F29_97_NDF: Self = Self::catalog(30, Ntsc::NonDrop);
    /// 29.97 NTSC, drop-frame.
    pub const F29_97_DF: Self = Self::catalog(30, Ntsc::Drop);
    /// 30 fps.
    pub const F30: Self = Self::catalog(30, Ntsc::None);
    /// 47.95 NTSC, non-drop.
    pub const F47_95: Self = Self::catalog(48, Ntsc::NonDrop);
    /// 48 fps.
    pub const F48: Self = Self::catalog(48, Ntsc::None);
    /// 59.94 NTSC, non-drop.
    pub const F59_94_NDF: Self = Self::catalog(60, Ntsc::NonDrop);
    /// 59.94 NTSC, drop-frame.
    pub const F59_94_DF: Self = Self::catalog(60, Ntsc::Drop);
    /// 60 fps.
    pub const F60: Self = Self::catalog(60, Ntsc::None);
}

impl Default for Framerate {
    fn default() -> Self {
        Self::F24
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = *self.playback.numer() as f64 / *self.playback.denom() as f64;
        if self.playback.is_integer() {
            write!(f, "{:.0} {}", fps, self.ntsc)
        } else {
            write!(f, "{:.2} {}", fps, self.ntsc)
        }
    }
}

/// Serialized shape of a [`Framerate`]; deserializing re-runs validation.
#[derive(Serialize, Deserialize)]
struct FramerateRepr {
    playback: Rational64,
    ntsc: Ntsc,
}

impl From<Framerate> for FramerateRepr {
    fn from(rate: Framerate) -> Self {
        Self {
            playback: rate.playback,
            ntsc: rate.ntsc,
        }
    }
}

impl TryFrom<FramerateRepr> for Framerate {
    type Error = CinecodeError;

    fn try_from(repr: FramerateRepr) -> Result<Self> {
        Self::from_rational(repr.playback, repr.ntsc)
    }
}

/// Whether `value` is already `1000k/1001` written over 1001.
///
/// Reduced forms such as `1000/143` (k = 7) fail this and get re-coerced,
/// which lands them back on the same value.
fn is_ntsc_playback(value: &Rational) -> bool {
    *value.denom() == BigInt::from(1001) && (value * ntsc_ratio()).is_integer()
}

/// `1001/1000`: an NTSC playback times this is its whole timebase.
fn ntsc_ratio() -> Rational {
    rational::rational(1001, 1000)
}

/// `1001/30000`: a drop-frame playback times this must be whole.
fn drop_frame_divisor() -> Rational {
    rational::rational(1001, 30000)
}
