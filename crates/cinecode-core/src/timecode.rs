//! Frame-accurate timecode.
//!
//! A [`Timecode`] is an exact rational number of real-world seconds tied to a
//! [`Framerate`]. The seconds value always lands on a frame boundary for its
//! rate, and every other representation (SMPTE timecode, frame count,
//! runtime, Premiere ticks, feet+frames) is derived from it on demand.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::{
    FRAMES_PER_FOOT, PREMIERE_TICKS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::dropframe;
use crate::error::{CinecodeError, ParseTarget};
use crate::rate::{Framerate, Ntsc};
use crate::rational::{self, Rational};

/// The display fields of a timecode at one framerate's timebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimecodeSections {
    /// Whether the timecode is below zero.
    pub is_negative: bool,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub frames: i64,
}

/// The frame at a particular point of a timeline.
///
/// Equality and ordering compare the real-world seconds only: `01:00:00:00`
/// at 23.98 NTSC is later than `01:00:00:00` at 24 fps, because NTSC plays
/// back slower.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TimecodeRepr", into = "TimecodeRepr")]
pub struct Timecode {
    /// Real-world seconds since `00:00:00:00`.
    seconds: Rational,
    rate: Framerate,
}

impl Timecode {
    /// Create a timecode from an exact number of real-world seconds.
    ///
    /// Values that do not land on a frame boundary are rounded to the
    /// nearest frame.
    pub fn from_seconds(seconds: &Rational, rate: Framerate) -> Self {
        let playback = rate.playback_rational();
        let frames = seconds * &playback;

        let seconds = if frames.is_integer() {
            seconds.clone()
        } else {
            rational::round_to_integer(&frames) / playback
        };

        Self { seconds, rate }
    }

    /// Create a timecode from a frame count.
    ///
    /// # Panics
    ///
    /// Panics if the rate's playback is zero.
    pub fn from_frames(frames: i64, rate: Framerate) -> Self {
        let seconds = rational::integer(frames) / rate.playback_rational();
        Self::from_seconds(&seconds, rate)
    }

    /// Create a timecode from Adobe Premiere Pro ticks, rounded to the
    /// nearest frame.
    pub fn from_premiere_ticks(ticks: i64, rate: Framerate) -> Self {
        let seconds = rational::rational(ticks, PREMIERE_TICKS_PER_SECOND);
        Self::from_seconds(&seconds, rate)
    }

    /// The framerate of this timecode.
    #[inline]
    pub fn rate(&self) -> Framerate {
        self.rate
    }

    /// Whether this timecode is before `00:00:00:00`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.seconds.is_negative()
    }

    /// Real-world seconds elapsed between `00:00:00:00` and this timecode.
    ///
    /// With NTSC rates this drifts from what the timecode displays:
    /// `01:00:00:00` at 23.98 is `18018/5` seconds.
    pub fn seconds(&self) -> Rational {
        self.seconds.clone()
    }

    /// Frames elapsed between `00:00:00:00` and this timecode.
    ///
    /// This is the frame number found in frame-sequence file names and in
    /// the `<frame>` element of FCP7 XML.
    pub fn frames(&self) -> i64 {
        let frames = &self.seconds * self.rate.playback_rational();
        rational::integer_to_i64(&rational::round_to_integer(&frames))
    }

    /// Split this timecode into its display fields.
    ///
    /// # Panics
    ///
    /// Panics if the rate's timebase is not a whole number; display fields
    /// need an integral count of frames per second.
    pub fn sections(&self) -> TimecodeSections {
        let Some(timebase) = self.rate.timebase_whole() else {
            panic!(
                "timecode sections need a whole-number timebase, {} has {}",
                self.rate,
                self.rate.timebase()
            );
        };

        let mut frames = self.frames().saturating_abs();
        if self.rate.ntsc() == Ntsc::Drop {
            frames = frames.saturating_add(dropframe::display_adjustment(frames, timebase));
        }

        let frames_per_hour = SECONDS_PER_HOUR * timebase;
        let frames_per_minute = SECONDS_PER_MINUTE * timebase;

        let hours = frames.div_euclid(frames_per_hour);
        let frames = frames.rem_euclid(frames_per_hour);
        let minutes = frames.div_euclid(frames_per_minute);
        let frames = frames.rem_euclid(frames_per_minute);
        let seconds = frames.div_euclid(timebase);
        let frames = frames.rem_euclid(timebase);

        TimecodeSections {
            is_negative: self.is_negative(),
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// SMPTE timecode string, e.g. `01:00:00:00`, or `01:00:00;00` for
    /// drop-frame rates.
    ///
    /// # Panics
    ///
    /// Panics if the rate's timebase is not a whole number.
    pub fn timecode(&self) -> String {
        let sections = self.sections();
        let sign = if sections.is_negative { "-" } else { "" };
        let frame_sep = if self.rate.ntsc() == Ntsc::Drop { ';' } else { ':' };

        format!(
            "{}{:02}:{:02}:{:02}{}{:02}",
            sign, sections.hours, sections.minutes, sections.seconds, frame_sep, sections.frames
        )
    }

    /// Real-world runtime as `HH:MM:SS.FFFFFFFFF`, with the seconds rounded
    /// to `precision` decimal places and trailing zeros trimmed.
    ///
    /// This is the format ffmpeg takes for `-ss` and `-t`.
    pub fn runtime(&self, precision: usize) -> String {
        let seconds = self.seconds.abs();

        let (hours, seconds) =
            rational::floor_div_mod(&seconds, &rational::integer(SECONDS_PER_HOUR));
        let (minutes, seconds) =
            rational::floor_div_mod(&seconds, &rational::integer(SECONDS_PER_MINUTE));

        let scaled = rational::round_to_integer(&(seconds * rational::power_of_ten(precision)))
            .to_integer();
        let scale = num_traits::pow(BigInt::from(10), precision);
        let whole = &scaled / &scale;
        let fraction = &scaled % &scale;

        let mut fraction = if fraction.is_zero() {
            String::new()
        } else {
            format!("{:0>width$}", fraction.to_string(), width = precision)
        };
        fraction.truncate(fraction.trim_end_matches('0').len());
        if fraction.is_empty() {
            fraction.push('0');
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{:02}:{:02}:{:0>2}.{}",
            sign,
            rational::integer_to_i64(&hours),
            rational::integer_to_i64(&minutes),
            whole.to_string(),
            fraction
        )
    }

    /// Adobe Premiere Pro ticks, 254016000000 per second regardless of rate.
    pub fn premiere_ticks(&self) -> i64 {
        let ticks = &self.seconds * rational::integer(PREMIERE_TICKS_PER_SECOND);
        rational::integer_to_i64(&rational::round_to_integer(&ticks))
    }

    /// Feet and frames of 35mm 4-perf film (16 frames per foot), e.g.
    /// `5400+00`.
    pub fn feet_and_frames(&self) -> String {
        let frames = self.frames().saturating_abs();
        let feet = frames / FRAMES_PER_FOOT;
        let frames = frames % FRAMES_PER_FOOT;

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}+{:02}", sign, feet, frames)
    }

    pub(crate) fn from_parts(seconds: Rational, rate: Framerate) -> Self {
        Self { seconds, rate }
    }

    pub(crate) fn seconds_ref(&self) -> &Rational {
        &self.seconds
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.timecode(), self.rate)
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seconds.hash(state);
    }
}

/// Serialized shape of a [`Timecode`]: seconds as an exact `n/d` string.
#[derive(Serialize, Deserialize)]
struct TimecodeRepr {
    seconds: String,
    rate: Framerate,
}

impl From<Timecode> for TimecodeRepr {
    fn from(timecode: Timecode) -> Self {
        Self {
            seconds: timecode.seconds.to_string(),
            rate: timecode.rate,
        }
    }
}

impl TryFrom<TimecodeRepr> for Timecode {
    type Error = CinecodeError;

    fn try_from(repr: TimecodeRepr) -> Result<Self, Self::Error> {
        let seconds: Rational = repr
            .seconds
            .parse()
            .map_err(|_| CinecodeError::format(ParseTarget::Seconds, repr.seconds.as_str()))?;
        Ok(Self::from_seconds(&seconds, repr.rate))
    }
}
