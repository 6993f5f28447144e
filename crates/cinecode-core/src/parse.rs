//! Parsing timecode, runtime and feet+frames strings.
//!
//! Every parser takes the [`Framerate`] the string is expressed in. Field
//! ranges are not validated: `00:00:62:04` is read as `00:01:02:04`, so
//! overflowed fields carry into the next one up.

use num_traits::ToPrimitive;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

use crate::constants::{FRAMES_PER_FOOT, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::dropframe;
use crate::error::{CinecodeError, ParseTarget, Result};
use crate::rate::{Framerate, Ntsc};
use crate::rational::{self, Rational};
use crate::timecode::{Timecode, TimecodeSections};

static TIMECODE_RE: OnceLock<Regex> = OnceLock::new();
static RUNTIME_RE: OnceLock<Regex> = OnceLock::new();
static FEET_AND_FRAMES_RE: OnceLock<Regex> = OnceLock::new();

fn timecode_re() -> &'static Regex {
    TIMECODE_RE.get_or_init(|| {
        Regex::new(
            r"^(?P<negative>-)?((?P<section1>[0-9]+)[:;])?((?P<section2>[0-9]+)[:;])?((?P<section3>[0-9]+)[:;])?(?P<frames>[0-9]+)$",
        )
        .expect("timecode regex is valid")
    })
}

fn runtime_re() -> &'static Regex {
    RUNTIME_RE.get_or_init(|| {
        Regex::new(
            r"^(?P<negative>-)?((?P<section1>[0-9]+):)?((?P<section2>[0-9]+):)?(?P<seconds>[0-9]+(\.[0-9]+)?)$",
        )
        .expect("runtime regex is valid")
    })
}

fn feet_and_frames_re() -> &'static Regex {
    FEET_AND_FRAMES_RE.get_or_init(|| {
        Regex::new(r"^(?P<negative>-)?(?P<feet>[0-9]+)\+(?P<frames>[0-9]+)$")
            .expect("feet+frames regex is valid")
    })
}

impl Timecode {
    /// Parse a SMPTE timecode string such as `01:00:00:00`.
    ///
    /// Leading fields may be left off (`3:04` is three seconds and four
    /// frames). Either `:` or `;` separates fields. For drop-frame rates
    /// the skipped frame numbers are accounted for, and a string naming one
    /// of them fails with [`CinecodeError::BadDropFrameValue`].
    pub fn from_timecode(text: &str, rate: Framerate) -> Result<Self> {
        let caps = captures(timecode_re(), text, ParseTarget::Timecode)?;

        let mut fields = leading_fields(&caps, text, ParseTarget::Timecode)?;
        let sections = TimecodeSections {
            is_negative: caps.name("negative").is_some(),
            seconds: fields.pop().unwrap_or(0),
            minutes: fields.pop().unwrap_or(0),
            hours: fields.pop().unwrap_or(0),
            frames: capture_i64(&caps, "frames", text, ParseTarget::Timecode)?,
        };

        let whole_seconds = rational::integer(sections.hours) * rational::integer(SECONDS_PER_HOUR)
            + rational::integer(sections.minutes) * rational::integer(SECONDS_PER_MINUTE)
            + rational::integer(sections.seconds);
        let raw = whole_seconds * rate.timebase_rational() + rational::integer(sections.frames);
        let mut frames = rational::round_to_integer(&raw);

        if rate.ntsc() == Ntsc::Drop {
            // Drop-frame rates are validated to have a whole timebase.
            let timebase = rate.timebase_whole().unwrap_or_default();
            frames += rational::integer(dropframe::parse_adjustment(&sections, timebase)?);
        }

        if sections.is_negative {
            frames = -frames;
        }

        let frames = frames
            .to_integer()
            .to_i64()
            .ok_or_else(|| too_large(text, ParseTarget::Timecode))?;

        Ok(Self::from_frames(frames, rate))
    }

    /// Parse a real-world runtime string such as `01:00:03.6`.
    ///
    /// Hours and minutes may be left off, and the seconds may carry any
    /// number of decimal places. Values between frames round to the nearest
    /// frame.
    pub fn from_runtime(text: &str, rate: Framerate) -> Result<Self> {
        let caps = captures(runtime_re(), text, ParseTarget::Runtime)?;

        let mut fields = leading_fields(&caps, text, ParseTarget::Runtime)?;
        let minutes = fields.pop().unwrap_or(0);
        let hours = fields.pop().unwrap_or(0);

        let seconds_text = caps.name("seconds").map_or("", |m| m.as_str());
        let seconds = rational::parse_decimal(seconds_text)
            .ok_or_else(|| parse_failure(text, ParseTarget::Runtime))?;

        let mut total: Rational = rational::integer(hours) * rational::integer(SECONDS_PER_HOUR)
            + rational::integer(minutes) * rational::integer(SECONDS_PER_MINUTE)
            + seconds;
        if caps.name("negative").is_some() {
            total = -total;
        }

        Ok(Self::from_seconds(&total, rate))
    }

    /// Parse a 35mm 4-perf feet+frames string such as `5400+00`.
    pub fn from_feet_and_frames(text: &str, rate: Framerate) -> Result<Self> {
        let caps = captures(feet_and_frames_re(), text, ParseTarget::FeetAndFrames)?;

        let feet = capture_i64(&caps, "feet", text, ParseTarget::FeetAndFrames)?;
        let frames = capture_i64(&caps, "frames", text, ParseTarget::FeetAndFrames)?;

        let mut frames = feet
            .checked_mul(FRAMES_PER_FOOT)
            .and_then(|total| total.checked_add(frames))
            .ok_or_else(|| too_large(text, ParseTarget::FeetAndFrames))?;
        if caps.name("negative").is_some() {
            frames = -frames;
        }

        Ok(Self::from_frames(frames, rate))
    }
}

fn captures<'t>(re: &Regex, text: &'t str, target: ParseTarget) -> Result<Captures<'t>> {
    re.captures(text).ok_or_else(|| parse_failure(text, target))
}

/// The optional `sectionN` groups that matched, in order.
fn leading_fields(caps: &Captures<'_>, text: &str, target: ParseTarget) -> Result<Vec<i64>> {
    ["section1", "section2", "section3"]
        .into_iter()
        .filter(|name| caps.name(name).is_some())
        .map(|name| capture_i64(caps, name, text, target))
        .collect()
}

fn capture_i64(caps: &Captures<'_>, name: &str, text: &str, target: ParseTarget) -> Result<i64> {
    caps.name(name)
        .ok_or_else(|| parse_failure(text, target))?
        .as_str()
        .parse()
        .map_err(|_| too_large(text, target))
}

fn parse_failure(text: &str, target: ParseTarget) -> CinecodeError {
    debug!(input = text, %target, "string format not recognized");
    CinecodeError::format(target, text)
}

fn too_large(text: &str, target: ParseTarget) -> CinecodeError {
    debug!(input = text, %target, "field value out of range");
    CinecodeError::format(target, text)
}
