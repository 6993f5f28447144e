//! Cinecode Core - Frame-accurate timecode for video editing
//!
//! This crate provides:
//! - Framerates with NTSC and drop-frame conventions ([`Framerate`], [`Ntsc`])
//! - Timecode as exact rational seconds ([`Timecode`])
//! - Conversion to and from SMPTE timecode, frame counts, runtimes, Premiere
//!   ticks and 35mm feet+frames
//! - Frame-accurate arithmetic and rebasing between rates
//!
//! ```
//! use cinecode_core::{Framerate, Timecode};
//!
//! let tc = Timecode::from_timecode("01:00:00:00", Framerate::F23_98)?;
//! assert_eq!(tc.frames(), 86400);
//! assert_eq!(tc.runtime(9), "01:00:03.6");
//! # Ok::<(), cinecode_core::CinecodeError>(())
//! ```

pub mod dropframe;
pub mod error;
mod ops;
mod parse;
pub mod rate;
pub mod rational;
pub mod timecode;

pub use error::{CinecodeError, ParseTarget, Result};
pub use rate::{Framerate, Ntsc};
pub use rational::Rational;
pub use timecode::{Timecode, TimecodeSections};

/// Fixed unit conversions used across the crate.
pub mod constants {
    /// Seconds in one minute.
    pub const SECONDS_PER_MINUTE: i64 = 60;

    /// Seconds in one hour.
    pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;

    /// Adobe Premiere Pro ticks per real-world second, at every framerate.
    pub const PREMIERE_TICKS_PER_SECOND: i64 = 254_016_000_000;

    /// Frames per foot of 35mm 4-perf film.
    pub const FRAMES_PER_FOOT: i64 = 16;
}
