//! Error types for cinecode.

use thiserror::Error;

/// What a parser was trying to produce when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseTarget {
    /// A [`crate::Framerate`] from a string.
    Framerate,
    /// A SMPTE timecode string.
    Timecode,
    /// A real-world runtime string.
    Runtime,
    /// A 35mm feet+frames string.
    FeetAndFrames,
    /// An NTSC tag string.
    Ntsc,
    /// An exact `n/d` seconds value.
    Seconds,
}

impl std::fmt::Display for ParseTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Framerate => "Framerate",
            Self::Timecode => "Timecode",
            Self::Runtime => "runtime",
            Self::FeetAndFrames => "feet+frames",
            Self::Ntsc => "NTSC tag",
            Self::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Main error type for cinecode operations.
///
/// Every variant is a parse or validation failure. Construction either fully
/// succeeds or yields one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CinecodeError {
    #[error("could not parse {target}: string format not recognized: {input:?}")]
    Format { target: ParseTarget, input: String },

    #[error("could not parse Framerate: Framerate cannot be negative: {0}")]
    Negative(String),

    #[error("could not parse Framerate: NTSC value not recognized: {0}")]
    BadNtsc(String),

    #[error(
        "could not parse Framerate: non-NTSC framerates cannot be parsed from floats \
         due to imprecision: {0}"
    )]
    Imprecise(String),

    #[error(
        "could not parse Framerate: drop-frame Framerate values must have a playback \
         cleanly divisible by 30000/1001: {0}"
    )]
    BadDropFrameRate(String),

    #[error(
        "could not parse Timecode: drop-frame timecode never displays frame {frames} \
         at minute {minutes}, frame value should be >= {dropped}"
    )]
    BadDropFrameValue {
        minutes: i64,
        frames: i64,
        dropped: i64,
    },
}

impl CinecodeError {
    pub(crate) fn format(target: ParseTarget, input: impl Into<String>) -> Self {
        Self::Format {
            target,
            input: input.into(),
        }
    }

    /// Whether this error came from building a [`crate::Framerate`].
    pub fn is_framerate_error(&self) -> bool {
        match self {
            Self::Negative(_)
            | Self::BadNtsc(_)
            | Self::Imprecise(_)
            | Self::BadDropFrameRate(_) => true,
            Self::Format { target, .. } => {
                matches!(target, ParseTarget::Framerate | ParseTarget::Ntsc)
            }
            Self::BadDropFrameValue { .. } => false,
        }
    }

    /// Whether this error came from parsing a [`crate::Timecode`] representation.
    pub fn is_timecode_error(&self) -> bool {
        match self {
            Self::BadDropFrameValue { .. } => true,
            Self::Format { target, .. } => matches!(
                target,
                ParseTarget::Timecode
                    | ParseTarget::Runtime
                    | ParseTarget::FeetAndFrames
                    | ParseTarget::Seconds
            ),
            _ => false,
        }
    }
}

/// Result type alias for cinecode operations.
pub type Result<T> = std::result::Result<T, CinecodeError>;
