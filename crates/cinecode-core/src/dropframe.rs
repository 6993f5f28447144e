//! Drop-frame timecode numbering for NTSC rates.
//!
//! Drop-frame timecode skips the lowest frame numbers at the start of every
//! minute except each tenth minute, so the displayed timecode tracks
//! wall-clock time even though playback runs at `timebase * 1000/1001`. Only
//! frame *numbers* are skipped; no picture is ever dropped.
//!
//! Both adjustments depend only on the whole-number timebase (30 for 29.97 DF,
//! 60 for 59.94 DF). The display adjustment turns an internal frame count into
//! the number shown on screen; the parse adjustment goes the other way from
//! the fields of a drop-frame string.

use tracing::debug;

use crate::error::{CinecodeError, ParseTarget, Result};
use crate::timecode::TimecodeSections;

/// Frame numbers skipped at each dropping minute: 2 for 29.97, 4 for 59.94.
pub fn frames_to_drop(timebase: i64) -> i64 {
    (timebase as f64 * 0.066666).round() as i64
}

/// Frames to add to an absolute frame count to get the displayed frame
/// number for drop-frame timecode.
pub fn display_adjustment(frame_number: i64, timebase: i64) -> i64 {
    let dropped = frames_to_drop(timebase);

    let frames_per_minute = timebase * 60;
    let frames_per_minute_drop = frames_per_minute - dropped;
    // Nine dropping minutes plus one whole minute.
    let frames_per_10_minutes_drop = frames_per_minute_drop * 9 + frames_per_minute;

    let tens_of_minutes = frame_number / frames_per_10_minutes_drop;
    let mut frames = frame_number % frames_per_10_minutes_drop;

    let mut adjustment = 9 * dropped * tens_of_minutes;

    // The first minute of each ten-minute block never drops.
    if frames < frames_per_minute {
        return adjustment;
    }

    frames -= timebase;
    adjustment += dropped;
    adjustment += (frames / frames_per_minute_drop) * dropped;

    adjustment
}

/// Frames to add to a naive `fields * timebase` count parsed from a
/// drop-frame string. Always zero or negative.
///
/// Fails when the string names a frame number that is skipped at its minute
/// (e.g. `00:01:00;01` at 29.97 DF), or when the minute count overflows.
pub fn parse_adjustment(sections: &TimecodeSections, timebase: i64) -> Result<i64> {
    let dropped = frames_to_drop(timebase);

    let has_bad_frames = sections.frames < dropped;
    let is_tenth_minute = sections.minutes % 10 == 0;
    if has_bad_frames && !is_tenth_minute {
        debug!(
            minutes = sections.minutes,
            frames = sections.frames,
            dropped,
            "drop-frame timecode names a skipped frame"
        );
        return Err(CinecodeError::BadDropFrameValue {
            minutes: sections.minutes,
            frames: sections.frames,
            dropped,
        });
    }

    let total_minutes = sections
        .hours
        .checked_mul(60)
        .and_then(|hours| hours.checked_add(sections.minutes));
    let adjustment = total_minutes
        .and_then(|total| dropped.checked_mul(total - total / 10))
        .ok_or_else(|| {
            debug!(
                hours = sections.hours,
                minutes = sections.minutes,
                "drop-frame minute count out of range"
            );
            let sign = if sections.is_negative { "-" } else { "" };
            let input = format!(
                "{}{:02}:{:02}:{:02};{:02}",
                sign, sections.hours, sections.minutes, sections.seconds, sections.frames
            );
            CinecodeError::format(ParseTarget::Timecode, input)
        })?;
    Ok(-adjustment)
}
