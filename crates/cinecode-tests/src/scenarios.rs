//! End-to-end editing scenarios.
//!
//! Exercises parsing, formatting, arithmetic and rebasing together the way
//! an editing tool would chain them.

use cinecode_core::rational::{integer, rational};
use cinecode_core::{CinecodeError, Framerate, Ntsc, Timecode};
use std::cmp::Ordering;

fn tc(text: &str, rate: Framerate) -> Timecode {
    Timecode::from_timecode(text, rate).unwrap()
}

// ── Conversions ────────────────────────────────────────────────

#[test]
fn one_hour_at_23_98() {
    let tc = tc("01:00:00:00", Framerate::F23_98);
    assert_eq!(tc.frames(), 86400);
    assert_eq!(tc.seconds(), rational(18018, 5));
    assert_eq!(tc.runtime(9), "01:00:03.6");
    assert_eq!(tc.premiere_ticks(), 915_372_057_600_000);
    assert_eq!(tc.feet_and_frames(), "5400+00");
    assert_eq!(tc.to_string(), "01:00:00:00 @ 23.98 NTSC NDF");
}

#[test]
fn drop_frame_display_from_frame_count() {
    let tc = Timecode::from_frames(15000, Framerate::F29_97_DF);
    assert_eq!(tc.timecode(), "00:08:20;18");
}

#[test]
fn drop_frame_rejects_skipped_frame_number() {
    crate::init_logging();
    let err = Timecode::from_timecode("00:01:00:01", Framerate::F29_97_DF).unwrap_err();
    assert_eq!(
        err,
        CinecodeError::BadDropFrameValue {
            minutes: 1,
            frames: 1,
            dropped: 2,
        }
    );
    assert!(err.is_timecode_error());
    assert!(!err.is_framerate_error());
}

#[test]
fn overflowed_frames_carry_into_seconds() {
    let tc = tc("00:00:00:48", Framerate::F23_98);
    assert_eq!(tc.timecode(), "00:00:02:00");
}

#[test]
fn runtime_between_frames_rounds_to_nearest() {
    let tc = Timecode::from_runtime("01:00:00.5", Framerate::F23_98).unwrap();
    assert_eq!(tc.timecode(), "00:59:56:22");
}

#[test]
fn feet_and_frames_to_timecode() {
    let tc = Timecode::from_feet_and_frames("213+07", Framerate::F24).unwrap();
    assert_eq!(tc.timecode(), "00:02:22:07");
}

// ── Arithmetic ─────────────────────────────────────────────────

#[test]
fn div_mod_by_one_and_a_half() {
    let a = tc("17:23:13:02", Framerate::F23_98);
    let (dividend, remainder) = a.div_mod(&rational(3, 2));
    assert_eq!(dividend.timecode(), "11:35:28:17");
    assert_eq!(remainder.timecode(), "00:00:00:01");
    assert_eq!(dividend.rate(), Framerate::F23_98);
}

#[test]
fn cut_length_arithmetic() {
    let start = tc("01:00:00:00", Framerate::F24);
    let end = tc("01:00:10:12", Framerate::F24);

    let length = &end - &start;
    assert_eq!(length.timecode(), "00:00:10:12");
    assert_eq!(length.frames(), 252);

    let doubled = &length * 2;
    assert_eq!(doubled.timecode(), "00:00:21:00");
    assert_eq!(&doubled / 2, length);
    assert_eq!(&start + &length, end);
    assert_eq!(start.mul_scalar(&rational(3, 2)).timecode(), "01:30:00:00");
}

#[test]
fn div_mod_whole_divisor_rebuilds_dividend() {
    let a = tc("00:59:59;29", Framerate::F29_97_DF);
    for k in [1, 2, 3, 7, -4] {
        let (quotient, remainder) = a.div_mod(&integer(k));
        assert_eq!(&quotient * k + remainder, a, "divisor {k}");
    }
}

// ── Rates ──────────────────────────────────────────────────────

#[test]
fn ntsc_plays_back_slower_than_true_rate() {
    let ntsc = tc("01:00:00:00", Framerate::F23_98);
    let true_rate = tc("01:00:00:00", Framerate::F24);
    assert_eq!(ntsc.cmp(&true_rate), Ordering::Greater);
    assert_eq!(true_rate.cmp(&ntsc), Ordering::Less);
    assert_eq!(ntsc.cmp(&ntsc.clone()), Ordering::Equal);
}

#[test]
fn rebase_high_frame_rate_to_59_94() {
    crate::init_logging();
    let rate = Framerate::from_int(120, Ntsc::NonDrop).unwrap();
    assert_eq!(rate.to_string(), "119.88 NTSC NDF");

    let rebased = tc("01:00:00:00", rate).rebase(Framerate::F59_94_NDF);
    assert_eq!(rebased.timecode(), "02:00:00:00");
}

#[test]
fn framerate_string_forms_agree() {
    crate::init_logging();
    for text in ["24000/1001", "1001/24000", "23.976", "24"] {
        assert_eq!(
            Framerate::from_string(text, Ntsc::NonDrop).unwrap(),
            Framerate::F23_98,
            "parsing {text}"
        );
    }

    let err = Framerate::from_string("fast", Ntsc::None).unwrap_err();
    assert!(err.is_framerate_error());
    assert!(!err.is_timecode_error());
}

#[test]
fn sections_follow_drop_frame_numbering() {
    let sections = tc("01:00:00;00", Framerate::F29_97_DF).sections();
    assert_eq!(
        (sections.hours, sections.minutes, sections.seconds, sections.frames),
        (1, 0, 0, 0)
    );
    assert!(!sections.is_negative);
}
