//! Table-driven conversion tests.
//!
//! Every case in `fixtures/parse_cases.json` describes one point on a
//! timeline in every representation. Each constructor is fed its own
//! representation and must reproduce all the others, for the value and for
//! its negation.

use cinecode_core::{Framerate, Ntsc, Rational, Timecode};
use serde::Deserialize;

const FIXTURE: &str = include_str!("../fixtures/parse_cases.json");

#[derive(Debug, Clone, Deserialize)]
struct ParseCase {
    timecode: String,
    rate: String,
    ntsc: Ntsc,
    seconds: String,
    frames: i64,
    runtime: String,
    premiere_ticks: i64,
    feet_and_frames: String,
}

impl ParseCase {
    fn framerate(&self) -> Framerate {
        Framerate::from_string(&self.rate, self.ntsc)
            .unwrap_or_else(|err| panic!("fixture rate {:?}: {err}", self.rate))
    }

    fn seconds(&self) -> Rational {
        self.seconds
            .parse()
            .unwrap_or_else(|_| panic!("fixture seconds {:?}", self.seconds))
    }

    fn is_zero(&self) -> bool {
        self.frames == 0
    }

    /// The same case below zero.
    fn negated(&self) -> Self {
        Self {
            timecode: format!("-{}", self.timecode),
            rate: self.rate.clone(),
            ntsc: self.ntsc,
            seconds: format!("-{}", self.seconds),
            frames: -self.frames,
            runtime: format!("-{}", self.runtime),
            premiere_ticks: -self.premiere_ticks,
            feet_and_frames: format!("-{}", self.feet_and_frames),
        }
    }

    fn check(&self, tc: &Timecode, source: &str) {
        let ctx = format!("{} @ {} {:?} from {source}", self.timecode, self.rate, self.ntsc);

        assert_eq!(tc.rate(), self.framerate(), "{ctx}: rate");
        assert_eq!(tc.timecode(), self.timecode, "{ctx}: timecode");
        assert_eq!(tc.seconds(), self.seconds(), "{ctx}: seconds");
        assert_eq!(tc.frames(), self.frames, "{ctx}: frames");
        assert_eq!(tc.runtime(9), self.runtime, "{ctx}: runtime");
        assert_eq!(tc.premiere_ticks(), self.premiere_ticks, "{ctx}: premiere ticks");
        assert_eq!(tc.feet_and_frames(), self.feet_and_frames, "{ctx}: feet+frames");
        assert_eq!(tc.is_negative(), self.frames < 0, "{ctx}: sign");
    }
}

/// Positive fixture cases, plus the negation of every nonzero one.
fn cases() -> Vec<ParseCase> {
    let positive: Vec<ParseCase> = serde_json::from_str(FIXTURE).expect("fixture is valid JSON");
    let negative: Vec<ParseCase> = positive
        .iter()
        .filter(|case| !case.is_zero())
        .map(ParseCase::negated)
        .collect();
    positive.into_iter().chain(negative).collect()
}

#[test]
fn fixture_loads() {
    let cases = cases();
    assert_eq!(cases.len(), 28);
    assert!(cases.iter().any(|case| case.ntsc == Ntsc::Drop));
}

#[test]
fn from_timecode_matches_every_representation() {
    crate::init_logging();
    for case in cases() {
        let tc = Timecode::from_timecode(&case.timecode, case.framerate()).unwrap();
        case.check(&tc, "timecode");
    }
}

#[test]
fn from_seconds_matches_every_representation() {
    for case in cases() {
        let tc = Timecode::from_seconds(&case.seconds(), case.framerate());
        case.check(&tc, "seconds");
    }
}

#[test]
fn from_frames_matches_every_representation() {
    for case in cases() {
        let tc = Timecode::from_frames(case.frames, case.framerate());
        case.check(&tc, "frames");
    }
}

#[test]
fn from_runtime_matches_every_representation() {
    crate::init_logging();
    for case in cases() {
        let tc = Timecode::from_runtime(&case.runtime, case.framerate()).unwrap();
        case.check(&tc, "runtime");
    }
}

#[test]
fn from_premiere_ticks_matches_every_representation() {
    for case in cases() {
        let tc = Timecode::from_premiere_ticks(case.premiere_ticks, case.framerate());
        case.check(&tc, "premiere ticks");
    }
}

#[test]
fn from_feet_and_frames_matches_every_representation() {
    crate::init_logging();
    for case in cases() {
        let tc = Timecode::from_feet_and_frames(&case.feet_and_frames, case.framerate()).unwrap();
        case.check(&tc, "feet+frames");
    }
}

#[test]
fn negative_zero_formats_without_sign() {
    let tc = Timecode::from_timecode("-00:00:00;00", Framerate::F29_97_DF).unwrap();
    assert!(!tc.is_negative());
    assert_eq!(tc.timecode(), "00:00:00;00");
    assert_eq!(tc.runtime(9), "00:00:00.0");
    assert_eq!(tc.feet_and_frames(), "0+00");
}
