//! JSON persistence of framerates and timecodes.

use cinecode_core::{Framerate, Ntsc, Timecode};
use serde::{Deserialize, Serialize};

/// A marker as an editing tool might store it in a project file.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Marker {
    name: String,
    position: Timecode,
}

#[test]
fn timecode_json_shape() {
    let tc = Timecode::from_frames(1800, Framerate::F29_97_DF);
    let value = serde_json::to_value(&tc).unwrap();

    assert_eq!(value["seconds"], "3003/50");
    assert_eq!(value["rate"]["ntsc"], "Drop");
    assert_eq!(value["rate"]["playback"], serde_json::json!([30000, 1001]));
}

#[test]
fn marker_round_trip_keeps_rate_and_frame() {
    let marker = Marker {
        name: "act two".into(),
        position: Timecode::from_timecode("-00:11:00;02", Framerate::F29_97_DF).unwrap(),
    };

    let json = serde_json::to_string(&marker).unwrap();
    let back: Marker = serde_json::from_str(&json).unwrap();

    assert_eq!(back, marker);
    assert_eq!(back.position.rate(), Framerate::F29_97_DF);
    assert_eq!(back.position.timecode(), "-00:11:00;02");
}

#[test]
fn hand_edited_seconds_are_requantized() {
    crate::init_logging();
    let json = r#"{"seconds":"3601/1","rate":{"playback":[24000,1001],"ntsc":"NonDrop"}}"#;
    let tc: Timecode = serde_json::from_str(json).unwrap();
    let frames = tc.seconds() * num_rational::BigRational::new(24000.into(), 1001.into());
    assert!(frames.is_integer());
    assert_eq!(tc.timecode(), "00:59:57:10");
}

#[test]
fn invalid_rates_are_rejected() {
    let bad_drop = r#"{"seconds":"0","rate":{"playback":[24000,1001],"ntsc":"Drop"}}"#;
    assert!(serde_json::from_str::<Timecode>(bad_drop).is_err());

    let negative = r#"{"playback":[-24,1],"ntsc":"None"}"#;
    assert!(serde_json::from_str::<Framerate>(negative).is_err());

    let coerced: Framerate =
        serde_json::from_str(r#"{"playback":[24,1],"ntsc":"NonDrop"}"#).unwrap();
    assert_eq!(coerced, Framerate::F23_98);
    assert_eq!(coerced.ntsc(), Ntsc::NonDrop);
}

#[test]
fn bad_seconds_text_is_rejected() {
    let json = r#"{"seconds":"one hour","rate":{"playback":[24,1],"ntsc":"None"}}"#;
    let err = serde_json::from_str::<Timecode>(json).unwrap_err();
    assert!(err.to_string().contains("seconds"));
}
