//! Loading feature selections and descriptors from configuration

use codec_db::{CodecDatabase, CodecDescriptor, CodecVariant, FeatureSelection, Slot};

#[test]
fn test_feature_selection_from_json() {
    let json = r#"{
        "isac": false,
        "isacfx": true,
        "ilbc": false,
        "g722": true,
        "opus": false,
        "g729": true,
        "red": false,
        "cn_48khz": false
    }"#;

    let selection: FeatureSelection = serde_json::from_str(json).unwrap();
    assert_eq!(
        selection,
        FeatureSelection::none()
            .with_isacfx(true)
            .with_g722(true)
            .with_g729(true)
    );

    let db = CodecDatabase::new(selection);
    assert_eq!(db.slot_of(CodecVariant::Isac), Slot::from_index(0));
    assert!(db.slot_of(CodecVariant::G729).is_some());
    assert_eq!(db.slot_of(CodecVariant::Opus), Slot::NONE);
}

#[test]
fn test_missing_fields_use_build_features() {
    let selection: FeatureSelection = serde_json::from_str(r#"{ "g729": true }"#).unwrap();
    assert!(selection.g729);
    assert_eq!(selection.opus, cfg!(feature = "opus"));
    assert_eq!(selection.cn_48khz, cfg!(feature = "cn-48khz"));
}

#[test]
fn test_feature_selection_round_trips_through_json() {
    let selection = FeatureSelection::all().with_g729(false);
    let json = serde_json::to_string(&selection).unwrap();
    let parsed: FeatureSelection = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, selection);
}

#[test]
fn test_negotiated_descriptor_from_json() {
    let json = r#"{
        "payload_type": 96,
        "name": "OPUS",
        "sample_rate_hz": 48000,
        "packet_size_samples": 960,
        "channels": 2,
        "bitrate": 48000
    }"#;

    let offered: CodecDescriptor = serde_json::from_str(json).unwrap();
    let db = CodecDatabase::new(FeatureSelection::all());
    let opus = db.slot_of(CodecVariant::Opus);

    assert_eq!(db.find_receiver_slot(&offered), opus);
    assert_eq!(db.find_by_descriptor(&offered), Slot::NONE);
    assert_eq!(db.validate_send_codec(&offered), Ok(opus));
}
