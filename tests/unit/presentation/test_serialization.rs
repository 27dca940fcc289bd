use bbox_client::presentation::serialization::{
    empty_string_as_none, fix_mojibake, flexible_datetime, flexible_datetime_opt, lenient_bool,
    lenient_bool_opt, lenient_int, lenient_int_opt, lenient_string, mojibake_string,
    parse_datetime,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Sample {
    #[serde(with = "lenient_int")]
    count: u32,
    #[serde(with = "lenient_int")]
    signal: i64,
    #[serde(default, with = "lenient_int_opt")]
    until: Option<i64>,
    #[serde(with = "lenient_bool")]
    enabled: bool,
    #[serde(default, with = "lenient_bool_opt")]
    cellular: Option<bool>,
    #[serde(with = "lenient_string")]
    label: String,
    #[serde(default, with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(with = "mojibake_string")]
    kind: String,
    #[serde(with = "flexible_datetime")]
    seen: DateTime<FixedOffset>,
    #[serde(default, with = "flexible_datetime_opt")]
    built: Option<DateTime<FixedOffset>>,
}

fn sample() -> serde_json::Value {
    json!({
        "count": 3,
        "signal": -60,
        "until": 1730052873,
        "enabled": 1,
        "cellular": 0,
        "label": "eth0",
        "name": "nas",
        "kind": "TÃ©lÃ©phone",
        "seen": "2025-11-07T13:40:00+0100",
        "built": "2025-09-25T14:38:50Z"
    })
}

#[test]
fn test_sample_deserializes() {
    let parsed: Sample = serde_json::from_value(sample()).unwrap();

    assert_eq!(parsed.count, 3);
    assert_eq!(parsed.signal, -60);
    assert_eq!(parsed.until, Some(1_730_052_873));
    assert!(parsed.enabled);
    assert_eq!(parsed.cellular, Some(false));
    assert_eq!(parsed.label, "eth0");
    assert_eq!(parsed.name.as_deref(), Some("nas"));
    assert_eq!(parsed.kind, "Téléphone");
    assert_eq!(parsed.seen.offset().local_minus_utc(), 3600);
    assert!(parsed.built.is_some());
}

#[test]
fn test_numeric_strings() {
    let mut value = sample();
    value["count"] = json!(" 7 ");
    value["signal"] = json!("-52");
    value["until"] = json!("42");
    value["label"] = json!(12);

    let parsed: Sample = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.count, 7);
    assert_eq!(parsed.signal, -52);
    assert_eq!(parsed.until, Some(42));
    assert_eq!(parsed.label, "12");
}

#[test]
fn test_whole_floats_are_integers() {
    let mut value = sample();
    value["count"] = json!(4.0);
    let parsed: Sample = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.count, 4);

    let mut value = sample();
    value["count"] = json!(4.5);
    assert!(serde_json::from_value::<Sample>(value).is_err());
}

#[test]
fn test_out_of_range_integer_fails() {
    let mut value = sample();
    value["count"] = json!(-1);
    assert!(serde_json::from_value::<Sample>(value).is_err());

    let mut value = sample();
    value["count"] = json!(u64::MAX);
    assert!(serde_json::from_value::<Sample>(value).is_err());
}

#[test]
fn test_empty_values_become_none() {
    let mut value = sample();
    value["until"] = json!("");
    value["cellular"] = json!(null);
    value["name"] = json!("");
    value["built"] = json!("");

    let parsed: Sample = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.until, None);
    assert_eq!(parsed.cellular, None);
    assert_eq!(parsed.name, None);
    assert_eq!(parsed.built, None);
}

#[test]
fn test_missing_optional_fields() {
    let mut value = sample();
    let map = value.as_object_mut().unwrap();
    map.remove("until");
    map.remove("cellular");
    map.remove("name");
    map.remove("built");

    let parsed: Sample = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.until, None);
    assert_eq!(parsed.cellular, None);
    assert_eq!(parsed.name, None);
    assert_eq!(parsed.built, None);
}

#[test]
fn test_boolean_forms() {
    for (raw, expected) in [
        (json!(true), true),
        (json!(0), false),
        (json!("1"), true),
        (json!("false"), false),
    ] {
        let mut value = sample();
        value["enabled"] = raw;
        let parsed: Sample = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.enabled, expected);
    }

    let mut value = sample();
    value["enabled"] = json!("yes");
    assert!(serde_json::from_value::<Sample>(value).is_err());
}

#[test]
fn test_invalid_timestamp_fails() {
    let mut value = sample();
    value["seen"] = json!("yesterday");
    let err = serde_json::from_value::<Sample>(value).unwrap_err();
    assert!(err.to_string().contains("timestamp"), "{err}");
}

#[test]
fn test_serialized_form() {
    let parsed: Sample = serde_json::from_value(sample()).unwrap();
    let value = serde_json::to_value(&parsed).unwrap();

    assert_eq!(value["count"], 3);
    assert_eq!(value["enabled"], true);
    assert_eq!(value["cellular"], false);
    assert_eq!(value["kind"], "Téléphone");
    assert_eq!(value["seen"], "2025-11-07T13:40:00+01:00");

    let again: Sample = serde_json::from_value(value).unwrap();
    assert_eq!(again, parsed);
}

#[test]
fn test_fix_mojibake() {
    assert_eq!(fix_mojibake("GÃ©nÃ©rique"), "Générique");
    assert_eq!(fix_mojibake("plain"), "plain");
    assert_eq!(fix_mojibake("déjà"), "déjà");
}

#[test]
fn test_parse_datetime_forms() {
    assert!(parse_datetime("2025-11-07T13:40:00+01:00").is_some());
    assert!(parse_datetime("2025-11-07T13:40:00+0100").is_some());
    assert!(parse_datetime("2025-11-07T13:40:00.250+0100").is_some());

    let naive = parse_datetime("2025-11-07T13:40:00").unwrap();
    assert_eq!(naive.offset().local_minus_utc(), 0);

    assert!(parse_datetime("").is_none());
    assert!(parse_datetime("07/11/2025").is_none());
}
