use chrono::{TimeZone, Utc};
use delivery_types::{parse_timestamp, Error};
use serde_json::json;

// ── Accepted forms ───────────────────────────────────────────────

#[test]
fn parses_rfc3339_utc() {
    let ts = parse_timestamp("createdAt", &json!("2020-01-01T00:00:00Z")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn parses_fractional_seconds() {
    let ts = parse_timestamp("updatedAt", &json!("2021-06-15T12:30:45.123Z")).unwrap();
    assert_eq!(ts.timestamp_subsec_millis(), 123);
}

#[test]
fn normalizes_offsets_to_utc() {
    let ts = parse_timestamp("createdAt", &json!("2020-01-01T02:00:00+02:00")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn offsetless_date_time_is_utc() {
    let ts = parse_timestamp("createdAt", &json!("2020-01-01T10:00:00")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap());
}

#[test]
fn bare_date_is_midnight_utc() {
    let ts = parse_timestamp("deletedAt", &json!("2020-03-04")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 3, 4, 0, 0, 0).unwrap());
}

#[test]
fn space_separator_without_offset() {
    let ts = parse_timestamp("createdAt", &json!("2020-01-01 00:00:00")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn offset_without_colon() {
    let ts = parse_timestamp("createdAt", &json!("2020-01-01T00:00:00+0000")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());

    let ts = parse_timestamp("createdAt", &json!("2020-01-01T05:30:00+0530")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn minute_precision_with_zulu() {
    let ts = parse_timestamp("createdAt", &json!("2020-01-01T00:00Z")).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn minute_precision_variants() {
    let expected = Utc.with_ymd_and_hms(2020, 1, 1, 12, 15, 0).unwrap();
    for text in [
        "2020-01-01T12:15",
        "2020-01-01 12:15",
        "2020-01-01 12:15Z",
        "2020-01-01T13:15+0100",
    ] {
        assert_eq!(parse_timestamp("updatedAt", &json!(text)).unwrap(), expected, "{text}");
    }
}

// ── Failures ─────────────────────────────────────────────────────

#[test]
fn garbage_string_fails() {
    let err = parse_timestamp("createdAt", &json!("yesterday")).unwrap_err();
    match err {
        Error::InvalidTimestamp { field, value } => {
            assert_eq!(field, "createdAt");
            assert_eq!(value, "\"yesterday\"");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_string_fails() {
    assert!(parse_timestamp("createdAt", &json!(null)).is_err());
    assert!(parse_timestamp("createdAt", &json!(1577836800)).is_err());
}
