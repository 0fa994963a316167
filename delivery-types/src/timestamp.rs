//! Parsing of `sys` timestamps.
//!
//! The API emits RFC 3339 (`2020-01-01T00:00:00.000Z`). Looser ISO 8601 forms
//! are accepted too: a space instead of `T`, offsets without a colon, minute
//! precision. Offset-less forms are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

use crate::{Error, Result};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE: &str = "%Y-%m-%d";

/// Parses the timestamp stored under `field`.
///
/// Fails with [`Error::InvalidTimestamp`] when `value` is not a string or is
/// not a recognizable date-time.
pub fn parse_timestamp(field: &str, value: &Value) -> Result<DateTime<Utc>> {
    let invalid = || Error::InvalidTimestamp {
        field: field.to_owned(),
        value: value.to_string(),
    };

    let text = value.as_str().ok_or_else(invalid)?.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }

    // `%z` does not take a `Z` designator.
    let zoned = match text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        Some(rest) => format!("{rest}+0000"),
        None => text.to_owned(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&zoned, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, NAIVE_DATE) {
        return Ok(date.and_time(NaiveTime::default()).and_utc());
    }

    Err(invalid())
}
