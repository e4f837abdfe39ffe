//! Timestamp parsing for backend payloads and command-line input.
//!
//! The backend emits ISO-8601 datetimes that may or may not carry an offset.
//! Values without an offset are taken as UTC.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::errors::CoreError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a backend timestamp. Offset-less values are interpreted as UTC.
#[must_use]
pub fn parse_api(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parse a timestamp typed by a person.
///
/// Accepts RFC 3339, or the `YYYY-MM-DDTHH:MM` form of an HTML
/// `datetime-local` input, which is read in the local time zone.
///
/// # Errors
///
/// Returns [`CoreError::Parse`] when no supported format matches.
pub fn parse_user_input(field: &str, value: &str) -> Result<DateTime<Utc>, CoreError> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| CoreError::Parse {
                    field: field.to_string(),
                    reason: format!("'{trimmed}' does not exist in the local time zone"),
                });
        }
    }
    Err(CoreError::Parse {
        field: field.to_string(),
        reason: format!("expected RFC 3339 or YYYY-MM-DDTHH:MM, got '{trimmed}'"),
    })
}

/// Serde adapter for backend datetimes.
///
/// # Errors
///
/// Fails when the string matches none of the accepted formats.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_api(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}
