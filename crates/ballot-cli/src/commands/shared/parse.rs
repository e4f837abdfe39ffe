use ballot_core::timestamp;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a datetime flag: RFC 3339, or `YYYY-MM-DDTHH:MM` in local time.
pub fn parse_time(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(timestamp::parse_user_input(field, raw)?)
}

/// Parse an optional datetime flag.
pub fn parse_optional_time(raw: Option<&str>, field: &str) -> anyhow::Result<Option<DateTime<Utc>>> {
    raw.map(|value| parse_time(value, field)).transpose()
}

/// Drop blank optional text so it is not sent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
