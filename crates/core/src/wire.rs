// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serde helpers for the scheduler's wire formats
//!
//! The scheduler emits `datetime.isoformat()` strings, which may or may
//! not carry a UTC offset, and signals a paused job by sending an empty
//! string for `next_run_time`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse an ISO-8601 timestamp, with or without an offset. Offset-less
/// values are taken as UTC.
pub fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&t));
    }
    None
}

/// `DateTime<Utc>` field encoded as an ISO-8601 string.
pub mod iso_datetime {
    use super::parse_iso;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_iso(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

/// `Option<DateTime<Utc>>` field where absent, `null`, and `""` all mean
/// "no value" (the scheduler sends `""` for a paused job).
pub mod next_run_time {
    use super::parse_iso;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&t.to_rfc3339()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => parse_iso(text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", text))),
        }
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
