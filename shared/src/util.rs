//! Date helpers shared by the wire models

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::{ModelError, ModelResult};

/// Parse a calendar date sent by the backend.
///
/// Accepts plain `YYYY-MM-DD` as well as full RFC 3339 timestamps, in which
/// case only the date part (in the timestamp's own offset) is kept.
pub fn parse_calendar_date(raw: &str) -> ModelResult<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| ModelError::InvalidDate(raw.to_string()))
}

/// `deserialize_with` adapter for [`parse_calendar_date`]
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(serde::de::Error::custom)
}
