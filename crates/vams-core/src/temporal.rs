//! # Temporal Types
//!
//! Two notions of time appear in a vendor record:
//!
//! - **Instants** (`Timestamp`): when a record was created. UTC only,
//!   truncated to seconds, rendered as `YYYY-MM-DDTHH:MM:SSZ`.
//! - **Calendar dates** (`NaiveDate`): agreement start and end dates. These
//!   are entered as text and may be absent or malformed while a record is
//!   being edited, so parsing is total and returns `Option`.
//!
//! The agreement status engine compares calendar dates only. "Today" is the
//! current instant with its time of day discarded.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VamsError;

/// A UTC-only timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 timestamp, converting any offset to UTC.
    pub fn parse(s: &str) -> Result<Self, VamsError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| VamsError::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Ok(Self::from_utc(dt.with_timezone(&Utc)))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The calendar date of this instant in UTC.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Render as ISO8601 with Z suffix (e.g., `2025-12-10T11:25:40Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a user-entered calendar date.
///
/// Accepts `YYYY-MM-DD` (what a date input produces) or a full RFC 3339
/// timestamp, whose UTC calendar date is used. Surrounding whitespace is
/// ignored. Empty or malformed input yields `None`.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
