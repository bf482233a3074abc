//! Date/time utilities for meeting windows
//!
//! Pure and deterministic: parsing a start time and deriving the fixed
//! one-hour event window. No side effects, no configuration.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MEETING_DURATION_HOURS;
use crate::errors::{MeetSyncError, Result};

/// A meeting start time as supplied by callers: either an instant or a
/// string still to be parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateTimeInput {
    Instant(DateTime<Utc>),
    Text(String),
}

impl Default for DateTimeInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<DateTime<Utc>> for DateTimeInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<&str> for DateTimeInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// UTC-tagged `{start, end}` window sent to the calendar provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Parse a meeting start time into a UTC instant.
///
/// Accepts RFC 3339 strings (any offset, normalized to UTC) and naive
/// `YYYY-MM-DDTHH:MM:SS` strings (interpreted as UTC).
///
/// # Errors
/// Returns [`MeetSyncError::InvalidDate`] if the input is absent, empty, or
/// does not parse to a valid instant.
pub fn parse_date(input: &DateTimeInput) -> Result<DateTime<Utc>> {
    match input {
        DateTimeInput::Instant(instant) => Ok(*instant),
        DateTimeInput::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(MeetSyncError::InvalidDate("date is required".into()));
            }

            DateTime::parse_from_rfc3339(trimmed)
                .map(|parsed| parsed.with_timezone(&Utc))
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                        .map(|naive| naive.and_utc())
                })
                .map_err(|_| {
                    MeetSyncError::InvalidDate(format!("invalid date value: {trimmed}"))
                })
        }
    }
}

/// End time is always start + 1 hour. Fixed duration, no configuration.
pub fn calculate_end_time(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::hours(MEETING_DURATION_HOURS)
}

/// Derive the `{start, end}` calendar window for a meeting start time.
///
/// # Errors
/// Returns [`MeetSyncError::InvalidDate`] if the start time does not parse.
pub fn format_date_range(input: &DateTimeInput) -> Result<EventWindow> {
    let start = parse_date(input)?;
    Ok(EventWindow { start, end: calculate_end_time(start) })
}
