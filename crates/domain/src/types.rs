//! Common data types used throughout the application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime::DateTimeInput;

/// Lifecycle status of a meeting.
///
/// Set to `Scheduled` at creation and never transitioned by this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// Canonical scheduled-meeting record owned by this system.
///
/// The calendar event referenced by `calendar_event_id` is a derived,
/// best-effort projection; the meeting record is the source of truth for
/// desired state. A meeting without a `meet_link` is still schedulable work
/// from the UI's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub participants: Vec<String>,
    pub status: MeetingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input payload for scheduling or updating a meeting.
///
/// `date_time` accepts either an instant or a string; validation happens in
/// [`crate::datetime::parse_date`], not at deserialization time, so bad input
/// surfaces as a structured `InvalidDate` error instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_time: DateTimeInput,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}
