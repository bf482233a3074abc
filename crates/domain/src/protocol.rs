//! Wire protocol for the callable endpoints
//!
//! Request and response envelopes shared by the HTTP server and the remote
//! client backend. Every failure is reported as a structured
//! `{success: false, error}` envelope; no raw errors cross the wire.

use serde::{Deserialize, Serialize};

use crate::types::{Meeting, MeetingDraft};

/// Response for `scheduleMeeting`: the persisted meeting flattened into the
/// envelope, matching the persisted document layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMeetingResponse {
    #[serde(flatten)]
    pub meeting: Option<Meeting>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request for `getMeetings`; the filter is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMeetingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Response for `getMeetings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMeetingsResponse {
    pub success: bool,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request for `deleteMeeting`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMeetingRequest {
    pub meeting_id: String,
}

/// Request for `updateMeeting`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingRequest {
    pub meeting_id: String,
    pub meeting_data: MeetingDraft,
}

/// Response for `updateMeeting`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting: Option<Meeting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response for `createCalendarEvent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarEventResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request for `deleteCalendarEvent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCalendarEventRequest {
    pub event_id: String,
}

/// Bare `{success, error?}` acknowledgement shared by the delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::MeetingStatus;

    fn sample_meeting() -> Meeting {
        Meeting {
            id: "m-1".into(),
            title: "Kickoff".into(),
            description: "agenda".into(),
            date_time: Utc.with_ymd_and_hms(2025, 2, 1, 14, 0, 0).unwrap(),
            participants: vec!["a@example.com".into(), "b@example.com".into()],
            status: MeetingStatus::Scheduled,
            calendar_event_id: Some("evt-9".into()),
            meet_link: Some("https://meet.google.com/abc".into()),
            owner_id: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn schedule_response_flattens_meeting_fields() {
        let response = ScheduleMeetingResponse {
            meeting: Some(sample_meeting()),
            success: true,
            error: None,
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["success"], true);
        assert_eq!(json["id"], "m-1");
        assert_eq!(json["calendarEventId"], "evt-9");

        let decoded: ScheduleMeetingResponse =
            serde_json::from_value(json).expect("deserialize");
        assert_eq!(decoded.meeting.expect("meeting present").id, "m-1");
    }

    #[test]
    fn failed_schedule_response_has_no_meeting_fields() {
        let json = serde_json::json!({ "success": false, "error": "boom" });
        let decoded: ScheduleMeetingResponse =
            serde_json::from_value(json).expect("deserialize");
        assert!(!decoded.success);
        assert!(decoded.meeting.is_none());
        assert_eq!(decoded.error.as_deref(), Some("boom"));
    }
}
