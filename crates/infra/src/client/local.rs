//! In-process meeting backend.
//!
//! Keeps meetings in memory and simulates the latency profile of the remote
//! backend so UI code behaves the same in both modes. No calendar event is
//! created; records carry the configured mock meet link and no event id.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use meetsync_core::MeetingRepository;
use meetsync_domain::datetime::parse_date;
use meetsync_domain::{Meeting, MeetingDraft, MeetingStatus, MeetSyncError, Result};
use tracing::debug;

use super::MeetingBackend;
use crate::storage::InMemoryMeetingStore;

pub struct LocalMeetingBackend {
    store: InMemoryMeetingStore,
    mock_meet_link: String,
    latency_unit: Duration,
}

impl LocalMeetingBackend {
    /// Create a local backend with the given meet link and base latency.
    pub fn new(mock_meet_link: String, latency_unit_ms: u64) -> Self {
        Self {
            store: InMemoryMeetingStore::new(),
            mock_meet_link,
            latency_unit: Duration::from_millis(latency_unit_ms),
        }
    }

    async fn simulate_latency(&self, fraction_num: u32, fraction_den: u32) {
        let delay = self.latency_unit * fraction_num / fraction_den;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl MeetingBackend for LocalMeetingBackend {
    async fn schedule_meeting(&self, draft: MeetingDraft) -> Result<Meeting> {
        self.simulate_latency(1, 1).await;

        let start = parse_date(&draft.date_time)?;
        let now = Utc::now();
        let meeting = Meeting {
            // Microsecond resolution keeps back-to-back ids distinct
            id: format!("meeting_{}", now.timestamp_micros()),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            date_time: start,
            participants: draft.participants,
            status: MeetingStatus::Scheduled,
            calendar_event_id: None,
            meet_link: Some(self.mock_meet_link.clone()),
            owner_id: draft.owner_id,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&meeting).await?;
        debug!(meeting_id = %meeting.id, "meeting scheduled locally");
        Ok(meeting)
    }

    async fn get_meetings(&self, user_id: Option<&str>) -> Result<Vec<Meeting>> {
        self.simulate_latency(1, 2).await;
        self.store.list(user_id).await
    }

    async fn update_meeting(&self, meeting_id: &str, draft: MeetingDraft) -> Result<Meeting> {
        self.simulate_latency(1, 1).await;

        let existing = self.store.get(meeting_id).await?.ok_or_else(|| {
            MeetSyncError::NotFound(format!("meeting {meeting_id} not found"))
        })?;
        let start = parse_date(&draft.date_time)?;

        let updated = Meeting {
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            date_time: start,
            participants: draft.participants,
            updated_at: Utc::now(),
            ..existing
        };
        self.store.update(&updated).await?;
        Ok(updated)
    }

    async fn delete_meeting(&self, meeting_id: &str) -> Result<()> {
        self.simulate_latency(3, 10).await;

        if self.store.get(meeting_id).await?.is_none() {
            return Err(MeetSyncError::NotFound(format!("meeting {meeting_id} not found")));
        }
        self.store.delete(meeting_id).await
    }
}
