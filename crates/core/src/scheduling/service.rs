//! Meeting scheduling service - core business logic

use std::sync::Arc;

use chrono::Utc;
use meetsync_domain::constants::{DEFAULT_MOCK_MEET_LINK, MOCK_EVENT_ID_PREFIX};
use meetsync_domain::datetime::parse_date;
use meetsync_domain::{Meeting, MeetingDraft, MeetingStatus, MeetSyncError, Result};
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::{CalendarEventHandle, CalendarGateway, MeetingRepository};

/// Orchestrates meeting CRUD against a calendar gateway and a meeting store.
///
/// The meeting record is the source of truth; the calendar event is a derived
/// projection. Create may degrade to a synthesized event, delete never may:
/// the calendar delete has to succeed before the record is removed.
pub struct MeetingService {
    calendar: Arc<dyn CalendarGateway>,
    meetings: Arc<dyn MeetingRepository>,
    mock_fallback: bool,
}

impl MeetingService {
    /// Create a new scheduling service.
    pub fn new(calendar: Arc<dyn CalendarGateway>, meetings: Arc<dyn MeetingRepository>) -> Self {
        Self { calendar, meetings, mock_fallback: false }
    }

    /// Configure whether a failed event creation degrades to a synthesized
    /// mock event instead of failing the whole schedule call.
    pub fn with_mock_fallback(mut self, enabled: bool) -> Self {
        self.mock_fallback = enabled;
        self
    }

    /// Schedule a meeting: create the calendar event, then persist the record.
    ///
    /// # Errors
    /// Returns [`MeetSyncError::InvalidDate`] for an unparseable start time and
    /// [`MeetSyncError::Schedule`] when event creation (without fallback) or
    /// persistence fails.
    pub async fn schedule(&self, draft: MeetingDraft) -> Result<Meeting> {
        let start = parse_date(&draft.date_time)?;

        let handle = match self.create_event(&draft).await {
            Ok(handle) => handle,
            Err(err) if self.mock_fallback => {
                warn!(error = %err, "calendar event creation failed, using mock event");
                CalendarEventHandle {
                    event_id: format!("{MOCK_EVENT_ID_PREFIX}{}", Utc::now().timestamp_millis()),
                    meet_link: Some(DEFAULT_MOCK_MEET_LINK.to_string()),
                }
            }
            Err(err) => return Err(MeetSyncError::Schedule(err.to_string())),
        };

        let now = Utc::now();
        let meeting = Meeting {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            date_time: start,
            participants: draft.participants,
            status: MeetingStatus::Scheduled,
            calendar_event_id: Some(handle.event_id),
            meet_link: handle.meet_link,
            owner_id: draft.owner_id,
            created_at: now,
            updated_at: now,
        };

        if let Err(err) = self.meetings.insert(&meeting).await {
            // The calendar event already exists at this point; surface its id
            // so the orphan can be reconciled manually.
            warn!(
                error = %err,
                event_id = meeting.calendar_event_id.as_deref().unwrap_or(""),
                "meeting persistence failed after event creation"
            );
            return Err(MeetSyncError::Schedule(err.to_string()));
        }

        info!(meeting_id = %meeting.id, "meeting scheduled");
        Ok(meeting)
    }

    /// Update a meeting and its calendar event.
    ///
    /// The stored record keeps its status, meet link, owner, and creation
    /// time; everything else is replaced from the draft. A record without a
    /// calendar event id cannot be updated.
    ///
    /// # Errors
    /// Returns [`MeetSyncError::NotFound`] for an unknown meeting id,
    /// [`MeetSyncError::MissingCalendarReference`] when the record carries no
    /// event id, [`MeetSyncError::InvalidDate`] for a bad start time, and the
    /// gateway or store error otherwise.
    pub async fn update(&self, meeting_id: &str, draft: MeetingDraft) -> Result<Meeting> {
        let existing = self.load(meeting_id).await?;
        let start = parse_date(&draft.date_time)?;

        let event_id = existing.calendar_event_id.clone().ok_or_else(|| {
            MeetSyncError::MissingCalendarReference(format!(
                "meeting {meeting_id} has no calendar event"
            ))
        })?;

        self.calendar.authorize().await?;
        self.calendar.update_event(&event_id, &draft).await?;

        let updated = Meeting {
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            date_time: start,
            participants: draft.participants,
            updated_at: Utc::now(),
            ..existing
        };
        self.meetings.update(&updated).await?;

        info!(meeting_id = %updated.id, "meeting updated");
        Ok(updated)
    }

    /// Delete a meeting, removing its calendar event first.
    ///
    /// # Errors
    /// Returns [`MeetSyncError::NotFound`] for an unknown meeting id; a failed
    /// calendar delete aborts the operation and the record stays.
    pub async fn delete(&self, meeting_id: &str) -> Result<()> {
        let existing = self.load(meeting_id).await?;

        if let Some(event_id) = existing.calendar_event_id.as_deref() {
            self.calendar.authorize().await?;
            self.calendar.delete_event(event_id).await?;
        }

        self.meetings.delete(meeting_id).await?;
        info!(meeting_id, "meeting deleted");
        Ok(())
    }

    /// List meetings, newest first, optionally filtered by owner.
    pub async fn list(&self, owner_id: Option<&str>) -> Result<Vec<Meeting>> {
        self.meetings.list(owner_id).await
    }

    async fn create_event(&self, draft: &MeetingDraft) -> Result<CalendarEventHandle> {
        self.calendar.authorize().await?;
        self.calendar.create_event(draft).await
    }

    async fn load(&self, meeting_id: &str) -> Result<Meeting> {
        self.meetings
            .get(meeting_id)
            .await?
            .ok_or_else(|| MeetSyncError::NotFound(format!("meeting {meeting_id} not found")))
    }
}
