//! Deterministic in-process calendar gateway.
//!
//! Used for development and offline operation: every call succeeds, event ids
//! are synthesized with a stable prefix, and the meet link is a fixed mock.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use meetsync_core::{CalendarEventHandle, CalendarGateway};
use meetsync_domain::constants::{DEFAULT_MOCK_MEET_LINK, MOCK_EVENT_ID_PREFIX};
use meetsync_domain::datetime::format_date_range;
use meetsync_domain::{MeetingDraft, Result};
use tracing::debug;

/// Calendar gateway that never leaves the process.
#[derive(Default)]
pub struct MockCalendarGateway {
    counter: AtomicU64,
}

impl MockCalendarGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CalendarGateway for MockCalendarGateway {
    async fn authorize(&self) -> Result<()> {
        Ok(())
    }

    async fn create_event(&self, draft: &MeetingDraft) -> Result<CalendarEventHandle> {
        // Validate the window even though no provider is involved, so mock
        // and real mode reject the same inputs.
        let window = format_date_range(&draft.date_time)?;

        let sequence = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let event_id = format!("{MOCK_EVENT_ID_PREFIX}{sequence}");
        debug!(%event_id, start = %window.start, "mock calendar event created");

        Ok(CalendarEventHandle {
            event_id,
            meet_link: Some(DEFAULT_MOCK_MEET_LINK.to_string()),
        })
    }

    async fn update_event(&self, event_id: &str, draft: &MeetingDraft) -> Result<()> {
        format_date_range(&draft.date_time)?;
        debug!(%event_id, "mock calendar event updated");
        Ok(())
    }

    async fn delete_event(&self, event_id: &str) -> Result<()> {
        debug!(%event_id, "mock calendar event deleted");
        Ok(())
    }
}
