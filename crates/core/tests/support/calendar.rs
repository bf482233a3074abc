//! Recording stub for the calendar gateway port.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use meetsync_core::{CalendarEventHandle, CalendarGateway};
use meetsync_domain::{MeetingDraft, MeetSyncError, Result};

/// Calendar gateway double that records every call and can be told to fail
/// any individual operation.
#[derive(Default)]
pub struct StubCalendarGateway {
    pub created: Mutex<Vec<MeetingDraft>>,
    pub updated: Mutex<Vec<(String, MeetingDraft)>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_authorize: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl StubCalendarGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create(self) -> Self {
        self.fail_create.store(true, Ordering::SeqCst);
        self
    }

    pub fn fail_delete(self) -> Self {
        self.fail_delete.store(true, Ordering::SeqCst);
        self
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().expect("created lock").len()
    }
}

#[async_trait]
impl CalendarGateway for StubCalendarGateway {
    async fn authorize(&self) -> Result<()> {
        if self.fail_authorize.load(Ordering::SeqCst) {
            return Err(MeetSyncError::Calendar("authorization refused".into()));
        }
        Ok(())
    }

    async fn create_event(&self, draft: &MeetingDraft) -> Result<CalendarEventHandle> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(MeetSyncError::Calendar("create rejected".into()));
        }
        let mut created = self.created.lock().expect("created lock");
        created.push(draft.clone());
        Ok(CalendarEventHandle {
            event_id: format!("evt-{}", created.len()),
            meet_link: Some(format!("https://meet.google.com/stub-{}", created.len())),
        })
    }

    async fn update_event(&self, event_id: &str, draft: &MeetingDraft) -> Result<()> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(MeetSyncError::Calendar("update rejected".into()));
        }
        self.updated
            .lock()
            .expect("updated lock")
            .push((event_id.to_string(), draft.clone()));
        Ok(())
    }

    async fn delete_event(&self, event_id: &str) -> Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(MeetSyncError::Calendar("delete rejected".into()));
        }
        self.deleted.lock().expect("deleted lock").push(event_id.to_string());
        Ok(())
    }
}
