//! In-memory meeting repository double.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use meetsync_core::MeetingRepository;
use meetsync_domain::{Meeting, MeetSyncError, Result};

/// Meeting store double backed by a `Vec`, newest-first on list.
#[derive(Default)]
pub struct InMemoryMeetings {
    pub records: Mutex<Vec<Meeting>>,
    pub fail_insert: AtomicBool,
}

impl InMemoryMeetings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_insert(self) -> Self {
        self.fail_insert.store(true, Ordering::SeqCst);
        self
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("records lock").len()
    }

    pub fn seed(&self, meeting: Meeting) {
        self.records.lock().expect("records lock").push(meeting);
    }
}

#[async_trait]
impl MeetingRepository for InMemoryMeetings {
    async fn insert(&self, meeting: &Meeting) -> Result<()> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(MeetSyncError::Persistence("insert refused".into()));
        }
        self.records.lock().expect("records lock").push(meeting.clone());
        Ok(())
    }

    async fn get(&self, meeting_id: &str) -> Result<Option<Meeting>> {
        Ok(self
            .records
            .lock()
            .expect("records lock")
            .iter()
            .find(|meeting| meeting.id == meeting_id)
            .cloned())
    }

    async fn update(&self, meeting: &Meeting) -> Result<()> {
        let mut records = self.records.lock().expect("records lock");
        if let Some(slot) = records.iter_mut().find(|record| record.id == meeting.id) {
            *slot = meeting.clone();
        }
        Ok(())
    }

    async fn delete(&self, meeting_id: &str) -> Result<()> {
        self.records
            .lock()
            .expect("records lock")
            .retain(|meeting| meeting.id != meeting_id);
        Ok(())
    }

    async fn list(&self, owner_id: Option<&str>) -> Result<Vec<Meeting>> {
        let records = self.records.lock().expect("records lock");
        let mut meetings: Vec<Meeting> = records
            .iter()
            .filter(|meeting| match owner_id {
                Some(owner) => meeting.owner_id.as_deref() == Some(owner),
                None => true,
            })
            .cloned()
            .collect();
        meetings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(meetings)
    }
}
