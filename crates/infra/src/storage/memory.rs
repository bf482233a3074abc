//! In-memory implementation of the MeetingRepository port.
//!
//! Mirrors the SQLite store's observable behavior (silent no-op update and
//! delete for unknown ids, newest-first listing) so either can back the
//! service without semantic drift.

use std::sync::Mutex;

use async_trait::async_trait;
use meetsync_core::MeetingRepository;
use meetsync_domain::{Meeting, MeetSyncError, Result};

/// Meeting store backed by a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryMeetingStore {
    records: Mutex<Vec<Meeting>>,
}

impl InMemoryMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeetingRepository for InMemoryMeetingStore {
    async fn insert(&self, meeting: &Meeting) -> Result<()> {
        let mut records = lock(&self.records)?;
        if records.iter().any(|record| record.id == meeting.id) {
            return Err(MeetSyncError::Persistence(format!(
                "meeting {} already exists",
                meeting.id
            )));
        }
        records.push(meeting.clone());
        Ok(())
    }

    async fn get(&self, meeting_id: &str) -> Result<Option<Meeting>> {
        let records = lock(&self.records)?;
        Ok(records.iter().find(|record| record.id == meeting_id).cloned())
    }

    async fn update(&self, meeting: &Meeting) -> Result<()> {
        let mut records = lock(&self.records)?;
        if let Some(slot) = records.iter_mut().find(|record| record.id == meeting.id) {
            *slot = meeting.clone();
        }
        Ok(())
    }

    async fn delete(&self, meeting_id: &str) -> Result<()> {
        let mut records = lock(&self.records)?;
        records.retain(|record| record.id != meeting_id);
        Ok(())
    }

    async fn list(&self, owner_id: Option<&str>) -> Result<Vec<Meeting>> {
        let records = lock(&self.records)?;
        // Reverse insertion order first so a stable sort leaves later inserts
        // ahead of earlier ones when created_at ties.
        let mut meetings: Vec<Meeting> = records
            .iter()
            .rev()
            .filter(|record| match owner_id {
                Some(owner) => record.owner_id.as_deref() == Some(owner),
                None => true,
            })
            .cloned()
            .collect();
        meetings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(meetings)
    }
}

fn lock(records: &Mutex<Vec<Meeting>>) -> Result<std::sync::MutexGuard<'_, Vec<Meeting>>> {
    records
        .lock()
        .map_err(|_| MeetSyncError::Internal("meeting store mutex poisoned".into()))
}
