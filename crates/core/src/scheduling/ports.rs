//! Port interfaces for meeting scheduling
//!
//! The service orchestrates through these traits; concrete calendar providers
//! and meeting stores live in the infra crate.

use async_trait::async_trait;
use meetsync_domain::{Meeting, MeetingDraft, Result};

/// Provider-side handle returned by event creation.
///
/// `meet_link` is optional: not every provider response carries a resolved
/// conferencing entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventHandle {
    pub event_id: String,
    pub meet_link: Option<String>,
}

/// Trait for calendar provider operations.
///
/// `authorize` is called before every mutating operation; implementations
/// that need no credentials simply return `Ok(())`.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Ensure the gateway holds valid credentials.
    async fn authorize(&self) -> Result<()>;

    /// Create a calendar event for the draft and return the provider handle.
    async fn create_event(&self, draft: &MeetingDraft) -> Result<CalendarEventHandle>;

    /// Rewrite an existing event to match the draft.
    async fn update_event(&self, event_id: &str, draft: &MeetingDraft) -> Result<()>;

    /// Delete an event by provider id.
    async fn delete_event(&self, event_id: &str) -> Result<()>;
}

/// Trait for meeting persistence.
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Persist a new meeting record.
    async fn insert(&self, meeting: &Meeting) -> Result<()>;

    /// Fetch a meeting by id.
    async fn get(&self, meeting_id: &str) -> Result<Option<Meeting>>;

    /// Overwrite an existing meeting record.
    async fn update(&self, meeting: &Meeting) -> Result<()>;

    /// Remove a meeting record.
    async fn delete(&self, meeting_id: &str) -> Result<()>;

    /// List meetings, newest first, optionally filtered by owner.
    async fn list(&self, owner_id: Option<&str>) -> Result<Vec<Meeting>>;
}
