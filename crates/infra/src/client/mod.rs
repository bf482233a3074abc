//! Client-side meeting backends
//!
//! The client API is a single trait with two implementations: a remote
//! backend that talks to the HTTP endpoints and a local backend that keeps
//! everything in process. A configuration flag selects between them, so
//! calling code never branches on the mode itself.

pub mod local;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;
use meetsync_domain::{ClientConfig, Meeting, MeetingDraft, Result};
use tracing::info;

pub use local::LocalMeetingBackend;
pub use remote::RemoteMeetingBackend;

/// Client-facing meeting operations.
#[async_trait]
pub trait MeetingBackend: Send + Sync {
    /// Schedule a meeting and return the stored record.
    async fn schedule_meeting(&self, draft: MeetingDraft) -> Result<Meeting>;

    /// List meetings, newest first, optionally for one user.
    async fn get_meetings(&self, user_id: Option<&str>) -> Result<Vec<Meeting>>;

    /// Update a meeting and return the stored record.
    async fn update_meeting(&self, meeting_id: &str, draft: MeetingDraft) -> Result<Meeting>;

    /// Delete a meeting.
    async fn delete_meeting(&self, meeting_id: &str) -> Result<()>;
}

/// Build the meeting backend selected by configuration.
///
/// # Errors
/// Returns `MeetSyncError::Internal` if the remote backend's HTTP client
/// cannot be built.
pub fn create_backend(config: &ClientConfig) -> Result<Arc<dyn MeetingBackend>> {
    if config.use_remote_backend {
        info!(backend_url = %config.backend_url, "using remote meeting backend");
        Ok(Arc::new(RemoteMeetingBackend::new(config.backend_url.clone())?))
    } else {
        info!("using local meeting backend");
        Ok(Arc::new(LocalMeetingBackend::new(
            config.mock_meet_link.clone(),
            config.local_latency_ms,
        )))
    }
}
