//! HTTP meeting backend.
//!
//! Routes every operation through the callable endpoints and decodes their
//! `{success, error}` envelopes back into domain errors.

use std::time::Duration;

use async_trait::async_trait;
use meetsync_domain::protocol::{
    AckResponse, DeleteMeetingRequest, GetMeetingsRequest, GetMeetingsResponse,
    ScheduleMeetingResponse, UpdateMeetingRequest, UpdateMeetingResponse,
};
use meetsync_domain::{Meeting, MeetingDraft, MeetSyncError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::MeetingBackend;
use crate::errors::InfraError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RemoteMeetingBackend {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteMeetingBackend {
    /// Create a remote backend against the given base URL.
    ///
    /// # Errors
    /// Returns `MeetSyncError::Internal` if the HTTP client cannot be built.
    pub fn new(base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| MeetSyncError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "calling remote endpoint");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(InfraError::from)?;

        response.json::<Resp>().await.map_err(|e| InfraError::from(e).into())
    }
}

fn envelope_error(error: Option<String>, operation: &str) -> MeetSyncError {
    MeetSyncError::Internal(
        error.unwrap_or_else(|| format!("{operation} failed without an error message")),
    )
}

#[async_trait]
impl MeetingBackend for RemoteMeetingBackend {
    async fn schedule_meeting(&self, draft: MeetingDraft) -> Result<Meeting> {
        let response: ScheduleMeetingResponse = self.post("scheduleMeeting", &draft).await?;
        if !response.success {
            return Err(MeetSyncError::Schedule(
                response.error.unwrap_or_else(|| "scheduling failed".to_string()),
            ));
        }
        response
            .meeting
            .ok_or_else(|| MeetSyncError::Internal("schedule response carried no meeting".into()))
    }

    async fn get_meetings(&self, user_id: Option<&str>) -> Result<Vec<Meeting>> {
        let request = GetMeetingsRequest { user_id: user_id.map(str::to_string) };
        let response: GetMeetingsResponse = self.post("getMeetings", &request).await?;
        if !response.success {
            return Err(envelope_error(response.error, "getMeetings"));
        }
        Ok(response.meetings)
    }

    async fn update_meeting(&self, meeting_id: &str, draft: MeetingDraft) -> Result<Meeting> {
        let request =
            UpdateMeetingRequest { meeting_id: meeting_id.to_string(), meeting_data: draft };
        let response: UpdateMeetingResponse = self.post("updateMeeting", &request).await?;
        if !response.success {
            return Err(envelope_error(response.error, "updateMeeting"));
        }
        response
            .meeting
            .ok_or_else(|| MeetSyncError::Internal("update response carried no meeting".into()))
    }

    async fn delete_meeting(&self, meeting_id: &str) -> Result<()> {
        let request = DeleteMeetingRequest { meeting_id: meeting_id.to_string() };
        let response: AckResponse = self.post("deleteMeeting", &request).await?;
        if !response.success {
            return Err(envelope_error(response.error, "deleteMeeting"));
        }
        Ok(())
    }
}
