//! Google Calendar v3 gateway.
//!
//! Talks to the events API with an OAuth refresh-token flow. Every created
//! event requests a Google Meet conference entry point and default reminders
//! (email 24h before, popup 15 minutes before). Attendee notifications are
//! always sent (`sendUpdates=all`).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use meetsync_core::{CalendarEventHandle, CalendarGateway};
use meetsync_domain::constants::{REMINDER_EMAIL_MINUTES, REMINDER_POPUP_MINUTES};
use meetsync_domain::datetime::format_date_range;
use meetsync_domain::{CalendarConfig, MeetingDraft, MeetSyncError, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::InfraError;

const DEFAULT_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// OAuth credentials for the calendar API.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    /// Delegated subject for domain-wide impersonation, if configured.
    #[serde(default)]
    pub subject: Option<String>,
}

impl GoogleCredentials {
    /// Load credentials from the JSON file named in the calendar config.
    ///
    /// # Errors
    /// Returns `MeetSyncError::Config` when no path is configured or the file
    /// cannot be read or parsed.
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        let path = config.credentials_path.as_deref().ok_or_else(|| {
            MeetSyncError::Config("MEETSYNC_CREDENTIALS_PATH is required for real mode".into())
        })?;

        let contents = std::fs::read_to_string(path).map_err(|e| {
            MeetSyncError::Config(format!("Failed to read credentials file {path}: {e}"))
        })?;

        let mut credentials: GoogleCredentials = serde_json::from_str(&contents)
            .map_err(|e| MeetSyncError::Config(format!("Invalid credentials file: {e}")))?;

        if credentials.subject.is_none() {
            credentials.subject = config.impersonation_email.clone();
        }
        Ok(credentials)
    }
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Gateway backed by the Google Calendar v3 REST API.
pub struct GoogleCalendarGateway {
    http: reqwest::Client,
    credentials: GoogleCredentials,
    calendar_id: String,
    token_endpoint: String,
    api_base: String,
    token: RwLock<Option<AccessToken>>,
}

impl GoogleCalendarGateway {
    /// Create a gateway against the production Google endpoints.
    ///
    /// # Errors
    /// Returns `MeetSyncError::Internal` if the HTTP client cannot be built.
    pub fn new(credentials: GoogleCredentials, calendar_id: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| MeetSyncError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            credentials,
            calendar_id,
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            token: RwLock::new(None),
        })
    }

    /// Override the token and API endpoints. Used by integration tests.
    pub fn with_endpoints(
        mut self,
        token_endpoint: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        self.token_endpoint = token_endpoint.into();
        self.api_base = api_base.into();
        self
    }

    async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.expires_at > Utc::now() {
                return Ok(token.value.clone());
            }
        }
        self.refresh_token().await
    }

    async fn refresh_token(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            expires_in: i64,
        }

        let mut form = vec![
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];
        if let Some(subject) = self.credentials.subject.as_deref() {
            form.push(("subject", subject));
        }

        let response = self
            .http
            .post(&self.token_endpoint)
            .form(&form)
            .send()
            .await
            .map_err(InfraError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MeetSyncError::Calendar(format!(
                "token refresh failed: HTTP {status}: {body}"
            )));
        }

        let token: TokenResponse = response.json().await.map_err(InfraError::from)?;
        let expires_at =
            Utc::now() + chrono::Duration::seconds(token.expires_in - TOKEN_EXPIRY_MARGIN_SECS);
        let value = token.access_token.clone();
        *self.token.write().await = Some(AccessToken { value: token.access_token, expires_at });

        debug!(%expires_at, "access token refreshed");
        Ok(value)
    }

    fn event_body(&self, draft: &MeetingDraft, with_conference: bool) -> Result<Value> {
        let window = format_date_range(&draft.date_time)?;

        let attendees: Vec<Value> = draft
            .participants
            .iter()
            .map(|email| json!({ "email": email }))
            .collect();

        let mut body = json!({
            "summary": draft.title,
            "description": draft.description.clone().unwrap_or_default(),
            "start": {
                "dateTime": window.start.to_rfc3339_opts(SecondsFormat::Secs, true),
                "timeZone": "UTC",
            },
            "end": {
                "dateTime": window.end.to_rfc3339_opts(SecondsFormat::Secs, true),
                "timeZone": "UTC",
            },
            "attendees": attendees,
            "reminders": {
                "useDefault": false,
                "overrides": [
                    { "method": "email", "minutes": REMINDER_EMAIL_MINUTES },
                    { "method": "popup", "minutes": REMINDER_POPUP_MINUTES },
                ],
            },
        });

        if with_conference {
            body["conferenceData"] = json!({
                "createRequest": {
                    "requestId": Uuid::new_v4().to_string(),
                    "conferenceSolutionKey": { "type": "hangoutsMeet" },
                },
            });
        }

        Ok(body)
    }

    fn events_url(&self, event_id: Option<&str>) -> String {
        match event_id {
            Some(id) => format!("{}/calendars/{}/events/{}", self.api_base, self.calendar_id, id),
            None => format!("{}/calendars/{}/events", self.api_base, self.calendar_id),
        }
    }
}

/// Subset of the events API response this gateway reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    hangout_link: Option<String>,
    #[serde(default)]
    conference_data: Option<ConferenceData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceData {
    #[serde(default)]
    entry_points: Vec<EntryPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryPoint {
    #[serde(default)]
    entry_point_type: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

impl EventResponse {
    fn meet_link(&self) -> Option<String> {
        if let Some(link) = &self.hangout_link {
            return Some(link.clone());
        }
        self.conference_data.as_ref().and_then(|data| {
            data.entry_points
                .iter()
                .find(|entry| entry.entry_point_type.as_deref() == Some("video"))
                .and_then(|entry| entry.uri.clone())
        })
    }
}

#[async_trait]
impl CalendarGateway for GoogleCalendarGateway {
    async fn authorize(&self) -> Result<()> {
        self.access_token().await.map(|_| ())
    }

    async fn create_event(&self, draft: &MeetingDraft) -> Result<CalendarEventHandle> {
        let token = self.access_token().await?;
        let body = self.event_body(draft, true)?;

        let response = self
            .http
            .post(self.events_url(None))
            .bearer_auth(token)
            .query(&[("conferenceDataVersion", "1"), ("sendUpdates", "all")])
            .json(&body)
            .send()
            .await
            .map_err(InfraError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MeetSyncError::Calendar(format!(
                "event creation failed: HTTP {status}: {body}"
            )));
        }

        let event: EventResponse = response.json().await.map_err(InfraError::from)?;
        let event_id = event
            .id
            .clone()
            .ok_or_else(|| MeetSyncError::Calendar("event response carried no id".into()))?;

        debug!(%event_id, "calendar event created");
        Ok(CalendarEventHandle { event_id, meet_link: event.meet_link() })
    }

    async fn update_event(&self, event_id: &str, draft: &MeetingDraft) -> Result<()> {
        let token = self.access_token().await?;
        let body = self.event_body(draft, false)?;

        let response = self
            .http
            .put(self.events_url(Some(event_id)))
            .bearer_auth(token)
            .query(&[("sendUpdates", "all")])
            .json(&body)
            .send()
            .await
            .map_err(InfraError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MeetSyncError::Calendar(format!(
                "event update failed: HTTP {status}: {body}"
            )));
        }

        debug!(%event_id, "calendar event updated");
        Ok(())
    }

    async fn delete_event(&self, event_id: &str) -> Result<()> {
        let token = self.access_token().await?;

        let response = self
            .http
            .delete(self.events_url(Some(event_id)))
            .bearer_auth(token)
            .query(&[("sendUpdates", "all")])
            .send()
            .await
            .map_err(InfraError::from)?;

        // An already-removed event still answers with an error status; the
        // caller decides what to do with the record, so it is not masked here.
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MeetSyncError::Calendar(format!(
                "event deletion failed: HTTP {status}: {body}"
            )));
        }

        debug!(%event_id, "calendar event deleted");
        Ok(())
    }
}
