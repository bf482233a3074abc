//! SQLite-backed implementation of the MeetingRepository port.
//!
//! All queries run on the blocking thread pool; timestamps are stored as unix
//! epoch milliseconds and participants as a JSON array.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use meetsync_core::MeetingRepository;
use meetsync_domain::{Meeting, MeetingStatus, MeetSyncError, Result};
use rusqlite::{params, Row};
use tracing::debug;

use super::manager::SqlitePool;
use crate::errors::InfraError;

const MEETING_COLUMNS: &str = "id, title, description, start_ts, participants, status, \
     calendar_event_id, meet_link, owner_id, created_at, updated_at";

/// SQLite implementation of MeetingRepository.
pub struct SqliteMeetingRepository {
    pool: SqlitePool,
}

impl SqliteMeetingRepository {
    /// Create a new meeting repository on the shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRepository for SqliteMeetingRepository {
    async fn insert(&self, meeting: &Meeting) -> Result<()> {
        let pool = self.pool.clone();
        let meeting = meeting.clone();

        run_blocking(move || {
            let conn = pool.get().map_err(InfraError::from)?;
            let participants = encode_participants(&meeting.participants)?;
            conn.execute(
                "INSERT INTO meetings (id, title, description, start_ts, participants, status,
                     calendar_event_id, meet_link, owner_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    meeting.id,
                    meeting.title,
                    meeting.description,
                    meeting.date_time.timestamp_millis(),
                    participants,
                    status_to_str(meeting.status),
                    meeting.calendar_event_id,
                    meeting.meet_link,
                    meeting.owner_id,
                    meeting.created_at.timestamp_millis(),
                    meeting.updated_at.timestamp_millis(),
                ],
            )
            .map_err(InfraError::from)?;
            debug!(meeting_id = %meeting.id, "meeting inserted");
            Ok(())
        })
        .await
    }

    async fn get(&self, meeting_id: &str) -> Result<Option<Meeting>> {
        let pool = self.pool.clone();
        let meeting_id = meeting_id.to_string();

        run_blocking(move || {
            let conn = pool.get().map_err(InfraError::from)?;
            let mut stmt = conn
                .prepare(&format!("SELECT {MEETING_COLUMNS} FROM meetings WHERE id = ?1"))
                .map_err(InfraError::from)?;

            let mut rows =
                stmt.query_map(params![meeting_id], map_meeting_row).map_err(InfraError::from)?;

            match rows.next() {
                Some(row) => Ok(Some(row.map_err(InfraError::from)?)),
                None => Ok(None),
            }
        })
        .await
    }

    async fn update(&self, meeting: &Meeting) -> Result<()> {
        let pool = self.pool.clone();
        let meeting = meeting.clone();

        run_blocking(move || {
            let conn = pool.get().map_err(InfraError::from)?;
            let participants = encode_participants(&meeting.participants)?;
            conn.execute(
                "UPDATE meetings SET title = ?2, description = ?3, start_ts = ?4,
                     participants = ?5, status = ?6, calendar_event_id = ?7, meet_link = ?8,
                     owner_id = ?9, updated_at = ?10
                 WHERE id = ?1",
                params![
                    meeting.id,
                    meeting.title,
                    meeting.description,
                    meeting.date_time.timestamp_millis(),
                    participants,
                    status_to_str(meeting.status),
                    meeting.calendar_event_id,
                    meeting.meet_link,
                    meeting.owner_id,
                    meeting.updated_at.timestamp_millis(),
                ],
            )
            .map_err(InfraError::from)?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, meeting_id: &str) -> Result<()> {
        let pool = self.pool.clone();
        let meeting_id = meeting_id.to_string();

        run_blocking(move || {
            let conn = pool.get().map_err(InfraError::from)?;
            conn.execute("DELETE FROM meetings WHERE id = ?1", params![meeting_id])
                .map_err(InfraError::from)?;
            Ok(())
        })
        .await
    }

    async fn list(&self, owner_id: Option<&str>) -> Result<Vec<Meeting>> {
        let pool = self.pool.clone();
        let owner_id = owner_id.map(str::to_string);

        run_blocking(move || {
            let conn = pool.get().map_err(InfraError::from)?;

            // rowid breaks ties for meetings created in the same millisecond
            let meetings = match owner_id {
                Some(owner) => {
                    let mut stmt = conn
                        .prepare(&format!(
                            "SELECT {MEETING_COLUMNS} FROM meetings WHERE owner_id = ?1
                             ORDER BY created_at DESC, rowid DESC"
                        ))
                        .map_err(InfraError::from)?;
                    let rows = stmt
                        .query_map(params![owner], map_meeting_row)
                        .map_err(InfraError::from)?;
                    collect_meetings(rows)?
                }
                None => {
                    let mut stmt = conn
                        .prepare(&format!(
                            "SELECT {MEETING_COLUMNS} FROM meetings
                             ORDER BY created_at DESC, rowid DESC"
                        ))
                        .map_err(InfraError::from)?;
                    let rows =
                        stmt.query_map(params![], map_meeting_row).map_err(InfraError::from)?;
                    collect_meetings(rows)?
                }
            };

            Ok(meetings)
        })
        .await
    }
}

// ====== Helper Functions ======

async fn run_blocking<T, F>(work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| MeetSyncError::Internal(format!("blocking task failed: {e}")))?
}

fn map_meeting_row(row: &Row<'_>) -> rusqlite::Result<Meeting> {
    let participants_json: String = row.get(4)?;
    let participants = serde_json::from_str(&participants_json).unwrap_or_default();

    let status_raw: String = row.get(5)?;

    Ok(Meeting {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        date_time: timestamp_from_millis(row.get(3)?),
        participants,
        status: status_from_str(&status_raw),
        calendar_event_id: row.get(6)?,
        meet_link: row.get(7)?,
        owner_id: row.get(8)?,
        created_at: timestamp_from_millis(row.get(9)?),
        updated_at: timestamp_from_millis(row.get(10)?),
    })
}

fn collect_meetings(
    rows: impl Iterator<Item = rusqlite::Result<Meeting>>,
) -> Result<Vec<Meeting>> {
    let mut meetings = Vec::new();
    for row in rows {
        meetings.push(row.map_err(InfraError::from)?);
    }
    Ok(meetings)
}

fn encode_participants(participants: &[String]) -> Result<String> {
    serde_json::to_string(participants).map_err(|e| InfraError::from(e).into())
}

fn timestamp_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

fn status_to_str(status: MeetingStatus) -> &'static str {
    match status {
        MeetingStatus::Scheduled => "scheduled",
        MeetingStatus::Completed => "completed",
        MeetingStatus::Cancelled => "cancelled",
    }
}

fn status_from_str(raw: &str) -> MeetingStatus {
    match raw {
        "completed" => MeetingStatus::Completed,
        "cancelled" => MeetingStatus::Cancelled,
        _ => MeetingStatus::Scheduled,
    }
}
