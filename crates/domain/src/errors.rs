//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for MeetSync
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MeetSyncError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Calendar operation failed: {0}")]
    Calendar(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing calendar reference: {0}")]
    MissingCalendarReference(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Failed to schedule meeting: {0}")]
    Schedule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for MeetSync operations
pub type Result<T> = std::result::Result<T, MeetSyncError>;
