use std::time::Duration;

use meetsync_domain::MeetSyncError;
use tracing::{info, warn};

/// Log the outcome of an endpoint execution with structured fields.
///
/// `command` is a logical endpoint identifier (e.g. `"meetings::schedule"`).
/// Callers must avoid forwarding sensitive values in it.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `MeetSyncError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &MeetSyncError) -> &'static str {
    match error {
        MeetSyncError::InvalidDate(_) => "invalid_date",
        MeetSyncError::Calendar(_) => "calendar",
        MeetSyncError::NotFound(_) => "not_found",
        MeetSyncError::MissingCalendarReference(_) => "missing_calendar_reference",
        MeetSyncError::Persistence(_) => "persistence",
        MeetSyncError::Schedule(_) => "schedule",
        MeetSyncError::Config(_) => "config",
        MeetSyncError::Network(_) => "network",
        MeetSyncError::Internal(_) => "internal",
    }
}
