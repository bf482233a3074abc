//! Conversions from external infrastructure errors into domain errors.

use meetsync_domain::MeetSyncError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MeetSyncError);

impl From<InfraError> for MeetSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MeetSyncError> for InfraError {
    fn from(value: MeetSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMeetSyncError {
    fn into_meetsync(self) -> MeetSyncError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → MeetSyncError */
/* -------------------------------------------------------------------------- */

impl IntoMeetSyncError for SqlError {
    fn into_meetsync(self) -> MeetSyncError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        MeetSyncError::Persistence("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        MeetSyncError::Persistence("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 1555) | (ErrorCode::ConstraintViolation, 2067) => {
                        MeetSyncError::Persistence("unique constraint violation".into())
                    }
                    _ => MeetSyncError::Persistence(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => {
                MeetSyncError::NotFound("no rows returned by query".into())
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                MeetSyncError::Persistence(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                MeetSyncError::Persistence(format!("invalid column type: {ty}"))
            }
            RE::InvalidQuery => MeetSyncError::Persistence("invalid SQL query".into()),
            other => MeetSyncError::Persistence(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_meetsync())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → MeetSyncError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(MeetSyncError::Persistence(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MeetSyncError */
/* -------------------------------------------------------------------------- */

impl IntoMeetSyncError for HttpError {
    fn into_meetsync(self) -> MeetSyncError {
        if self.is_timeout() {
            return MeetSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return MeetSyncError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message = format!(
                "HTTP {} {}",
                code,
                status.canonical_reason().unwrap_or("unknown status")
            );

            return match code {
                404 => MeetSyncError::NotFound(message),
                _ => MeetSyncError::Network(message),
            };
        }

        MeetSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_meetsync())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → MeetSyncError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(MeetSyncError::Internal(format!("JSON encoding failure: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
