//! Calendar gateway implementations

pub mod google;
pub mod mock;

use std::sync::Arc;

use meetsync_core::CalendarGateway;
use meetsync_domain::{CalendarConfig, Result};
use tracing::info;

pub use google::{GoogleCalendarGateway, GoogleCredentials};
pub use mock::MockCalendarGateway;

/// Build the calendar gateway selected by configuration.
///
/// Mock mode needs no credentials; real mode reads the Google credentials
/// file named by `credentials_path`.
///
/// # Errors
/// Returns `MeetSyncError::Config` when real mode is selected without usable
/// credentials.
pub fn create_gateway(config: &CalendarConfig) -> Result<Arc<dyn CalendarGateway>> {
    if config.use_mock {
        info!("using mock calendar gateway");
        return Ok(Arc::new(MockCalendarGateway::new()));
    }

    let credentials = GoogleCredentials::from_config(config)?;
    let gateway = GoogleCalendarGateway::new(credentials, config.calendar_id.clone())?;
    info!(calendar_id = %config.calendar_id, "using google calendar gateway");
    Ok(Arc::new(gateway))
}
