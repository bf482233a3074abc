//! Application context - dependency injection container

use std::sync::Arc;

use meetsync_core::{CalendarGateway, MeetingRepository, MeetingService};
use meetsync_domain::{Config, Result};
use meetsync_infra::calendar::create_gateway;
use meetsync_infra::config as config_loader;
use meetsync_infra::storage::{DbManager, SqliteMeetingRepository};
use tracing::info;

/// Application context - holds all services and dependencies.
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub calendar: Arc<dyn CalendarGateway>,
    pub meetings: Arc<dyn MeetingRepository>,
    pub service: Arc<MeetingService>,
}

impl AppContext {
    /// Build the context from the default configuration sources.
    ///
    /// # Errors
    /// Returns an error when configuration loading, database setup, or
    /// gateway construction fails.
    pub fn new() -> Result<Self> {
        Self::with_config(config_loader::load()?)
    }

    /// Build the context from an explicit configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.storage.db_path, config.storage.pool_size)?);
        db.run_migrations()?;

        let meetings: Arc<dyn MeetingRepository> =
            Arc::new(SqliteMeetingRepository::new(db.pool().clone()));
        let calendar = create_gateway(&config.calendar)?;

        let service = Arc::new(
            MeetingService::new(calendar.clone(), meetings.clone())
                .with_mock_fallback(config.calendar.use_mock),
        );

        info!(
            db_path = %config.storage.db_path,
            use_mock = config.calendar.use_mock,
            "application context initialised"
        );

        Ok(Self { config, db, calendar, meetings, service })
    }
}
