//! Configuration structures
//!
//! Plain data; loading from the environment or a config file lives in the
//! infra crate. Every section has serde defaults so partial config files and
//! partial environments are fine.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MOCK_MEET_LINK;

/// Top-level application configuration, built once at process start and
/// passed into the gateway, store, and service constructors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub storage: StorageConfig,
    pub client: ClientConfig,
    pub server: ServerConfig,
}

/// Calendar gateway selection and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Target calendar identifier on the provider side.
    pub calendar_id: String,
    /// When true, the deterministic mock gateway is used and schedule-time
    /// gateway failures fall back to synthesized event data.
    pub use_mock: bool,
    /// Path to the Google credentials JSON file (real mode only).
    pub credentials_path: Option<String>,
    /// Delegated subject for domain-wide impersonation (real mode only).
    pub impersonation_email: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_id: "primary".to_string(),
            use_mock: true,
            credentials_path: None,
            impersonation_email: None,
        }
    }
}

/// Meeting store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    pub pool_size: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { db_path: "meetsync.db".to_string(), pool_size: 4 }
    }
}

/// Client meeting service mode selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Remote mode routes every operation through the callable endpoints;
    /// local mode keeps everything in process with a mock meet link.
    pub use_remote_backend: bool,
    pub backend_url: String,
    pub mock_meet_link: String,
    /// Base artificial latency for local mode, simulating network behavior.
    pub local_latency_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            use_remote_backend: false,
            backend_url: "http://127.0.0.1:8787".to_string(),
            mock_meet_link: DEFAULT_MOCK_MEET_LINK.to_string(),
            local_latency_ms: 1000,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Operational instance cap mirrored from deployment config; not
    /// interpreted by request handling.
    pub max_instances: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: "127.0.0.1:8787".to_string(), max_instances: 10 }
    }
}
