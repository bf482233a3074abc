//! Configuration loader
//!
//! Loads application configuration from a config file and environment
//! variables.
//!
//! ## Loading Strategy
//! 1. Starts from built-in defaults
//! 2. Merges a config file if one is found (JSON or TOML)
//! 3. Applies environment variable overrides on top
//!
//! ## Environment Variables
//! - `MEETSYNC_CALENDAR_ID`: Target calendar on the provider side
//! - `MEETSYNC_USE_MOCK_CALENDAR`: Use the mock gateway (true/false)
//! - `MEETSYNC_CREDENTIALS_PATH`: Path to Google credentials JSON
//! - `MEETSYNC_IMPERSONATION_EMAIL`: Delegated subject for impersonation
//! - `MEETSYNC_DB_PATH`: Meeting database file path
//! - `MEETSYNC_DB_POOL_SIZE`: Connection pool size
//! - `MEETSYNC_USE_REMOTE_BACKEND`: Client routes through HTTP (true/false)
//! - `MEETSYNC_BACKEND_URL`: Base URL of the remote backend
//! - `MEETSYNC_MOCK_MEET_LINK`: Conferencing link used by the local backend
//! - `MEETSYNC_LOCAL_LATENCY_MS`: Base artificial latency for local mode
//! - `MEETSYNC_BIND_ADDR`: Server listen address
//! - `MEETSYNC_MAX_INSTANCES`: Operational instance cap
//!
//! ## File Locations
//! The loader probes `./config.{json,toml}` and `./meetsync.{json,toml}` in
//! the working directory, its parents (up to 2 levels), and next to the
//! executable.

use std::path::{Path, PathBuf};

use meetsync_domain::{Config, MeetSyncError, Result};

/// Load configuration with the default layering strategy.
///
/// # Errors
/// Returns `MeetSyncError::Config` if a config file exists but cannot be
/// parsed, or an environment override has an invalid value.
pub fn load() -> Result<Config> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, starting from defaults");
            Config::default()
        }
    };

    apply_env_overrides(base)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MeetSyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MeetSyncError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MeetSyncError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MeetSyncError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content.
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `MeetSyncError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MeetSyncError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MeetSyncError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MeetSyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Apply `MEETSYNC_*` environment variable overrides to a base config.
///
/// # Errors
/// Returns `MeetSyncError::Config` for numeric overrides that do not parse.
fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Ok(value) = std::env::var("MEETSYNC_CALENDAR_ID") {
        config.calendar.calendar_id = value;
    }
    config.calendar.use_mock = env_bool("MEETSYNC_USE_MOCK_CALENDAR", config.calendar.use_mock);
    if let Ok(value) = std::env::var("MEETSYNC_CREDENTIALS_PATH") {
        config.calendar.credentials_path = Some(value);
    }
    if let Ok(value) = std::env::var("MEETSYNC_IMPERSONATION_EMAIL") {
        config.calendar.impersonation_email = Some(value);
    }

    if let Ok(value) = std::env::var("MEETSYNC_DB_PATH") {
        config.storage.db_path = value;
    }
    if let Some(value) = env_parse::<u32>("MEETSYNC_DB_POOL_SIZE")? {
        config.storage.pool_size = value;
    }

    config.client.use_remote_backend =
        env_bool("MEETSYNC_USE_REMOTE_BACKEND", config.client.use_remote_backend);
    if let Ok(value) = std::env::var("MEETSYNC_BACKEND_URL") {
        config.client.backend_url = value;
    }
    if let Ok(value) = std::env::var("MEETSYNC_MOCK_MEET_LINK") {
        config.client.mock_meet_link = value;
    }
    if let Some(value) = env_parse::<u64>("MEETSYNC_LOCAL_LATENCY_MS")? {
        config.client.local_latency_ms = value;
    }

    if let Ok(value) = std::env::var("MEETSYNC_BIND_ADDR") {
        config.server.bind_addr = value;
    }
    if let Some(value) = env_parse::<u32>("MEETSYNC_MAX_INSTANCES")? {
        config.server.max_instances = value;
    }

    Ok(config)
}

/// Probe multiple paths for configuration files.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("meetsync.json"),
            cwd.join("meetsync.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("meetsync.json"),
                exe_dir.join("meetsync.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Parse a numeric environment variable, `None` when unset.
///
/// # Errors
/// Returns `MeetSyncError::Config` if the value does not parse.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| MeetSyncError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable.
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_meetsync_env() {
        for key in [
            "MEETSYNC_CALENDAR_ID",
            "MEETSYNC_USE_MOCK_CALENDAR",
            "MEETSYNC_CREDENTIALS_PATH",
            "MEETSYNC_IMPERSONATION_EMAIL",
            "MEETSYNC_DB_PATH",
            "MEETSYNC_DB_POOL_SIZE",
            "MEETSYNC_USE_REMOTE_BACKEND",
            "MEETSYNC_BACKEND_URL",
            "MEETSYNC_MOCK_MEET_LINK",
            "MEETSYNC_LOCAL_LATENCY_MS",
            "MEETSYNC_BIND_ADDR",
            "MEETSYNC_MAX_INSTANCES",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("TEST_BOOL_TRUE_1", "1");
        std::env::set_var("TEST_BOOL_TRUE_TRUE", "true");
        std::env::set_var("TEST_BOOL_TRUE_YES", "yes");
        std::env::set_var("TEST_BOOL_TRUE_ON", "on");
        std::env::set_var("TEST_BOOL_TRUE_UPPER", "TRUE");

        assert!(env_bool("TEST_BOOL_TRUE_1", false));
        assert!(env_bool("TEST_BOOL_TRUE_TRUE", false));
        assert!(env_bool("TEST_BOOL_TRUE_YES", false));
        assert!(env_bool("TEST_BOOL_TRUE_ON", false));
        assert!(env_bool("TEST_BOOL_TRUE_UPPER", false));

        std::env::set_var("TEST_BOOL_FALSE_0", "0");
        std::env::set_var("TEST_BOOL_FALSE_FALSE", "false");
        std::env::set_var("TEST_BOOL_FALSE_NO", "no");
        std::env::set_var("TEST_BOOL_FALSE_OFF", "off");

        assert!(!env_bool("TEST_BOOL_FALSE_0", true));
        assert!(!env_bool("TEST_BOOL_FALSE_FALSE", true));
        assert!(!env_bool("TEST_BOOL_FALSE_NO", true));
        assert!(!env_bool("TEST_BOOL_FALSE_OFF", true));

        std::env::remove_var("TEST_BOOL_MISSING");
        assert!(env_bool("TEST_BOOL_MISSING", true));
        assert!(!env_bool("TEST_BOOL_MISSING", false));

        // Cleanup
        for key in [
            "TEST_BOOL_TRUE_1",
            "TEST_BOOL_TRUE_TRUE",
            "TEST_BOOL_TRUE_YES",
            "TEST_BOOL_TRUE_ON",
            "TEST_BOOL_TRUE_UPPER",
            "TEST_BOOL_FALSE_0",
            "TEST_BOOL_FALSE_FALSE",
            "TEST_BOOL_FALSE_NO",
            "TEST_BOOL_FALSE_OFF",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_meetsync_env();

        std::env::set_var("MEETSYNC_CALENDAR_ID", "team@example.com");
        std::env::set_var("MEETSYNC_USE_MOCK_CALENDAR", "false");
        std::env::set_var("MEETSYNC_DB_PATH", "/tmp/meetings.db");
        std::env::set_var("MEETSYNC_DB_POOL_SIZE", "8");
        std::env::set_var("MEETSYNC_USE_REMOTE_BACKEND", "yes");
        std::env::set_var("MEETSYNC_LOCAL_LATENCY_MS", "250");

        let config = apply_env_overrides(Config::default()).expect("overrides applied");
        assert_eq!(config.calendar.calendar_id, "team@example.com");
        assert!(!config.calendar.use_mock);
        assert_eq!(config.storage.db_path, "/tmp/meetings.db");
        assert_eq!(config.storage.pool_size, 8);
        assert!(config.client.use_remote_backend);
        assert_eq!(config.client.local_latency_ms, 250);
        // Untouched values keep their defaults
        assert_eq!(config.server.bind_addr, "127.0.0.1:8787");

        clear_meetsync_env();
    }

    #[test]
    fn test_env_override_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_meetsync_env();

        std::env::set_var("MEETSYNC_DB_POOL_SIZE", "not-a-number");

        let result = apply_env_overrides(Config::default());
        assert!(result.is_err(), "Should fail with invalid pool size");
        assert!(matches!(result.unwrap_err(), MeetSyncError::Config(_)));

        clear_meetsync_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "calendar": {
                "calendar_id": "ops@example.com",
                "use_mock": false
            },
            "storage": {
                "db_path": "test.db",
                "pool_size": 4
            }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from JSON file");

        let config = result.unwrap();
        assert_eq!(config.calendar.calendar_id, "ops@example.com");
        assert!(!config.calendar.use_mock);
        assert_eq!(config.storage.db_path, "test.db");
        // Sections missing from the file fall back to defaults
        assert_eq!(config.client.local_latency_ms, 1000);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[calendar]
calendar_id = "primary"
use_mock = true

[storage]
db_path = "test.db"
pool_size = 6

[server]
bind_addr = "0.0.0.0:9000"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from TOML file");

        let config = result.unwrap();
        assert_eq!(config.storage.pool_size, 6);
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(result.is_err(), "Should fail when file not found");
        assert!(matches!(result.unwrap_err(), MeetSyncError::Config(_)));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let invalid_json = r#"{ "this is": "not valid json" "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_json.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let path = PathBuf::from("test.yaml");
        let result = parse_config("some content", &path);
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
