//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults
//! 2. Overlay a config file: the path named by `CLAIMBOARD_CONFIG`, else the
//!    first probed location (missing files are fine, defaults remain)
//! 3. Overlay individual environment variables
//!
//! ## Environment Variables
//! - `CLAIMBOARD_CONFIG`: Path to the config file
//! - `CLAIMBOARD_BOARD_ID`: Board holding the claim items
//! - `CLAIMBOARD_API_ENDPOINT`: GraphQL endpoint of the work-tracking API
//! - `CLAIMBOARD_API_VERSION`: Pinned API version header value
//! - `CLAIMBOARD_TIMEOUT_SECS`: Request timeout in seconds
//! - `CLAIMBOARD_WEEK_LENGTH`: `full` (7 dates) or `business` (5)
//! - `CLAIMBOARD_DATA_DIR`: Directory for the local state database
//! - `CLAIMBOARD_LOG_LEVEL`: Default log filter
//!
//! ## File Locations
//! Without `CLAIMBOARD_CONFIG`, the loader probes (in order):
//! 1. `./claimboard.json` or `./claimboard.toml`
//! 2. `./config.json` or `./config.toml`
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use claimboard_domain::constants::CONFIG_ENV_VAR;
use claimboard_domain::{ClaimboardConfig, ClaimboardError, Result, WeekLength};

/// Load configuration with the default overlay strategy.
///
/// # Errors
/// Returns `ClaimboardError::Config` if:
/// - `CLAIMBOARD_CONFIG` names a file that does not exist
/// - A config file has an invalid format
/// - An environment override has an invalid value
pub fn load() -> Result<ClaimboardConfig> {
    let mut config = match explicit_config_path() {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::debug!("no config file found; starting from defaults");
                ClaimboardConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ClaimboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClaimboardConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClaimboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClaimboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ClaimboardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClaimboardConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClaimboardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClaimboardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ClaimboardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("claimboard.json"),
            cwd.join("claimboard.toml"),
            cwd.join("config.json"),
            cwd.join("config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("claimboard.json"),
                exe_dir.join("claimboard.toml"),
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// The config file path named by `CLAIMBOARD_CONFIG`, if set.
fn explicit_config_path() -> Option<PathBuf> {
    env_var(CONFIG_ENV_VAR).map(PathBuf::from)
}

/// Overlay individual environment variables onto `config`.
fn apply_env_overrides(config: &mut ClaimboardConfig) -> Result<()> {
    if let Some(board_id) = env_var("CLAIMBOARD_BOARD_ID") {
        config.board_id = board_id;
    }
    if let Some(endpoint) = env_var("CLAIMBOARD_API_ENDPOINT") {
        config.api_endpoint = endpoint;
    }
    if let Some(version) = env_var("CLAIMBOARD_API_VERSION") {
        config.api_version = version;
    }
    if let Some(timeout) = env_var("CLAIMBOARD_TIMEOUT_SECS") {
        config.request_timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| ClaimboardError::Config(format!("Invalid timeout: {}", e)))?;
    }
    if let Some(week_length) = env_var("CLAIMBOARD_WEEK_LENGTH") {
        config.week_length = parse_week_length(&week_length)?;
    }
    if let Some(data_dir) = env_var("CLAIMBOARD_DATA_DIR") {
        config.data_dir = Some(PathBuf::from(data_dir));
    }
    if let Some(log_level) = env_var("CLAIMBOARD_LOG_LEVEL") {
        config.log_level = log_level;
    }
    Ok(())
}

fn parse_week_length(value: &str) -> Result<WeekLength> {
    match value.to_ascii_lowercase().as_str() {
        "full" | "7" => Ok(WeekLength::Full),
        "business" | "5" => Ok(WeekLength::Business),
        other => Err(ClaimboardError::Config(format!("Invalid week length: {}", other))),
    }
}

/// Get an environment variable, treating empty values as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_claimboard_env() {
        for key in [
            CONFIG_ENV_VAR,
            "CLAIMBOARD_BOARD_ID",
            "CLAIMBOARD_API_ENDPOINT",
            "CLAIMBOARD_API_VERSION",
            "CLAIMBOARD_TIMEOUT_SECS",
            "CLAIMBOARD_WEEK_LENGTH",
            "CLAIMBOARD_DATA_DIR",
            "CLAIMBOARD_LOG_LEVEL",
        ] {
            std::env::remove_var(key);
        }
    }

    fn temp_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp config created");
        file.write_all(contents.as_bytes()).expect("temp config written");
        file
    }

    #[test]
    fn test_load_json_file() {
        let file = temp_config(".json", r#"{ "board_id": "42", "week_length": "business" }"#);

        let config = load_from_file(Some(file.path().to_path_buf())).expect("config loaded");
        assert_eq!(config.board_id, "42");
        assert_eq!(config.week_length, WeekLength::Business);
        // Unset fields fall back to defaults
        assert_eq!(config.api_version, ClaimboardConfig::default().api_version);
    }

    #[test]
    fn test_load_toml_file() {
        let file = temp_config(
            ".toml",
            "board_id = \"99\"\nrequest_timeout_secs = 12\nlog_level = \"debug\"\n",
        );

        let config = load_from_file(Some(file.path().to_path_buf())).expect("config loaded");
        assert_eq!(config.board_id, "99");
        assert_eq!(config.request_timeout_secs, 12);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/claimboard.json")));
        assert!(matches!(result, Err(ClaimboardError::Config(_))));
    }

    #[test]
    fn test_unsupported_extension_is_an_error() {
        let file = temp_config(".yaml", "board_id: 42");
        let result = load_from_file(Some(file.path().to_path_buf()));

        let err = result.expect_err("unsupported format");
        assert!(err.to_string().contains("Unsupported config format"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let file = temp_config(".json", "{ not json");
        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ClaimboardError::Config(_))));
    }

    #[test]
    fn test_env_overrides_apply_on_top_of_the_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_claimboard_env();

        let file = temp_config(".json", r#"{ "board_id": "42", "log_level": "warn" }"#);
        std::env::set_var(CONFIG_ENV_VAR, file.path());
        std::env::set_var("CLAIMBOARD_BOARD_ID", "77");
        std::env::set_var("CLAIMBOARD_TIMEOUT_SECS", "10");
        std::env::set_var("CLAIMBOARD_WEEK_LENGTH", "business");

        let config = load().expect("config loaded");
        assert_eq!(config.board_id, "77", "env wins over the file");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.week_length, WeekLength::Business);
        assert_eq!(config.log_level, "warn", "file value survives when env is silent");

        clear_claimboard_env();
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_claimboard_env();

        let file = temp_config(".json", r#"{ "board_id": "42" }"#);
        std::env::set_var(CONFIG_ENV_VAR, file.path());
        std::env::set_var("CLAIMBOARD_TIMEOUT_SECS", "soon");

        let result = load();
        assert!(matches!(result, Err(ClaimboardError::Config(_))));

        clear_claimboard_env();
    }

    #[test]
    fn test_week_length_parsing() {
        assert_eq!(parse_week_length("full").unwrap(), WeekLength::Full);
        assert_eq!(parse_week_length("FULL").unwrap(), WeekLength::Full);
        assert_eq!(parse_week_length("7").unwrap(), WeekLength::Full);
        assert_eq!(parse_week_length("business").unwrap(), WeekLength::Business);
        assert_eq!(parse_week_length("5").unwrap(), WeekLength::Business);
        assert!(parse_week_length("fortnight").is_err());
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("CLAIMBOARD_TEST_BLANK", "   ");
        assert!(env_var("CLAIMBOARD_TEST_BLANK").is_none());

        std::env::remove_var("CLAIMBOARD_TEST_BLANK");
        assert!(env_var("CLAIMBOARD_TEST_BLANK").is_none());
    }
}
