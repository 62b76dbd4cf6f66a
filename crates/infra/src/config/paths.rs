//! Filesystem locations for local state.

use std::path::PathBuf;

use claimboard_domain::constants::STATE_DB_FILE;
use claimboard_domain::{ClaimboardConfig, ClaimboardError, Result};

/// Application name used for the platform data directory.
pub const APP_NAME: &str = "claimboard";

/// Directory holding the local state database.
///
/// A configured `data_dir` wins; otherwise the platform's per-user data
/// directory for the application.
pub fn data_dir(config: &ClaimboardConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or_else(|| {
            ClaimboardError::Config(
                "could not determine a data directory; set data_dir".to_string(),
            )
        })
}

/// Full path of the state database file.
pub fn state_db_path(config: &ClaimboardConfig) -> Result<PathBuf> {
    Ok(data_dir(config)?.join(STATE_DB_FILE))
}
