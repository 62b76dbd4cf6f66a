//! Application configuration structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_ENDPOINT, DEFAULT_API_VERSION, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::types::week::WeekLength;

/// Board-level ids of the columns a claim item is spread across.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub date: String,
    pub assignee: String,
    pub status: String,
    pub customer: String,
    pub work_item: String,
    pub comment: String,
    pub hours: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: "date4".to_string(),
            assignee: "person".to_string(),
            status: "status".to_string(),
            customer: "text".to_string(),
            work_item: "text1".to_string(),
            comment: "text2".to_string(),
            hours: "numbers".to_string(),
        }
    }
}

/// Configuration for the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimboardConfig {
    /// GraphQL endpoint of the work-tracking API.
    pub api_endpoint: String,
    /// Pinned API version sent with every request.
    pub api_version: String,
    pub request_timeout_secs: u64,
    /// Board holding the claim items, one group per calendar year.
    pub board_id: String,
    pub columns: ColumnMap,
    pub week_length: WeekLength,
    /// Directory for the local state database; platform data dir when unset.
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ClaimboardConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            board_id: String::new(),
            columns: ColumnMap::default(),
            week_length: WeekLength::default(),
            data_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl ClaimboardConfig {
    /// Fails when a required setting is missing.
    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.board_id.trim().is_empty() {
            return Err(crate::errors::ClaimboardError::Config(
                "board_id is not set".to_string(),
            ));
        }
        if self.api_endpoint.trim().is_empty() {
            return Err(crate::errors::ClaimboardError::Config(
                "api_endpoint is not set".to_string(),
            ));
        }
        Ok(())
    }
}
