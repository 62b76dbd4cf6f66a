//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Claimboard
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ClaimboardError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Remote API error: {0}")]
    Remote(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClaimboardError {
    /// Stable label for the error category, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::Remote(_) => "remote",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Storage(_) => "storage",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Claimboard operations
pub type Result<T> = std::result::Result<T, ClaimboardError>;
