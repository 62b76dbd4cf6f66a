//! # Claimboard Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The GraphQL board gateway (HTTP transport + query shapes)
//! - Credential storage (OS keychain with environment override)
//! - SQLite-backed key-value state storage
//! - Configuration loading (files + environment)
//!
//! ## Architecture
//! - Implements traits defined in `claimboard-core`
//! - Depends on `claimboard-domain` and `claimboard-core`
//! - Contains all "impure" code (network, keychain, database, filesystem)

pub mod board;
pub mod config;
pub mod credentials;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use board::{BoardClient, MondayGateway};
pub use credentials::KeychainCredentialStore;
pub use http::HttpClient;
pub use storage::SqliteStateStore;
