//! Configuration loading and management
//!
//! This module provides utilities for loading application configuration
//! from files and environment variables, and for resolving the local
//! data directory.

pub mod loader;
pub mod paths;

// Re-export commonly used items
pub use loader::{load, load_from_file, probe_config_paths};
pub use paths::{data_dir, state_db_path};
