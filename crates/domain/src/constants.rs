//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Remote API configuration
pub const DEFAULT_API_ENDPOINT: &str = "https://api.monday.com/v2";
pub const DEFAULT_API_VERSION: &str = "2023-10";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const API_VERSION_HEADER: &str = "API-Version";

// Cursor pagination (the remote enforces a 500-item page ceiling)
pub const ITEMS_PAGE_SIZE: u32 = 500;
pub const MAX_ITEM_PAGES: u32 = 20;
pub const INTER_PAGE_DELAY_MS: u64 = 5;

// State-store keys for the customer / work-item memory
pub const MEMORY_ACTIVE_KEY: &str = "customer_work_memory";
pub const MEMORY_EXPIRED_KEY: &str = "customer_work_expired";

// Credential storage
pub const CREDENTIAL_SERVICE: &str = "claimboard";
pub const CREDENTIAL_ACCOUNT: &str = "api-token";
pub const CREDENTIAL_ENV_VAR: &str = "CLAIMBOARD_API_TOKEN";

// Configuration loading
pub const CONFIG_ENV_VAR: &str = "CLAIMBOARD_CONFIG";
pub const STATE_DB_FILE: &str = "claimboard.db";
