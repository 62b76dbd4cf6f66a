//! API credential storage using the system keychain.
//!
//! Reads prefer an environment variable override, which keeps headless
//! and CI use working without a keychain daemon. Writes and removals
//! always target the keychain.

use async_trait::async_trait;
use claimboard_core::claims::ports::CredentialStore;
use claimboard_domain::constants::{CREDENTIAL_ACCOUNT, CREDENTIAL_ENV_VAR, CREDENTIAL_SERVICE};
use claimboard_domain::{ClaimboardError, Result};
use keyring::Entry;
use tracing::debug;

/// Keychain-backed credential store with an environment override.
pub struct KeychainCredentialStore {
    service: String,
    account: String,
}

impl KeychainCredentialStore {
    pub fn new() -> Self {
        Self { service: CREDENTIAL_SERVICE.to_string(), account: CREDENTIAL_ACCOUNT.to_string() }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, &self.account)
            .map_err(|e| ClaimboardError::Auth(format!("Failed to access keychain: {}", e)))
    }

    fn env_token() -> Option<String> {
        std::env::var(CREDENTIAL_ENV_VAR)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

impl Default for KeychainCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for KeychainCredentialStore {
    async fn token(&self) -> Result<Option<String>> {
        if let Some(token) = Self::env_token() {
            debug!(source = CREDENTIAL_ENV_VAR, "using API token from the environment");
            return Ok(Some(token));
        }

        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(ClaimboardError::Auth(format!("Failed to read keychain: {}", e))),
        }
    }

    async fn store_token(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .map_err(|e| ClaimboardError::Auth(format!("Failed to store token: {}", e)))
    }

    async fn clear_token(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(ClaimboardError::Auth(format!("Failed to delete token: {}", e))),
        }
    }
}
