//! Port interface for persisted key-value state

use async_trait::async_trait;
use claimboard_domain::Result;

/// Small persisted string store for ambient client state.
///
/// Reads of absent keys yield `None`; writes upsert.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
