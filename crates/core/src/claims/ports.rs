//! Port interfaces for the claim workflow
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use claimboard_domain::{BoardGroup, BoardItem, ClaimDraft, RemoteUser, Result};

/// Remote board access used by the claim service.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// Returns the user owning the configured credential.
    async fn fetch_user(&self) -> Result<RemoteUser>;

    /// Resolves the board group holding a calendar year's items.
    async fn fetch_group(&self, board_id: &str, year: i32) -> Result<BoardGroup>;

    /// Returns every item of one group, across all result pages.
    async fn fetch_all_items(&self, board_id: &str, group_id: &str)
        -> Result<Vec<BoardItem>>;

    /// Creates a claim item and returns its remote id.
    async fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        draft: &ClaimDraft,
    ) -> Result<String>;

    /// Rewrites the claim columns of an existing item.
    async fn update_item(
        &self,
        board_id: &str,
        item_id: &str,
        draft: &ClaimDraft,
    ) -> Result<()>;

    /// Permanently removes an item from the board.
    async fn delete_item(&self, item_id: &str) -> Result<()>;
}

/// Keeper of the API credential.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// The stored token, if any.
    async fn token(&self) -> Result<Option<String>>;

    /// Persists a new token, replacing any previous one.
    async fn store_token(&self, token: &str) -> Result<()>;

    /// Removes the stored token.
    async fn clear_token(&self) -> Result<()>;
}
