//! Claim workflow service - core business logic

use std::sync::Arc;

use chrono::Datelike;
use claimboard_domain::{
    BoardGroup, ClaimDraft, ClaimboardError, ColumnMap, RemoteUser, Result, Week,
    WeekIndex,
};
use tracing::{info, warn};

use super::ports::BoardGateway;
use crate::memory::MemoryService;
use crate::normalize::normalize;

/// Everything the surface needs to render one week.
#[derive(Debug, Clone)]
pub struct WeekView {
    pub user: RemoteUser,
    pub group: BoardGroup,
    pub week: Week,
    pub index: WeekIndex,
}

/// Result of a bulk add: how far it got, and what stopped it.
#[derive(Debug)]
pub struct BulkOutcome {
    pub created: usize,
    pub error: Option<ClaimboardError>,
}

/// Claim workflow service
pub struct ClaimService {
    gateway: Arc<dyn BoardGateway>,
    memory: Arc<MemoryService>,
    board_id: String,
    columns: ColumnMap,
}

impl ClaimService {
    /// Create a new claim service for one board.
    pub fn new(
        gateway: Arc<dyn BoardGateway>,
        memory: Arc<MemoryService>,
        board_id: impl Into<String>,
        columns: ColumnMap,
    ) -> Self {
        Self { gateway, memory, board_id: board_id.into(), columns }
    }

    /// Loads and normalizes one week of claims.
    ///
    /// The returned index is rebuilt wholesale on every call.
    pub async fn load_week(&self, week: Week) -> Result<WeekView> {
        let user = self.gateway.fetch_user().await?;
        let group = self.gateway.fetch_group(&self.board_id, week.year()).await?;
        let items = self.gateway.fetch_all_items(&self.board_id, &group.id).await?;
        let index = normalize(&items, &user, &week, &self.columns);
        info!(
            items = items.len(),
            entries = index.len(),
            monday = %week.monday(),
            "week loaded"
        );
        Ok(WeekView { user, group, week, index })
    }

    /// Creates a claim in the group of the draft's year.
    ///
    /// Returns the new item's remote id.
    pub async fn create_claim(&self, draft: &ClaimDraft) -> Result<String> {
        let user = self.gateway.fetch_user().await?;
        self.create_for_user(&user, draft).await
    }

    /// Rewrites an existing claim's columns.
    pub async fn update_claim(&self, item_id: &str, draft: &ClaimDraft) -> Result<()> {
        self.gateway.update_item(&self.board_id, item_id, draft).await?;
        self.remember_pair(draft).await;
        Ok(())
    }

    /// Removes a claim from the board.
    pub async fn delete_claim(&self, item_id: &str) -> Result<()> {
        self.gateway.delete_item(item_id).await
    }

    /// Creates claims one after another, stopping at the first failure.
    pub async fn add_week(&self, drafts: &[ClaimDraft]) -> BulkOutcome {
        let user = match self.gateway.fetch_user().await {
            Ok(user) => user,
            Err(error) => return BulkOutcome { created: 0, error: Some(error) },
        };
        let mut created = 0;
        for draft in drafts {
            match self.create_for_user(&user, draft).await {
                Ok(_) => created += 1,
                Err(error) => return BulkOutcome { created, error: Some(error) },
            }
        }
        BulkOutcome { created, error: None }
    }

    async fn create_for_user(
        &self,
        user: &RemoteUser,
        draft: &ClaimDraft,
    ) -> Result<String> {
        let group =
            self.gateway.fetch_group(&self.board_id, draft.date.year()).await?;
        let item_id = self
            .gateway
            .create_item(&self.board_id, &group.id, &user.name, draft)
            .await?;
        info!(item_id = %item_id, date = %draft.date, "claim created");
        self.remember_pair(draft).await;
        Ok(item_id)
    }

    /// Memory failures never fail the save that triggered them.
    async fn remember_pair(&self, draft: &ClaimDraft) {
        if let Err(err) = self.memory.learn(&draft.customer, &draft.work_item).await {
            warn!(error = %err, "failed to persist customer/work-item memory");
        }
    }
}
