//! Application context - dependency wiring
//!
//! Builds the adapters once and hands shared services to the command
//! handlers. Claim commands require a configured board; auth and memory
//! commands work with the defaults.

use std::sync::Arc;

use claimboard_core::{BoardGateway, ClaimService, CredentialStore, MemoryService};
use claimboard_domain::{ClaimboardConfig, Result};
use claimboard_infra::config::{self, state_db_path};
use claimboard_infra::{BoardClient, KeychainCredentialStore, MondayGateway, SqliteStateStore};

/// Application context - holds all services and dependencies.
pub struct AppContext {
    pub config: ClaimboardConfig,
    pub credentials: Arc<dyn CredentialStore>,
    pub gateway: Arc<dyn BoardGateway>,
    pub memory: Arc<MemoryService>,
    pub claims: ClaimService,
}

impl AppContext {
    /// Create a context from the configuration on disk and in the
    /// environment.
    pub async fn new() -> Result<Self> {
        Self::with_config(config::load()?).await
    }

    /// Create a context from an explicit configuration.
    ///
    /// Tests use this to point the gateway at a local server and the state
    /// store at a scratch directory.
    pub async fn with_config(config: ClaimboardConfig) -> Result<Self> {
        let credentials: Arc<dyn CredentialStore> = Arc::new(KeychainCredentialStore::new());

        let client = BoardClient::new(&config)?;
        let gateway: Arc<dyn BoardGateway> =
            Arc::new(MondayGateway::new(client, credentials.clone(), config.columns.clone()));

        let store = Arc::new(SqliteStateStore::open(state_db_path(&config)?)?);
        let memory = Arc::new(MemoryService::load(store).await?);

        let claims = ClaimService::new(
            gateway.clone(),
            memory.clone(),
            config.board_id.clone(),
            config.columns.clone(),
        );

        Ok(Self { config, credentials, gateway, memory, claims })
    }
}
