//! Customer / work-item memory service
//!
//! Wraps the in-memory [`WorkMemory`] and writes both of its halves through
//! the state store after every mutation. A corrupt stored document is
//! discarded with a warning rather than blocking startup.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use claimboard_domain::constants::{MEMORY_ACTIVE_KEY, MEMORY_EXPIRED_KEY};
use claimboard_domain::{ClaimboardError, MemoryDocument, Result, WorkMemory, WorkPair};
use parking_lot::Mutex;
use tracing::warn;

use super::ports::StateStore;

type ActiveMap = BTreeMap<String, BTreeSet<String>>;
type ExpiredSet = BTreeSet<WorkPair>;

/// Remembers customer / work-item pairs across runs.
pub struct MemoryService {
    store: Arc<dyn StateStore>,
    memory: Mutex<WorkMemory>,
}

impl MemoryService {
    /// Loads the persisted memory, starting empty where nothing is stored.
    pub async fn load(store: Arc<dyn StateStore>) -> Result<Self> {
        let active: ActiveMap = read_stored(store.as_ref(), MEMORY_ACTIVE_KEY).await?;
        let expired: ExpiredSet = read_stored(store.as_ref(), MEMORY_EXPIRED_KEY).await?;
        Ok(Self {
            store,
            memory: Mutex::new(WorkMemory::from_parts(active, expired)),
        })
    }

    /// Records a pair and persists when the memory changed.
    pub async fn learn(&self, customer: &str, work_item: &str) -> Result<bool> {
        let changed = self.memory.lock().learn(customer, work_item);
        if changed {
            self.persist().await?;
        }
        Ok(changed)
    }

    /// Drops a pair from suggestions and persists.
    pub async fn expire(&self, customer: &str, work_item: &str) -> Result<bool> {
        let changed = self.memory.lock().expire(customer, work_item);
        if changed {
            self.persist().await?;
        }
        Ok(changed)
    }

    /// Reactivates an expired pair and persists.
    pub async fn restore(&self, customer: &str, work_item: &str) -> Result<bool> {
        let changed = self.memory.lock().restore(customer, work_item);
        if changed {
            self.persist().await?;
        }
        Ok(changed)
    }

    /// Active work items for a customer.
    pub fn suggestions(&self, customer: &str) -> Vec<String> {
        self.memory.lock().suggestions(customer)
    }

    /// Customers that still have active suggestions.
    pub fn customers(&self) -> Vec<String> {
        self.memory.lock().customers()
    }

    /// A copy of the current memory, for listing.
    pub fn snapshot(&self) -> WorkMemory {
        self.memory.lock().clone()
    }

    /// The whole memory as one pretty-printed JSON document.
    pub fn export(&self) -> Result<String> {
        let doc = self.memory.lock().to_document();
        serde_json::to_string_pretty(&doc)
            .map_err(|e| ClaimboardError::Internal(format!("memory export failed: {e}")))
    }

    /// Replaces the whole memory with an exported document and persists.
    pub async fn import(&self, json: &str) -> Result<()> {
        let doc: MemoryDocument = serde_json::from_str(json).map_err(|e| {
            ClaimboardError::InvalidInput(format!("invalid memory document: {e}"))
        })?;
        *self.memory.lock() = WorkMemory::from_document(doc);
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        let (active, expired) = {
            let memory = self.memory.lock();
            let active = serde_json::to_string(memory.active_map());
            let expired = serde_json::to_string(memory.expired_set());
            (active, expired)
        };
        let active = active
            .map_err(|e| ClaimboardError::Internal(format!("memory encode failed: {e}")))?;
        let expired = expired
            .map_err(|e| ClaimboardError::Internal(format!("memory encode failed: {e}")))?;
        self.store.set(MEMORY_ACTIVE_KEY, &active).await?;
        self.store.set(MEMORY_EXPIRED_KEY, &expired).await?;
        Ok(())
    }
}

/// Reads one stored half, falling back to its default on a parse failure.
async fn read_stored<T>(store: &dyn StateStore, key: &str) -> Result<T>
where
    T: Default + serde::de::DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key, error = %err, "discarding unreadable stored memory");
            T::default()
        })),
        None => Ok(T::default()),
    }
}
