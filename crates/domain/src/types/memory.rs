//! Customer / work-item memory
//!
//! Remembers which work items have been claimed against which customers so
//! the surface can suggest them. Pairs can be expired to drop them from
//! suggestions without forgetting them; expiry survives re-learning and is
//! only undone by an explicit restore.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One (customer, work item) pair.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct WorkPair {
    pub customer: String,
    pub work_item: String,
}

impl WorkPair {
    pub fn new(customer: impl Into<String>, work_item: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            work_item: work_item.into(),
        }
    }
}

/// Import/export form of the whole memory: one JSON document with `active`
/// and `expired` pair arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(default)]
    pub active: Vec<WorkPair>,
    #[serde(default)]
    pub expired: Vec<WorkPair>,
}

/// In-memory customer / work-item map plus the expired-pair set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkMemory {
    active: BTreeMap<String, BTreeSet<String>>,
    expired: BTreeSet<WorkPair>,
}

impl WorkMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a memory from its two persisted halves.
    pub fn from_parts(
        active: BTreeMap<String, BTreeSet<String>>,
        expired: BTreeSet<WorkPair>,
    ) -> Self {
        Self { active, expired }
    }

    /// Records a pair. Returns `true` when the map changed.
    ///
    /// Blank names are ignored. Learning never clears an expiry mark.
    pub fn learn(&mut self, customer: &str, work_item: &str) -> bool {
        let customer = customer.trim();
        let work_item = work_item.trim();
        if customer.is_empty() || work_item.is_empty() {
            return false;
        }
        self.active
            .entry(customer.to_string())
            .or_default()
            .insert(work_item.to_string())
    }

    /// Drops a pair from suggestions. Returns `true` when newly expired.
    pub fn expire(&mut self, customer: &str, work_item: &str) -> bool {
        self.expired
            .insert(WorkPair::new(customer.trim(), work_item.trim()))
    }

    /// Undoes an expiry. Returns `true` when the pair was expired.
    pub fn restore(&mut self, customer: &str, work_item: &str) -> bool {
        self.expired
            .remove(&WorkPair::new(customer.trim(), work_item.trim()))
    }

    pub fn is_expired(&self, customer: &str, work_item: &str) -> bool {
        self.expired
            .contains(&WorkPair::new(customer.trim(), work_item.trim()))
    }

    /// Active work items for a customer, expired pairs excluded.
    pub fn suggestions(&self, customer: &str) -> Vec<String> {
        self.active
            .get(customer.trim())
            .map(|items| {
                items
                    .iter()
                    .filter(|item| !self.is_expired(customer, item))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Customers that still have at least one active suggestion.
    pub fn customers(&self) -> Vec<String> {
        self.active
            .keys()
            .filter(|customer| !self.suggestions(customer).is_empty())
            .cloned()
            .collect()
    }

    /// Every known pair, expired or not.
    pub fn pairs(&self) -> Vec<WorkPair> {
        self.active
            .iter()
            .flat_map(|(customer, items)| {
                items.iter().map(move |item| WorkPair::new(customer, item))
            })
            .collect()
    }

    pub fn active_map(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.active
    }

    pub fn expired_set(&self) -> &BTreeSet<WorkPair> {
        &self.expired
    }

    /// Snapshot as a single import/export document.
    pub fn to_document(&self) -> MemoryDocument {
        MemoryDocument {
            active: self.pairs(),
            expired: self.expired.iter().cloned().collect(),
        }
    }

    /// Replaces the whole memory with the document's contents.
    pub fn from_document(doc: MemoryDocument) -> Self {
        let mut memory = Self::new();
        for pair in doc.active {
            memory.learn(&pair.customer, &pair.work_item);
        }
        for pair in doc.expired {
            memory.expire(&pair.customer, &pair.work_item);
        }
        memory
    }
}
