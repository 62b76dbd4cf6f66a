//! Domain types and models

pub mod activity;
pub mod board;
pub mod claim;
pub mod memory;
pub mod week;

// Re-export the commonly used types for convenience
pub use activity::ActivityType;
pub use board::{BoardGroup, BoardItem, ColumnValue, RemoteUser};
pub use claim::{ClaimDraft, ClaimEntry, WeekIndex};
pub use memory::{MemoryDocument, WorkMemory, WorkPair};
pub use week::{Week, WeekLength};
