//! # Claimboard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The entry normalizer turning raw board items into claim records
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `claimboard-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod claims;
pub mod memory;
pub mod normalize;

// Re-export specific items to avoid ambiguity
pub use claims::ports::{BoardGateway, CredentialStore};
pub use claims::service::{BulkOutcome, ClaimService, WeekView};
pub use memory::ports::StateStore;
pub use memory::service::MemoryService;
pub use normalize::{normalize, ColumnPayload};
