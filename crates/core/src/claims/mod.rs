//! Claim workflow: ports and the orchestrating service

pub mod ports;
pub mod service;

pub use ports::{BoardGateway, CredentialStore};
pub use service::{BulkOutcome, ClaimService, WeekView};
