//! Remote work-tracking board integration.
//!
//! [`BoardClient`] is the raw GraphQL transport; [`MondayGateway`] implements
//! the claim workflow's gateway port on top of it.

mod client;
mod gateway;
mod types;

pub use client::BoardClient;
pub use gateway::MondayGateway;
