//! # Claimboard CLI
//!
//! Terminal surface - argument parsing, context wiring, command handlers.
//!
//! This crate contains:
//! - The clap command tree
//! - The application context (dependency injection)
//! - One handler module per command family
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Renders week views and memory listings as tables

pub mod cli;
pub mod commands;
pub mod context;
pub mod render;

pub use cli::{Cli, Command};
pub use context::AppContext;
