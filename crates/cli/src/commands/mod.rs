//! Command handlers for the terminal surface

pub mod auth;
pub mod claims;
pub mod memory;
pub mod week;

use anyhow::Result;

use crate::cli::Command;
use crate::context::AppContext;

/// Runs one parsed command against the application context.
pub async fn dispatch(ctx: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Week(args) => week::run(ctx, &args).await,
        Command::Add(args) => claims::add(ctx, &args).await,
        Command::Update(args) => claims::update(ctx, &args).await,
        Command::Delete(args) => claims::delete(ctx, &args).await,
        Command::AddWeek(args) => claims::add_week(ctx, &args).await,
        Command::Auth { command } => auth::run(ctx, command).await,
        Command::Memory { command } => memory::run(ctx, command).await,
    }
}
