//! Claimboard - weekly work claims from the terminal
//!
//! Main entry point for the command-line binary.

use anyhow::Result;
use clap::Parser;
use claimboard_cli::{commands, AppContext, Cli};
use claimboard_domain::ClaimboardError;
use claimboard_infra::config;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the config so CLAIMBOARD_* overrides apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load()?;
    init_tracing(cli.log_level.as_deref(), &config.log_level);

    let ctx = AppContext::with_config(config).await?;
    if let Err(failure) = commands::dispatch(&ctx, cli.command).await {
        if let Some(domain_error) = failure.downcast_ref::<ClaimboardError>() {
            error!(category = domain_error.label(), "command failed");
        }
        return Err(failure);
    }
    Ok(())
}

/// Initializes tracing on stderr. The explicit flag wins over `RUST_LOG`,
/// which wins over the configured level.
fn init_tracing(flag_level: Option<&str>, config_level: &str) {
    let filter = match flag_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config_level)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
