//! API token management

use std::io::{self, BufRead, Write};

use anyhow::Result;
use claimboard_domain::ClaimboardError;

use crate::cli::AuthCommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::SetToken { token } => set_token(ctx, token).await,
        AuthCommand::Clear => clear(ctx).await,
        AuthCommand::Whoami => whoami(ctx).await,
    }
}

async fn set_token(ctx: &AppContext, token: Option<String>) -> Result<()> {
    let raw = match token {
        Some(token) => token,
        None => prompt_token()?,
    };
    let token = raw.trim();
    if token.is_empty() {
        return Err(ClaimboardError::InvalidInput(
            "token must not be empty".to_string(),
        )
        .into());
    }
    ctx.credentials.store_token(token).await?;
    println!("Token stored in the platform keychain");
    Ok(())
}

async fn clear(ctx: &AppContext) -> Result<()> {
    ctx.credentials.clear_token().await?;
    println!("Stored token removed");
    Ok(())
}

async fn whoami(ctx: &AppContext) -> Result<()> {
    let user = ctx.gateway.fetch_user().await?;
    println!("{} <{}> (id {})", user.name, user.email, user.id);
    Ok(())
}

fn prompt_token() -> Result<String> {
    eprint!("API token: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
