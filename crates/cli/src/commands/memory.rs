//! Customer / work-item memory management

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::MemoryCommand;
use crate::context::AppContext;
use crate::render;

pub async fn run(ctx: &AppContext, command: MemoryCommand) -> Result<()> {
    match command {
        MemoryCommand::List => {
            render::print_memory(&ctx.memory.snapshot());
            Ok(())
        }
        MemoryCommand::Expire { customer, work_item } => expire(ctx, &customer, &work_item).await,
        MemoryCommand::Restore { customer, work_item } => restore(ctx, &customer, &work_item).await,
        MemoryCommand::Export { output } => export(ctx, output.as_deref()),
        MemoryCommand::Import { path } => import(ctx, &path).await,
    }
}

async fn expire(ctx: &AppContext, customer: &str, work_item: &str) -> Result<()> {
    if ctx.memory.expire(customer, work_item).await? {
        println!("Expired {customer} / {work_item}");
    } else {
        println!("{customer} / {work_item} is already expired");
    }
    Ok(())
}

async fn restore(ctx: &AppContext, customer: &str, work_item: &str) -> Result<()> {
    if ctx.memory.restore(customer, work_item).await? {
        println!("Restored {customer} / {work_item}");
    } else {
        println!("{customer} / {work_item} is not an expired pair");
    }
    Ok(())
}

fn export(ctx: &AppContext, output: Option<&Path>) -> Result<()> {
    let document = ctx.memory.export()?;
    match output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote memory to {}", path.display());
        }
        None => println!("{document}"),
    }
    Ok(())
}

async fn import(ctx: &AppContext, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ctx.memory.import(&raw).await?;
    println!("Imported memory from {}", path.display());
    Ok(())
}
