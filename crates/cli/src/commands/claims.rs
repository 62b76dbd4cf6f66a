//! Claim create, update, delete, and bulk add

use anyhow::Result;
use chrono::Local;
use claimboard_domain::ClaimDraft;

use crate::cli::{AddArgs, AddWeekArgs, DeleteArgs, UpdateArgs};
use crate::context::AppContext;

use super::week::select_week;

pub async fn add(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    ctx.config.validate()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let draft = args.fields.to_draft(date)?;
    let item_id = ctx.claims.create_claim(&draft).await?;
    println!("Created claim {item_id} on {}", draft.date);
    Ok(())
}

pub async fn update(ctx: &AppContext, args: &UpdateArgs) -> Result<()> {
    ctx.config.validate()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let draft = args.fields.to_draft(date)?;
    ctx.claims.update_claim(&args.item_id, &draft).await?;
    println!("Updated claim {}", args.item_id);
    Ok(())
}

pub async fn delete(ctx: &AppContext, args: &DeleteArgs) -> Result<()> {
    ctx.config.validate()?;
    ctx.claims.delete_claim(&args.item_id).await?;
    println!("Deleted claim {}", args.item_id);
    Ok(())
}

/// Creates one claim per day of the selected week, stopping at the first
/// failure and reporting how far it got.
pub async fn add_week(ctx: &AppContext, args: &AddWeekArgs) -> Result<()> {
    ctx.config.validate()?;
    let week = select_week(args.week.date, args.week.offset, ctx.config.week_length);
    let drafts = week
        .dates()
        .into_iter()
        .map(|date| args.fields.to_draft(date))
        .collect::<Result<Vec<ClaimDraft>, _>>()?;

    let outcome = ctx.claims.add_week(&drafts).await;
    match outcome.error {
        None => {
            println!(
                "Created {} claims for the week of {}",
                outcome.created,
                week.monday()
            );
            Ok(())
        }
        Some(error) => {
            eprintln!(
                "Created {} of {} claims before a failure",
                outcome.created,
                drafts.len()
            );
            Err(error.into())
        }
    }
}
