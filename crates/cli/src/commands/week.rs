//! Week display and navigation

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use claimboard_domain::{Week, WeekLength};

use crate::cli::WeekArgs;
use crate::context::AppContext;
use crate::render;

pub async fn run(ctx: &AppContext, args: &WeekArgs) -> Result<()> {
    ctx.config.validate()?;
    let week = select_week(args.week.date, args.week.offset, ctx.config.week_length);
    let view = ctx.claims.load_week(week).await?;
    render::print_week(&view);
    Ok(())
}

/// Resolves the selection flags to a week: the week containing the anchor
/// date (today when absent), shifted by the offset.
pub fn select_week(date: Option<NaiveDate>, offset: i64, length: WeekLength) -> Week {
    let anchor = date.unwrap_or_else(|| Local::now().date_naive());
    Week::containing(anchor + Duration::weeks(offset), length)
}
