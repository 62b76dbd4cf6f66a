//! Command-line argument definitions

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use claimboard_domain::{ActivityType, ClaimDraft, ClaimboardError};

#[derive(Debug, Parser)]
#[command(
    name = "claimboard",
    version,
    about = "Track weekly work claims on a remote board",
    long_about = "Track weekly work claims on a remote board.\n\n\
                  Claims live on one board with one group per calendar year.\n\
                  The API token is read from the platform keychain or the\n\
                  CLAIMBOARD_API_TOKEN environment variable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Explicit log level (overrides RUST_LOG and the configured level).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one week of claims.
    Week(WeekArgs),

    /// Create a claim for one day.
    Add(AddArgs),

    /// Rewrite every column of an existing claim.
    Update(UpdateArgs),

    /// Delete a claim from the board.
    Delete(DeleteArgs),

    /// Create the same claim on every day of a week.
    AddWeek(AddWeekArgs),

    /// Manage the stored API token.
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Inspect and edit the customer / work-item memory.
    Memory {
        #[command(subcommand)]
        command: MemoryCommand,
    },
}

/// Selects the week a command operates on.
#[derive(Debug, Args)]
pub struct WeekSelection {
    /// A date inside the target week, YYYY-MM-DD (default: today).
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Shift the selection by this many weeks (negative = into the past).
    #[arg(long, value_name = "WEEKS", default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,
}

#[derive(Debug, Args)]
pub struct WeekArgs {
    #[command(flatten)]
    pub week: WeekSelection,
}

/// The writable columns of a claim, shared by the create and update commands.
#[derive(Debug, Args)]
pub struct EntryFields {
    /// Customer the hours are claimed against.
    #[arg(long)]
    pub customer: String,

    /// Work item within the customer engagement.
    #[arg(long = "work-item")]
    pub work_item: String,

    /// Activity category of the claim.
    #[arg(long, value_enum, default_value_t = ActivityArg::Billable)]
    pub activity: ActivityArg,

    /// Hours worked, as a decimal (a comma separator is accepted).
    #[arg(long)]
    pub hours: String,

    /// Free-form note stored with the claim.
    #[arg(long, default_value = "")]
    pub comment: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Day the hours were worked, YYYY-MM-DD (default: today).
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub fields: EntryFields,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Remote id of the claim to rewrite.
    #[arg(value_name = "ITEM_ID")]
    pub item_id: String,

    /// Day the hours were worked, YYYY-MM-DD (default: today).
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub fields: EntryFields,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Remote id of the claim to delete.
    #[arg(value_name = "ITEM_ID")]
    pub item_id: String,
}

#[derive(Debug, Args)]
pub struct AddWeekArgs {
    #[command(flatten)]
    pub week: WeekSelection,

    #[command(flatten)]
    pub fields: EntryFields,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Store an API token in the platform keychain.
    ///
    /// Reads the token from stdin when it is not passed as an argument,
    /// keeping it out of the shell history.
    SetToken {
        /// The API token to store.
        token: Option<String>,
    },

    /// Remove the stored API token.
    Clear,

    /// Show the account the configured token belongs to.
    Whoami,
}

#[derive(Debug, Subcommand)]
pub enum MemoryCommand {
    /// List remembered customer / work-item pairs.
    List,

    /// Drop a pair from suggestions without forgetting it.
    Expire {
        customer: String,
        work_item: String,
    },

    /// Bring an expired pair back into suggestions.
    Restore {
        customer: String,
        work_item: String,
    },

    /// Write the whole memory as one JSON document.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Replace the whole memory with an exported JSON document.
    Import {
        /// File holding the exported document.
        path: PathBuf,
    },
}

/// Activity category flag values, mirroring the remote status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivityArg {
    Vacation,
    Billable,
    Holding,
    Education,
    WorkReduction,
    Tbd,
    Holiday,
    Presales,
    Illness,
    PaidNotWorked,
    IntellectualCapital,
    BusinessDevelopment,
    Overhead,
}

impl From<ActivityArg> for ActivityType {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Vacation => Self::Vacation,
            ActivityArg::Billable => Self::Billable,
            ActivityArg::Holding => Self::Holding,
            ActivityArg::Education => Self::Education,
            ActivityArg::WorkReduction => Self::WorkReduction,
            ActivityArg::Tbd => Self::Tbd,
            ActivityArg::Holiday => Self::Holiday,
            ActivityArg::Presales => Self::Presales,
            ActivityArg::Illness => Self::Illness,
            ActivityArg::PaidNotWorked => Self::PaidNotWorked,
            ActivityArg::IntellectualCapital => Self::IntellectualCapital,
            ActivityArg::BusinessDevelopment => Self::BusinessDevelopment,
            ActivityArg::Overhead => Self::Overhead,
        }
    }
}

impl EntryFields {
    /// Builds the draft sent to the board, rejecting unusable values before
    /// any remote call.
    pub fn to_draft(&self, date: NaiveDate) -> Result<ClaimDraft, ClaimboardError> {
        let customer = self.customer.trim();
        if customer.is_empty() {
            return Err(ClaimboardError::InvalidInput(
                "customer must not be empty".to_string(),
            ));
        }
        let work_item = self.work_item.trim();
        if work_item.is_empty() {
            return Err(ClaimboardError::InvalidInput(
                "work item must not be empty".to_string(),
            ));
        }
        Ok(ClaimDraft {
            date,
            activity: self.activity.into(),
            customer: customer.to_string(),
            work_item: work_item.to_string(),
            comment: self.comment.trim().to_string(),
            hours: normalized_hours(&self.hours)?,
        })
    }
}

/// Validates the hours flag and normalizes a comma separator to a dot.
fn normalized_hours(raw: &str) -> Result<String, ClaimboardError> {
    let normalized = raw.trim().replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| {
        ClaimboardError::InvalidInput(format!(
            "hours must be a decimal number, got {raw:?}"
        ))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ClaimboardError::InvalidInput(format!(
            "hours must be zero or positive, got {raw:?}"
        )));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn fields(hours: &str) -> EntryFields {
        EntryFields {
            customer: "Acme".to_string(),
            work_item: "Rollout".to_string(),
            activity: ActivityArg::Billable,
            hours: hours.to_string(),
            comment: String::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn week_accepts_a_negative_offset() {
        let cli = Cli::try_parse_from(["claimboard", "week", "--offset", "-2"]).unwrap();
        match cli.command {
            Command::Week(args) => assert_eq!(args.week.offset, -2),
            other => panic!("parsed into {other:?}"),
        }
    }

    #[test]
    fn add_parses_the_claim_fields() {
        let cli = Cli::try_parse_from([
            "claimboard",
            "add",
            "--date",
            "2024-03-12",
            "--customer",
            "Acme",
            "--work-item",
            "Rollout",
            "--activity",
            "business-development",
            "--hours",
            "7,5",
        ])
        .unwrap();
        let Command::Add(args) = cli.command else {
            panic!("expected the add command");
        };
        assert_eq!(args.date, Some(date(2024, 3, 12)));
        assert_eq!(args.fields.activity, ActivityArg::BusinessDevelopment);

        let draft = args.fields.to_draft(date(2024, 3, 12)).unwrap();
        assert_eq!(draft.activity, ActivityType::BusinessDevelopment);
        assert_eq!(draft.hours, "7.5");
    }

    #[test]
    fn every_activity_flag_maps_to_its_code() {
        for (code, arg) in [
            ActivityArg::Vacation,
            ActivityArg::Billable,
            ActivityArg::Holding,
            ActivityArg::Education,
            ActivityArg::WorkReduction,
            ActivityArg::Tbd,
            ActivityArg::Holiday,
            ActivityArg::Presales,
            ActivityArg::Illness,
            ActivityArg::PaidNotWorked,
            ActivityArg::IntellectualCapital,
            ActivityArg::BusinessDevelopment,
            ActivityArg::Overhead,
        ]
        .into_iter()
        .enumerate()
        {
            let activity: ActivityType = arg.into();
            assert_eq!(u8::try_from(code).unwrap(), activity.code());
        }
    }

    #[test]
    fn drafts_reject_blank_names() {
        let mut blank = fields("8");
        blank.customer = "  ".to_string();
        assert!(matches!(
            blank.to_draft(date(2024, 3, 12)),
            Err(ClaimboardError::InvalidInput(_))
        ));

        let mut blank = fields("8");
        blank.work_item = String::new();
        assert!(blank.to_draft(date(2024, 3, 12)).is_err());
    }

    #[test]
    fn drafts_reject_unusable_hours() {
        assert!(fields("eight").to_draft(date(2024, 3, 12)).is_err());
        assert!(fields("-1").to_draft(date(2024, 3, 12)).is_err());
        assert_eq!(
            fields(" 0,5 ").to_draft(date(2024, 3, 12)).unwrap().hours,
            "0.5"
        );
    }
}
