//! Activity types for claim entries
//!
//! The remote board encodes the activity of a claim as a status column whose
//! structured payload carries an integer `index`. The codes and labels below
//! mirror that board configuration.

use serde::{Deserialize, Serialize};

/// Activity category of a claim, coded 0-12 on the remote status column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Vacation,
    #[default]
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

impl ActivityType {
    /// All activity types in code order.
    pub const ALL: [Self; 13] = [
        Self::Vacation,
        Self::Billable,
        Self::Holding,
        Self::Education,
        Self::WorkReduction,
        Self::Tbd,
        Self::Holiday,
        Self::Presales,
        Self::Illness,
        Self::PaidNotWorked,
        Self::IntellectualCapital,
        Self::BusinessDevelopment,
        Self::Overhead,
    ];

    /// Returns the integer code used by the remote status column.
    pub const fn code(self) -> u8 {
        match self {
            Self::Vacation => 0,
            Self::Billable => 1,
            Self::Holding => 2,
            Self::Education => 3,
            Self::WorkReduction => 4,
            Self::Tbd => 5,
            Self::Holiday => 6,
            Self::Presales => 7,
            Self::Illness => 8,
            Self::PaidNotWorked => 9,
            Self::IntellectualCapital => 10,
            Self::BusinessDevelopment => 11,
            Self::Overhead => 12,
        }
    }

    /// Resolves an integer code back to an activity type.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Vacation),
            1 => Some(Self::Billable),
            2 => Some(Self::Holding),
            3 => Some(Self::Education),
            4 => Some(Self::WorkReduction),
            5 => Some(Self::Tbd),
            6 => Some(Self::Holiday),
            7 => Some(Self::Presales),
            8 => Some(Self::Illness),
            9 => Some(Self::PaidNotWorked),
            10 => Some(Self::IntellectualCapital),
            11 => Some(Self::BusinessDevelopment),
            12 => Some(Self::Overhead),
            _ => None,
        }
    }

    /// Display label, matching the status column's configured labels.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vacation => "Vacation",
            Self::Billable => "Billable",
            Self::Holding => "Holding",
            Self::Education => "Education",
            Self::WorkReduction => "Work Reduction",
            Self::Tbd => "TBD",
            Self::Holiday => "Holiday",
            Self::Presales => "Presales",
            Self::Illness => "Illness",
            Self::PaidNotWorked => "Paid Not Worked",
            Self::IntellectualCapital => "Intellectual Capital",
            Self::BusinessDevelopment => "Business Development",
            Self::Overhead => "Overhead",
        }
    }

    /// Matches free-form status text against the label table.
    ///
    /// Used when the status column carries no structured payload and only its
    /// display text survives. Matching is case-insensitive containment, first
    /// hit in code order wins.
    pub fn from_keywords(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|activity| lowered.contains(&activity.label().to_lowercase()))
    }
}
