//! Canonical claim records and the per-week index
//!
//! A [`ClaimEntry`] is the normalized form of one board item. The
//! [`WeekIndex`] groups entries by date for exactly the dates of one selected
//! week; it is rebuilt wholesale on every load and never patched in place.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::activity::ActivityType;
use super::week::Week;

/// One normalized claim: hours worked against a customer and work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEntry {
    /// Remote item id.
    pub id: String,
    pub date: NaiveDate,
    pub activity: ActivityType,
    pub customer: String,
    pub work_item: String,
    pub comment: String,
    /// Decimal string copied verbatim from the hours column.
    pub hours: String,
}

impl ClaimEntry {
    /// Numeric hours for totals; unparseable values count as zero.
    pub fn hours_value(&self) -> f64 {
        self.hours.trim().replace(',', ".").parse().unwrap_or(0.0)
    }
}

/// The writable half of a claim, used for create and update payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDraft {
    pub date: NaiveDate,
    pub activity: ActivityType,
    pub customer: String,
    pub work_item: String,
    #[serde(default)]
    pub comment: String,
    pub hours: String,
}

/// Claim entries grouped by date, scoped to one week's dates.
///
/// Every date of the week is present as a key even when no entry fell on it.
/// Within a date, entries keep the order in which their items arrived from
/// the remote API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekIndex {
    entries: BTreeMap<NaiveDate, Vec<ClaimEntry>>,
}

impl WeekIndex {
    /// An empty index keyed by the given week's dates.
    pub fn for_week(week: &Week) -> Self {
        Self {
            entries: week.dates().into_iter().map(|d| (d, Vec::new())).collect(),
        }
    }

    /// Adds an entry under its date.
    ///
    /// Returns `false` (and drops the entry) when the date is not one of the
    /// index's week dates.
    pub fn push(&mut self, entry: ClaimEntry) -> bool {
        match self.entries.get_mut(&entry.date) {
            Some(day) => {
                day.push(entry);
                true
            }
            None => false,
        }
    }

    /// The week's dates, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    /// Entries recorded on `date`, in arrival order.
    pub fn entries_on(&self, date: NaiveDate) -> &[ClaimEntry] {
        self.entries.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Iterates over `(date, entries)` pairs in date order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[ClaimEntry])> {
        self.entries.iter().map(|(d, e)| (*d, e.as_slice()))
    }

    /// Total number of entries across all dates.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the index holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Sum of parseable hours recorded on `date`.
    pub fn day_hours(&self, date: NaiveDate) -> f64 {
        self.entries_on(date).iter().map(ClaimEntry::hours_value).sum()
    }

    /// Sum of parseable hours across the whole week.
    pub fn total_hours(&self) -> f64 {
        self.entries
            .values()
            .flatten()
            .map(ClaimEntry::hours_value)
            .sum()
    }
}
