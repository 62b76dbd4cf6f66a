//! Week selection and navigation
//!
//! A [`Week`] is a Monday-anchored span of consecutive dates. The full
//! seven-day span is the default; a five-day business-week variant is
//! available through configuration.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of dates a week spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekLength {
    /// Monday through Sunday.
    #[default]
    Full,
    /// Monday through Friday.
    Business,
}

impl WeekLength {
    /// Number of dates in a week of this length.
    pub const fn days(self) -> u32 {
        match self {
            Self::Full => 7,
            Self::Business => 5,
        }
    }
}

/// A Monday-anchored week of consecutive calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    monday: NaiveDate,
    length: WeekLength,
}

impl Week {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate, length: WeekLength) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        Self {
            monday: date - Duration::days(offset),
            length,
        }
    }

    /// The week containing today, in local time.
    pub fn current(length: WeekLength) -> Self {
        Self::containing(Local::now().date_naive(), length)
    }

    /// Monday of this week.
    pub const fn monday(&self) -> NaiveDate {
        self.monday
    }

    /// Last date of this week (Friday or Sunday depending on length).
    pub fn last_day(&self) -> NaiveDate {
        self.monday + Duration::days(i64::from(self.length.days()) - 1)
    }

    /// The dates this week spans, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        (0..i64::from(self.length.days()))
            .map(|day| self.monday + Duration::days(day))
            .collect()
    }

    /// Whether `date` falls on one of this week's dates.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.monday && date <= self.last_day()
    }

    /// Calendar year of this week's Monday, used to pick the board group.
    pub fn year(&self) -> i32 {
        self.monday.year()
    }

    /// The following week.
    pub fn next(&self) -> Self {
        Self {
            monday: self.monday + Duration::days(7),
            length: self.length,
        }
    }

    /// The preceding week.
    pub fn previous(&self) -> Self {
        Self {
            monday: self.monday - Duration::days(7),
            length: self.length,
        }
    }
}
