//! Entry normalizer
//!
//! Turns raw board items into [`ClaimEntry`] records scoped to one user and
//! one week. The remote schema represents every field twice (structured JSON
//! and display text), so each extraction tolerates either side being absent
//! or malformed. Normalization never fails: a bad item is dropped, a bad
//! field degrades to its default.

pub mod payload;

use std::sync::OnceLock;

use chrono::NaiveDate;
use claimboard_domain::{
    ActivityType, BoardItem, ClaimEntry, ColumnMap, RemoteUser, Week, WeekIndex,
};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

pub use payload::ColumnPayload;

/// Builds the week's index from raw items.
///
/// Items that are not owned by `user`, carry no usable date, or fall outside
/// `week` are skipped. Per-date order follows item arrival order.
pub fn normalize(
    items: &[BoardItem],
    user: &RemoteUser,
    week: &Week,
    columns: &ColumnMap,
) -> WeekIndex {
    let mut index = WeekIndex::for_week(week);
    for item in items {
        if !owned_by_user(item, user, columns) {
            debug!(item_id = %item.id, "skipping item owned by someone else");
            continue;
        }
        let Some(date) = extract_date(&decode(item, &columns.date)) else {
            debug!(item_id = %item.id, "skipping item without a usable date");
            continue;
        };
        if !week.contains(date) {
            debug!(item_id = %item.id, %date, "skipping item outside the week");
            continue;
        }
        index.push(ClaimEntry {
            id: item.id.clone(),
            date,
            activity: extract_activity(&decode(item, &columns.status)),
            customer: extract_field(&decode(item, &columns.customer)),
            work_item: extract_field(&decode(item, &columns.work_item)),
            comment: extract_field(&decode(item, &columns.comment)),
            hours: extract_field(&decode(item, &columns.hours)),
        });
    }
    index
}

fn decode(item: &BoardItem, column_id: &str) -> ColumnPayload {
    ColumnPayload::decode(item.column(column_id))
}

/// Ownership test: item name, assigned person ids, or assignee text.
fn owned_by_user(item: &BoardItem, user: &RemoteUser, columns: &ColumnMap) -> bool {
    if !user.name.is_empty() && item.name.contains(&user.name) {
        return true;
    }
    let assignee = decode(item, &columns.assignee);
    if let ColumnPayload::Structured { value, .. } = &assignee {
        if person_ids(value).any(|id| id == user.id) {
            return true;
        }
    }
    if let Some(text) = assignee.text() {
        if !user.name.is_empty() && text.contains(&user.name) {
            return true;
        }
        if !user.email.is_empty() && text.contains(&user.email) {
            return true;
        }
    }
    false
}

/// Person ids listed in an assignee column's structured payload.
fn person_ids(value: &Value) -> impl Iterator<Item = String> + '_ {
    value
        .get("personsAndTeams")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|entry| {
            entry
                .get("kind")
                .and_then(Value::as_str)
                .map_or(true, |kind| kind == "person")
        })
        .filter_map(|entry| entry.get("id").map(id_string))
}

fn id_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Date of the designated date column.
///
/// The structured payload's `date` field wins, with any time-of-day suffix
/// truncated. The text side must match a strict `YYYY-MM-DD` shape.
fn extract_date(payload: &ColumnPayload) -> Option<NaiveDate> {
    match payload {
        ColumnPayload::Structured { value, text } => value
            .get("date")
            .and_then(Value::as_str)
            .and_then(truncated_date)
            .or_else(|| text.as_deref().and_then(strict_date)),
        ColumnPayload::PlainText(text) => strict_date(text),
        ColumnPayload::Absent => None,
    }
}

fn truncated_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.splitn(2, |c| c == 'T' || c == ' ').next().unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn strict_date(text: &str) -> Option<NaiveDate> {
    if !plain_date_regex().is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn plain_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // Calendar dates only; anything with a time suffix belongs to the
        // structured side
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap()
    })
}

/// Generic field extraction for customer / work item / comment / hours.
///
/// Display text wins unless it is the remote's `"null"` sentinel. A
/// structured payload contributes its string form or `text` sub-field, then
/// its raw rendering. Missing columns map to the empty string.
fn extract_field(payload: &ColumnPayload) -> String {
    match payload {
        ColumnPayload::Structured { value, text } => {
            if let Some(text) = text.as_deref().filter(|t| usable_text(t)) {
                return text.to_string();
            }
            if let Value::String(s) = value {
                return s.clone();
            }
            if let Some(s) = value.get("text").and_then(Value::as_str) {
                return s.to_string();
            }
            value.to_string()
        }
        ColumnPayload::PlainText(text) if usable_text(text) => text.clone(),
        ColumnPayload::PlainText(_) | ColumnPayload::Absent => String::new(),
    }
}

fn usable_text(text: &str) -> bool {
    !text.is_empty() && text != "null" && text != "\"\""
}

/// Activity of the status column: structured `index` first, then the label
/// keyword table over the text side, then the billable default.
fn extract_activity(payload: &ColumnPayload) -> ActivityType {
    if let ColumnPayload::Structured { value, .. } = payload {
        if let Some(activity) = value
            .get("index")
            .and_then(Value::as_u64)
            .and_then(|code| u8::try_from(code).ok())
            .and_then(ActivityType::from_code)
        {
            return activity;
        }
    }
    payload
        .text()
        .and_then(ActivityType::from_keywords)
        .unwrap_or_default()
}
