//! Remote board records
//!
//! Mirrors what the work-tracking API returns for items, groups, and the
//! authenticated user. These records are immutable once received; everything
//! derived from them lives in [`super::claim`].

use serde::{Deserialize, Serialize};

/// One column of a board item.
///
/// Every column arrives in two representations: a JSON document in `value`
/// and a human-readable fallback in `text`. Either side may be null, and the
/// two are not guaranteed to agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValue {
    pub id: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ColumnValue {
    /// Convenience constructor, mostly useful in tests and mutation payloads.
    pub fn new(
        id: impl Into<String>,
        value: Option<impl Into<String>>,
        text: Option<impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.map(Into::into),
            text: text.map(Into::into),
        }
    }
}

/// One raw claim record on the remote board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub column_values: Vec<ColumnValue>,
}

impl BoardItem {
    /// Looks up a column by its board-level id.
    pub fn column(&self, column_id: &str) -> Option<&ColumnValue> {
        self.column_values.iter().find(|c| c.id == column_id)
    }
}

/// A year bucket on the remote board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGroup {
    pub id: String,
    pub title: String,
}

/// The holder of the configured API credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}
