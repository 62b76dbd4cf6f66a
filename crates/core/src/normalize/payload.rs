//! One-shot decoding of board column payloads

use claimboard_domain::ColumnValue;
use serde_json::Value;

/// A column's payload after a single decoding pass.
///
/// The remote sends every column twice: a JSON document in `value` and a
/// display string in `text`. Either side may be missing, and the two are not
/// guaranteed to agree. Decoding happens once per column; every extraction
/// works on the result instead of re-probing the raw strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnPayload {
    /// `value` held a JSON document; display text rides along when present.
    Structured { value: Value, text: Option<String> },
    /// Only a string survived, either the display text or an undecodable
    /// raw value.
    PlainText(String),
    /// The column is missing or carries nothing usable.
    Absent,
}

impl ColumnPayload {
    /// Decodes one column.
    pub fn decode(column: Option<&ColumnValue>) -> Self {
        let Some(column) = column else {
            return Self::Absent;
        };
        let text = column.text.clone().filter(|t| !t.is_empty());
        let parsed = column
            .value
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
            .filter(|v| !v.is_null());
        match (parsed, text) {
            (Some(value), text) => Self::Structured { value, text },
            (None, Some(text)) => Self::PlainText(text),
            (None, None) => match column.value.clone().filter(|v| !v.is_empty()) {
                Some(raw) => Self::PlainText(raw),
                None => Self::Absent,
            },
        }
    }

    /// The display text, from whichever side carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Structured { text, .. } => text.as_deref(),
            Self::PlainText(text) => Some(text),
            Self::Absent => None,
        }
    }
}
