//! Data model for positions and their source records.
//!
//! Source documents are duck-typed JSON: frequencies arrive as strings or
//! numbers, coverage-code fields as a scalar or a list. Everything is
//! normalized into the types here at parse time so the ambiguity never
//! leaks into the index or the resolver.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A radio frequency as found in source data: either a string such as
/// `"135.425"` or a bare JSON number.
///
/// The value is passed through untouched; it participates in the resolver's
/// dedup key, so it implements `Eq` and `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Frequency {
    Text(String),
    Number(Number),
}

impl Frequency {
    /// Build a frequency from a raw JSON value, ignoring anything that is
    /// neither a string nor a number.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Frequency::Text(s.clone())),
            Value::Number(n) => Some(Frequency::Number(n.clone())),
            _ => None,
        }
    }
}

/// A controller console definition.
///
/// Optional fields that are absent in source data stay `None` and serialize
/// as `null`; they are never fabricated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Identifier of the position, unique within the position index.
    pub id: String,
    /// Radio callsign, e.g. `"EDJA_TWR"`.
    pub callsign: Option<String>,
    /// Broadcast frequency. The same id may appear under several
    /// frequencies, which the resolver treats as distinct consoles.
    pub frequency: Option<Frequency>,
    /// Position type, e.g. `"TWR"` or `"CTR"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A source file that was skipped during loading, with the reason.
///
/// Skipping is recoverable by design: one malformed file must not take down
/// the whole index. The record exists so callers can still see what was
/// left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Flatten a scalar-or-list JSON value into a list of coverage codes.
///
/// Strings are taken as-is (empty ones dropped), numbers are stringified,
/// `null` and anything non-scalar contribute nothing. Nesting deeper than
/// one list level does not occur in source data and is not flattened.
pub(crate) fn scalar_or_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(coerce_code).collect(),
        other => coerce_code(other).into_iter().collect(),
    }
}

fn coerce_code(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
