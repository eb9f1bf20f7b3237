use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Amount as it arrives from a parser or an external payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawAmount {
    /// Coerce to a finite number; `None` when that is not possible.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            RawAmount::Number(n) => *n,
            RawAmount::Text(s) => s.trim().parse::<f64>().ok()?,
            RawAmount::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

/// Unvalidated transaction record produced by a statement parser.
///
/// Any field may be missing. Keys other than the five known ones are kept in
/// `extra` until the sanitizer drops them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<RawAmount>,
    /// Ignored downstream; direction is always re-derived from the amount
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawTransactionRecord {
    pub fn new(date: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date: Some(date.into()),
            description: Some(description.into()),
            amount: Some(RawAmount::Number(amount)),
            ..Self::default()
        }
    }
}
