//! JSON model of a share document.
//!
//! ```json
//! {
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every key other than [`CONTROL_KEY`] names the x-coordinate of one share.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RecoveryError, Result};

/// Reserved key holding the [`ControlRecord`].
pub const CONTROL_KEY: &str = "keys";

/// Threshold metadata stored under [`CONTROL_KEY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    /// Total number of shares that were issued. Informational only.
    #[serde(default)]
    pub n: Option<i64>,
    /// Number of shares needed to reconstruct the secret.
    pub k: usize,
}

/// One share before decoding: a base and a digit string in that base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub base: String,
    pub value: String,
}

impl ShareRecord {
    /// Deserialize the raw record stored under `key`.
    pub fn from_entry(key: &str, raw: &Value) -> Result<Self> {
        ShareRecord::deserialize(raw).map_err(|err| {
            RecoveryError::MalformedShareRecord {
                key: key.to_owned(),
                reason: err.to_string(),
            }
        })
    }
}

/// A parsed document: the control record plus the raw share entries in the
/// order they appear in the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareDocument {
    control: ControlRecord,
    entries: Vec<(String, Value)>,
}

impl ShareDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)
            .map_err(|err| RecoveryError::MalformedDocument(err.to_string()))?;
        match root {
            Value::Object(map) => Self::from_map(map),
            other => Err(RecoveryError::MalformedDocument(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut control = None;
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            if key == CONTROL_KEY {
                control = Some(value);
            } else {
                entries.push((key, value));
            }
        }

        let control = control.ok_or_else(|| {
            RecoveryError::MalformedControlRecord("missing".to_owned())
        })?;
        let control = ControlRecord::deserialize(&control).map_err(|err| {
            RecoveryError::MalformedControlRecord(err.to_string())
        })?;

        Ok(ShareDocument { control, entries })
    }

    /// The threshold `k`.
    pub fn threshold(&self) -> usize {
        self.control.k
    }

    /// The share count `n` the document claims, if any. Never validated.
    pub fn declared_total(&self) -> Option<i64> {
        self.control.n
    }

    /// Number of share entries, excluding the control record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Share entries in source order, as `(key, record)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, raw)| (key.as_str(), raw))
    }
}

impl FromStr for ShareDocument {
    type Err = RecoveryError;

    fn from_str(s: &str) -> Result<Self> {
        ShareDocument::from_json(s)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
