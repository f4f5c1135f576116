// src/resolver.rs
use std::fmt;

use crate::core::sanitize::normalize;
use crate::error::LookupError;
use crate::table::Table;

/// A successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Normalized query, case as entered
    pub id: String,
    pub value: String,
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.id, self.value)
    }
}

/// Resolve raw typed or scanned text against `table`.
///
/// Blank input is `EmptyQuery`, even before any data is loaded. An empty
/// table is `DataNotReady`. A matching record with an empty value counts
/// as `NotFound`.
pub fn resolve(table: &Table, raw: &str) -> Result<Hit, LookupError> {
    let id = normalize(raw);
    let key = id.to_uppercase();

    if key.is_empty() {
        return Err(LookupError::EmptyQuery);
    }
    if table.is_empty() {
        return Err(LookupError::DataNotReady);
    }

    match table.find(&key) {
        Some(rec) if !rec.value.is_empty() => Ok(Hit { id, value: rec.value.clone() }),
        _ => Err(LookupError::NotFound { id }),
    }
}

/// One-line text for the result display.
pub fn describe(outcome: &Result<Hit, LookupError>) -> String {
    match outcome {
        Ok(hit) => hit.to_string(),
        Err(e) => e.to_string(),
    }
}
