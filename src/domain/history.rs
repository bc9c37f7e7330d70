// ============================================================================
// History Domain Model
// ============================================================================

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One completed calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    /// Unique entry identifier
    pub id: Uuid,

    /// Human-readable expression, e.g. "2 + 3" or "sin(30)"
    pub expression: String,

    /// Raw result
    pub result: f64,

    /// Result as it was displayed
    pub formatted_result: String,

    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: String, result: f64, formatted_result: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression,
            result,
            formatted_result,
            timestamp: Utc::now(),
        }
    }
}

/// Append an entry, dropping the oldest ones beyond `limit`
pub(crate) fn push_bounded(history: &mut Vec<HistoryEntry>, entry: HistoryEntry, limit: Option<usize>) {
    history.push(entry);
    if let Some(limit) = limit {
        if history.len() > limit {
            let excess = history.len() - limit;
            history.drain(..excess);
        }
    }
}
