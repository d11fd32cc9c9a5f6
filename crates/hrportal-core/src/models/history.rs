use serde::{Deserialize, Serialize};

use super::serde_util::null_as_default;

/// One entry of the department history list: a previously asked question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryThreadSummary {
    pub message_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    /// Naive ISO-8601 timestamp as stored by the backend (UTC, no offset).
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
}

impl HistoryThreadSummary {
    /// Parse the backend timestamp. Returns `None` when it is missing or
    /// malformed.
    pub fn recorded_at(&self) -> Option<jiff::civil::DateTime> {
        self.timestamp.trim().parse().ok()
    }
}
