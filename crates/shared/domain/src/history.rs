//! Placement history entries, persisted as a JSON array under
//! [`crate::constants::PLACEMENT_HISTORY_KEY`].

use serde::{Deserialize, Serialize};

/// One recorded placement result, newest first in the stored array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementHistoryEntry {
    /// The rendered placement summary text.
    pub result: String,
    /// Formatted local timestamp, e.g. `Sep 1, 5:04 PM`.
    pub date: String,
}

impl PlacementHistoryEntry {
    #[must_use]
    pub fn new(result: impl Into<String>, date: impl Into<String>) -> Self {
        Self { result: result.into(), date: date.into() }
    }
}
