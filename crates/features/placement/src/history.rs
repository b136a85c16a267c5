//! The bounded placement history log.
//!
//! Results live in the store as a JSON array under
//! [`PLACEMENT_HISTORY_KEY`](ltrc_domain::constants::PLACEMENT_HISTORY_KEY),
//! newest first and capped at the configured limit. A corrupt or missing blob
//! reads back as an empty log.

use crate::calculator::Placement;
use crate::error::PlacementError;
use ltrc_domain::config::HistoryConfig;
use ltrc_domain::constants::PLACEMENT_HISTORY_KEY;
use ltrc_domain::history::PlacementHistoryEntry;
use ltrc_store::Store;
use tracing::debug;

/// A store-backed log of computed placement results.
#[derive(Debug, Clone)]
pub struct PlacementHistory {
    store: Store,
    limit: usize,
}

impl PlacementHistory {
    #[must_use]
    pub fn new(store: Store, config: &HistoryConfig) -> Self {
        Self { store, limit: config.limit }
    }

    /// All recorded entries, newest first. Missing or unreadable data yields
    /// an empty log.
    pub async fn entries(&self) -> Vec<PlacementHistoryEntry> {
        self.store.load(PLACEMENT_HISTORY_KEY, Vec::new()).await
    }

    /// The most recent entry, if any.
    pub async fn latest(&self) -> Option<PlacementHistoryEntry> {
        self.entries().await.into_iter().next()
    }

    /// Records a placement result, prepending it and truncating the log to
    /// the cap. An [`Placement::Empty`] result is not a result at all and is
    /// skipped, returning `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`PlacementError::Store`] when the updated log cannot be
    /// persisted.
    pub async fn record(
        &self,
        placement: &Placement,
        date: impl Into<String>,
    ) -> Result<Option<PlacementHistoryEntry>, PlacementError> {
        if !placement.is_computed() {
            return Ok(None);
        }

        let entry = PlacementHistoryEntry::new(placement.summary(), date);
        let mut entries = self.entries().await;
        entries.insert(0, entry.clone());
        entries.truncate(self.limit);

        self.store.save(PLACEMENT_HISTORY_KEY, &entries).await?;
        debug!(total = entries.len(), "Placement recorded");
        Ok(Some(entry))
    }

    /// Empties the log. Clearing an already-empty log is a no-op.
    ///
    /// # Errors
    /// Returns [`PlacementError::Store`] on a removal failure.
    pub async fn clear(&self) -> Result<(), PlacementError> {
        self.store.remove(PLACEMENT_HISTORY_KEY).await?;
        Ok(())
    }
}
