//! The registration session: the one owned object tying state, store, and the
//! autosave debouncer together.
//!
//! Edits flow through the pure update layer in [`crate::wizard`]; this module
//! only decides when and how the result hits the store. Immediate saves and
//! explicit saves surface write failures to the caller; the background
//! autosave can only log them, since nobody is awaiting it.

use chrono::{DateTime, Local};
use crate::error::RegistrationError;
use crate::wizard::{self, FieldEdit, SavePolicy};
use ltrc_domain::config::RegistrationConfig;
use ltrc_domain::constants::REGISTRATION_STATE_KEY;
use ltrc_domain::registration::RegistrationState;
use ltrc_kernel::Debouncer;
use ltrc_kernel::time::now_rfc3339;
use ltrc_store::{Store, StoreError};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// A live registration wizard session.
#[derive(Debug)]
pub struct RegistrationSession {
    state: Arc<RwLock<RegistrationState>>,
    store: Store,
    debouncer: Debouncer,
}

impl RegistrationSession {
    /// Loads the stored state (merged with defaults when the blob is partial,
    /// missing, or unreadable) and arms the autosave debouncer.
    pub async fn load(store: Store, config: &RegistrationConfig) -> Self {
        let state = store.load(REGISTRATION_STATE_KEY, RegistrationState::default()).await;
        Self {
            state: Arc::new(RwLock::new(state)),
            store,
            debouncer: Debouncer::new(Duration::from_millis(config.autosave_debounce_ms)),
        }
    }

    /// A point-in-time copy of the current state.
    #[must_use]
    pub fn state(&self) -> RegistrationState {
        self.state.read().clone()
    }

    /// Runs `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&RegistrationState) -> R) -> R {
        f(&self.state.read())
    }

    /// Applies one edit and persists per its [`SavePolicy`].
    ///
    /// # Errors
    /// Returns [`RegistrationError::Store`] when an immediate save fails.
    pub async fn edit(&mut self, edit: FieldEdit) -> Result<SavePolicy, RegistrationError> {
        let policy = wizard::apply_edit(&mut self.state.write(), &edit);
        self.follow_policy(policy).await?;
        Ok(policy)
    }

    /// Appends a blank player under a fresh creation-timestamp id and saves.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Store`] when the save fails.
    pub async fn add_player(&mut self) -> Result<i64, RegistrationError> {
        let id = ltrc_kernel::creation_id();
        let policy = wizard::add_player(&mut self.state.write(), id);
        self.follow_policy(policy).await?;
        Ok(id)
    }

    /// Removes a player by id and saves.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Store`] when the save fails.
    pub async fn remove_player(&mut self, id: i64) -> Result<(), RegistrationError> {
        let policy = wizard::remove_player(&mut self.state.write(), id);
        self.follow_policy(policy).await
    }

    async fn follow_policy(&mut self, policy: SavePolicy) -> Result<(), RegistrationError> {
        match policy {
            SavePolicy::Immediate => self.save_now().await,
            SavePolicy::Debounced => {
                self.schedule_autosave();
                Ok(())
            },
            SavePolicy::Ignored => Ok(()),
        }
    }

    /// Stamps `lastSaved` and persists immediately, cancelling any pending
    /// autosave it would duplicate.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Store`] when the write fails.
    pub async fn save_now(&mut self) -> Result<(), RegistrationError> {
        self.debouncer.cancel();
        persist(&self.store, &self.state).await?;
        debug!("Registration state saved");
        Ok(())
    }

    fn schedule_autosave(&mut self) {
        let store = self.store.clone();
        let state = Arc::clone(&self.state);
        self.debouncer.call(async move {
            if let Err(err) = persist(&store, &state).await {
                error!(error = %err, "Autosave failed");
            }
        });
    }

    /// Whether an autosave is scheduled but has not fired yet.
    #[must_use]
    pub fn autosave_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// The autosave status line, from the last stamped save time rendered as
    /// a local wall-clock time.
    #[must_use]
    pub fn autosave_status(&self) -> Option<String> {
        let saved = self.state.read().last_saved.clone()?;
        let time = DateTime::parse_from_rfc3339(&saved)
            .map_or(saved, |dt| dt.with_timezone(&Local).format("%-I:%M %p").to_string());
        Some(format!("Autosaved at {time}."))
    }
}

async fn persist(
    store: &Store,
    state: &Arc<RwLock<RegistrationState>>,
) -> Result<(), StoreError> {
    let snapshot = {
        let mut guard = state.write();
        guard.last_saved = Some(now_rfc3339());
        guard.clone()
    };
    store.save(REGISTRATION_STATE_KEY, &snapshot).await
}
