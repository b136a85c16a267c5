//! Portal configuration tree.
//!
//! Defaults reproduce the constants the original site hard-coded; a deployment
//! can override any of them through a config file or `LTRC__` environment
//! variables (see `ltrc-kernel::config::load_config`).

use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level portal configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfigInner {
    pub placement: PlacementConfig,
    pub registration: RegistrationConfig,
    pub history: HistoryConfig,
    pub storage: StorageConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PortalConfig {
    #[serde(flatten, default)]
    inner: Arc<PortalConfigInner>,
}

impl Deref for PortalConfig {
    type Target = PortalConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PortalConfig {
    fn deref_mut(&mut self) -> &mut PortalConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Age/grade placement helper configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Eligibility cut-off date, ISO `YYYY-MM-DD`.
    pub cutoff_date: String,
}

/// Registration wizard configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Trailing-edge autosave quiet period in milliseconds.
    pub autosave_debounce_ms: u64,
    /// Default per-player base fee in dollars.
    pub base_fee: f64,
    /// Flat discount per additional sibling in dollars.
    pub sibling_discount: f64,
}

/// Placement history log configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum retained entries; the oldest is silently dropped past this.
    pub limit: usize,
}

/// Root directory for the file-backed store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

// --- Default ---

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { cutoff_date: "2025-09-01".to_owned() }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self { autosave_debounce_ms: 800, base_fee: 190.0, sibling_discount: 25.0 }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { limit: 5 }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".") }
    }
}
