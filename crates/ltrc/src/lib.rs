//! Facade crate for the LTRC portal features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature wiring.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `ltrc` and call [`init`] with a loaded
//!   [`PortalConfig`](domain::config::PortalConfig) to get the composed
//!   [`Portal`] handle; extend as new slices appear.

pub use ltrc_domain as domain;
pub use ltrc_kernel as kernel;
pub use ltrc_logger as logger;
pub use ltrc_store as store;

use ltrc_domain::config::PortalConfig;
use ltrc_placement::PlacementHistory;
use ltrc_portal::ThemePreference;
use ltrc_registration::RegistrationSession;
use ltrc_store::{Store, StoreError};

/// Feature registry for runtime introspection.
pub mod features {
    pub use ltrc_faq as faq;
    pub use ltrc_placement as placement;
    pub use ltrc_portal as portal;
    pub use ltrc_registration as registration;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["placement", "registration", "faq", "portal"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// The composed portal: one store, one handle per feature slice.
#[derive(Debug)]
pub struct Portal {
    pub config: PortalConfig,
    pub store: Store,
    pub placement_history: PlacementHistory,
    pub registration: RegistrationSession,
    pub theme: ThemePreference,
}

/// Wires all feature slices onto a file-backed store rooted at the configured
/// data directory.
///
/// # Errors
/// Returns an error when the store root cannot be initialized.
pub async fn init(config: PortalConfig) -> Result<Portal, StoreError> {
    let store = Store::builder().root(&config.storage.data_dir).connect().await?;

    // Placement
    let placement_history = PlacementHistory::new(store.clone(), &config.history);

    // Registration
    let registration = RegistrationSession::load(store.clone(), &config.registration).await;

    // Portal chrome
    let theme = ThemePreference::new(store.clone());

    Ok(Portal { config, store, placement_history, registration, theme })
}
