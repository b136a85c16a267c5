//! String constants shared across slices.
//!
//! The storage keys are load-bearing: existing installations already hold
//! blobs under these exact names, and data migration depends on them.

/// Local-storage key for the persisted theme preference (raw string, not JSON).
pub const THEME_KEY: &str = "ltrc-theme-preference";

/// Legacy theme key written by an older toggle implementation; honored read-only.
pub const LEGACY_THEME_KEY: &str = "theme";

/// Local-storage key for the bounded placement history log.
pub const PLACEMENT_HISTORY_KEY: &str = "ltrc-placement-history";

/// Local-storage key for the registration wizard aggregate.
pub const REGISTRATION_STATE_KEY: &str = "ltrc-registration-state";

/// Hard-coded registration page the checkout hand-off navigates to.
pub const REGISTRATION_URL: &str = "registration.html";

/// The fixed set of division labels offered by the player division select.
pub const DIVISIONS: [&str; 6] = [
    "Boys Clinic 6–7",
    "Boys Clinic 8",
    "Boys 9–10 League",
    "Girls Clinic K–1",
    "Girls League 5–6 (Waitlist)",
    "Girls League 7–8",
];
