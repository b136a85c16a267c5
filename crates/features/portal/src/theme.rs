//! Theme selection: saved preference first, system preference second.
//!
//! The preference is stored as a raw `"light"`/`"dark"` string (not JSON)
//! under the current key; an older deployment wrote a `theme` key, which is
//! honored read-only as a fallback and never written back.

use crate::error::PortalError;
use ltrc_domain::constants::{LEGACY_THEME_KEY, THEME_KEY};
use ltrc_store::Store;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::debug;

/// The two portal themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// A saved preference always wins; otherwise the system preference.
    #[must_use]
    pub fn resolve(saved: Option<Self>, system_prefers_dark: bool) -> Self {
        saved.unwrap_or(if system_prefers_dark { Self::Dark } else { Self::Light })
    }

    /// The toggle button's text for this theme.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f} Light mode",
            Self::Dark => "\u{1f319} Dark mode",
        }
    }

    /// The toggle button's accessibility label for this theme.
    #[must_use]
    pub const fn toggle_aria_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Store-backed theme preference.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    store: Store,
}

impl ThemePreference {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// The saved preference, if any. Unrecognized or unreadable values count
    /// as no preference.
    pub async fn saved(&self) -> Option<Theme> {
        for key in [THEME_KEY, LEGACY_THEME_KEY] {
            if let Ok(Some(raw)) = self.store.get_raw(key).await
                && let Ok(theme) = Theme::from_str(raw.trim())
            {
                return Some(theme);
            }
        }
        None
    }

    /// The theme to apply right now.
    pub async fn resolve(&self, system_prefers_dark: bool) -> Theme {
        Theme::resolve(self.saved().await, system_prefers_dark)
    }

    /// Persists an explicit choice under the current key.
    ///
    /// # Errors
    /// Returns [`PortalError::Store`] when the write fails.
    pub async fn save(&self, theme: Theme) -> Result<(), PortalError> {
        self.store.set_raw(THEME_KEY, &theme.to_string()).await?;
        debug!(%theme, "Theme preference saved");
        Ok(())
    }

    /// Flips the current theme, saving the result as an explicit choice.
    ///
    /// # Errors
    /// Returns [`PortalError::Store`] when the write fails.
    pub async fn toggle(&self, system_prefers_dark: bool) -> Result<Theme, PortalError> {
        let next = self.resolve(system_prefers_dark).await.toggled();
        self.save(next).await?;
        Ok(next)
    }

    /// Reacts to a system preference change: the new system theme when no
    /// explicit choice is saved, `None` (ignore the event) when one is.
    pub async fn on_system_change(&self, system_prefers_dark: bool) -> Option<Theme> {
        if self.saved().await.is_some() {
            return None;
        }
        Some(Theme::resolve(None, system_prefers_dark))
    }
}
