//! Registration wizard aggregate: the single blob persisted under
//! [`crate::constants::REGISTRATION_STATE_KEY`].
//!
//! Every struct carries `#[serde(default)]` per field so a partially-shaped
//! stored blob (older release, hand-edited, truncated) merges with defaults
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Guardian contact details. Free text, never validated beyond "non-crash on empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Family {
    pub guardian_name: String,
    pub guardian_email: String,
    pub guardian_phone: String,
    pub home_address: String,
}

/// Waiver acknowledgements. Both must be true before checkout proceeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Waivers {
    pub medical: bool,
    pub conduct: bool,
}

impl Waivers {
    /// True when both acknowledgements are checked.
    #[must_use]
    pub const fn acknowledged(self) -> bool {
        self.medical && self.conduct
    }
}

/// Sibling-discount inputs. Both are user-entered multiplier inputs and are
/// deliberately not validated for negativity. Both are JSON numbers on the
/// wire, so a stored fractional `siblingCount` must parse rather than fail
/// the whole blob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Discounts {
    #[serde(default = "default_base_fee")]
    pub base_fee: f64,
    #[serde(default = "default_sibling_count")]
    pub sibling_count: f64,
}

impl Default for Discounts {
    fn default() -> Self {
        Self { base_fee: default_base_fee(), sibling_count: default_sibling_count() }
    }
}

const fn default_base_fee() -> f64 {
    190.0
}

const fn default_sibling_count() -> f64 {
    1.0
}

/// One registrant.
///
/// `waitlist` is a derived flag: always a pure function of `division`, never
/// independently settable. Deserialization re-derives it so a stored blob can
/// never be inconsistent with its source field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PlayerWire")]
pub struct Player {
    /// Locally-unique id assigned at creation time (epoch milliseconds;
    /// uniqueness is best-effort under rapid creation).
    pub id: i64,
    pub player_name: String,
    /// ISO date string (`YYYY-MM-DD`) or empty.
    pub birthdate: String,
    /// Free text, e.g. `4th`.
    pub grade: String,
    /// One of [`crate::constants::DIVISIONS`] or empty.
    pub division: String,
    pub waitlist: bool,
}

impl Player {
    /// A blank player with the given creation-time id.
    #[must_use]
    pub fn blank(id: i64) -> Self {
        Self { id, ..Self::default() }
    }

    /// Whether a division label denotes a waitlisted variant.
    #[must_use]
    pub fn is_waitlisted(division: &str) -> bool {
        !division.is_empty() && division.to_lowercase().contains("waitlist")
    }

    /// Assigns a division and recomputes the derived `waitlist` flag.
    pub fn set_division(&mut self, division: impl Into<String>) {
        self.division = division.into();
        self.waitlist = Self::is_waitlisted(&self.division);
    }
}

/// Wire mirror of [`Player`] used to re-derive `waitlist` on deserialization.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PlayerWire {
    id: i64,
    player_name: String,
    birthdate: String,
    grade: String,
    division: String,
    #[allow(dead_code)]
    waitlist: bool,
}

impl From<PlayerWire> for Player {
    fn from(wire: PlayerWire) -> Self {
        let waitlist = Self::is_waitlisted(&wire.division);
        Self {
            id: wire.id,
            player_name: wire.player_name,
            birthdate: wire.birthdate,
            grade: wire.grade,
            division: wire.division,
            waitlist,
        }
    }
}

/// The wizard's single persisted aggregate.
///
/// Created once per page load (loaded from storage or defaulted), mutated by
/// every form-field event, and persisted wholesale. The active wizard step is
/// intentionally not part of this blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationState {
    pub family: Family,
    /// Insertion order is display order.
    pub players: Vec<Player>,
    pub waivers: Waivers,
    pub discounts: Discounts,
    /// RFC 3339 timestamp of the last persisted write; `null` before first save.
    pub last_saved: Option<String>,
}

impl RegistrationState {
    /// Players currently flagged for the waitlist notification list.
    pub fn waitlisted_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.waitlist)
    }
}
