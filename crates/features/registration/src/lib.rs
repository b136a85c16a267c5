//! # Registration Wizard
//!
//! The four-step family registration flow: guardian details, the player
//! roster, waiver acknowledgements, and the review step, with a sibling
//! discount quote and debounced autosave throughout.
//!
//! ## Architecture
//!
//! 1. **Pure updates ([`wizard`]):** `apply_edit` and the player-list helpers
//!    mutate a plain [`RegistrationState`](ltrc_domain::registration) and
//!    report a [`SavePolicy`]; no I/O, fully unit-testable.
//! 2. **Discounts ([`discount`]):** the sibling quote as a pure function over
//!    fee, declared siblings, and roster size.
//! 3. **Session ([`session`]):** the owned object the UI holds. Wires the
//!    pure layer to the store, schedules the trailing-edge autosave, and
//!    surfaces write failures.

pub mod discount;
mod error;
pub mod session;
pub mod wizard;

pub use crate::discount::{DiscountSummary, counts_disagree, quote_for, sibling_discount};
pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::session::RegistrationSession;
pub use crate::wizard::{
    CheckoutBlocked, EditValue, Field, FieldEdit, PlayerField, SavePolicy, Step, add_player,
    apply_edit, dashboard_family, proceed_to_checkout, remove_player, review_summary,
    waitlist_summary,
};
