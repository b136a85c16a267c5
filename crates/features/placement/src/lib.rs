//! # Placement Helper
//!
//! This crate implements the age/grade placement helper: a pure calculator
//! mapping a birthdate or school grade to a suggested division, a bounded
//! most-recent-first history of computed results, and the email/copy summary
//! affordances built on top of the latest entry.
//!
//! ## Architecture
//!
//! 1. **Calculation ([`calculator`]):** pure functions, no I/O. The outcome is
//!    the tagged [`Placement`] result — "no input yet" is a variant, not a
//!    sentinel string, so downstream code never sniffs display text.
//! 2. **History ([`history`]):** a store-backed log capped at the configured
//!    number of entries (5), newest first. Only computed placements are
//!    recorded.
//! 3. **Summaries ([`summary`]):** the `mailto:` draft URL and the
//!    copy-to-clipboard text the shell hands to the platform.

pub mod calculator;
mod error;
pub mod history;
pub mod summary;

pub use crate::calculator::{Category, Placement, Prompt, cutoff_from_config, evaluate};
pub use crate::error::{PlacementError, PlacementErrorExt};
pub use crate::history::PlacementHistory;
pub use crate::summary::{EmailDraft, EmailSummary, copy_summary, email_draft, email_summary};
