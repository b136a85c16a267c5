//! # Portal Presentation Glue
//!
//! The page-level chrome shared by every portal page: theme selection with a
//! persisted preference, and the mobile navigation drawer. Clipboard, mailto,
//! and DOM wiring stay in the embedding shell; this crate only produces the
//! states and strings the shell applies.

mod error;
pub mod nav;
pub mod theme;

pub use crate::error::{PortalError, PortalErrorExt};
pub use crate::nav::NavState;
pub use crate::theme::{Theme, ThemePreference};
