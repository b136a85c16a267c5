//! Commonly used kernel exports.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::debounce::Debouncer;
pub use crate::time::{creation_id, now_display, now_rfc3339};
