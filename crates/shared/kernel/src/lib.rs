//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs, time
//! formatting, config loading, and the autosave debounce primitive.
//!
//! ## ID generation
//! Player records are identified by their creation timestamp in epoch
//! milliseconds. This matches the ids already present in stored blobs, is
//! monotonic under normal use, and is only best-effort unique under rapid
//! creation:
//! ```rust
//! let id = ltrc_kernel::creation_id();
//! assert!(id > 0);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use ltrc_domain::config::PortalConfig;
//! use ltrc_kernel::config::load_config;
//! let cfg: PortalConfig = load_config(Some("portal")).unwrap();
//! ```

pub mod config;
pub mod debounce;
pub mod prelude;
pub mod time;

pub use debounce::Debouncer;
pub use ltrc_domain as domain;
pub use time::creation_id;
