//! Key-value string store backing the portal's persisted blobs.
//!
//! This is the Rust rendition of the browser's local storage: string keys,
//! string values, shared process-wide, last write wins. Two backends are
//! provided behind one handle:
//!
//! - **Memory**: a process-local map, used by tests and by shells that have
//!   their own storage bridge.
//! - **File**: one file per key under a sandboxed root directory, written with
//!   an atomic swap (unique temp write + `fsync` + `rename`) so a crash never
//!   leaves a half-written blob.
//!
//! On top of the raw API sit the typed helpers the slices use:
//! [`Store::load`] parses a stored JSON blob and falls back to a caller
//! default on any failure (missing key, malformed JSON, shape mismatch) with
//! a logged warning — it never raises. [`Store::save`] serializes and writes,
//! and DOES surface write failures so the caller can show a "couldn't save"
//! notice instead of failing silently.
//!
//! # Examples
//!
//! ```rust
//! use ltrc_store::{Store, StoreError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), StoreError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let root = tmp.path().join("data");
//!     let store = Store::builder().root(&root).create(true).connect().await?;
//!
//!     store.save("ltrc-placement-history", &vec!["Boys Clinic 8"]).await?;
//!     let history: Vec<String> = store.load("ltrc-placement-history", Vec::new()).await;
//!     assert_eq!(history, ["Boys Clinic 8"]);
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod engine;
mod error;

pub use builder::StoreBuilder;
pub use engine::Store;
pub use error::{StoreError, StoreErrorExt};
