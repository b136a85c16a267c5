//! Core store implementation: the shared handle, key validation, and the two
//! backends (in-memory map, atomic one-file-per-key directory).

use crate::builder::StoreBuilder;
use crate::error::{StoreError, StoreErrorExt};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// The internal shared state of a [`Store`] instance.
#[derive(Debug)]
pub struct StoreInner {
    pub(crate) backend: Backend,
}

#[derive(Debug)]
pub(crate) enum Backend {
    Memory(RwLock<FxHashMap<String, String>>),
    File {
        /// Canonicalized root directory holding one file per key.
        root: PathBuf,
        /// A unique counter used to generate temporary file names.
        tmp_counter: AtomicU64,
    },
}

/// A thread-safe handle to the key-value store.
///
/// This handle is internally reference-counted (`Arc`) and can be cheaply
/// cloned across threads or tasks. All keys live in one flat namespace,
/// mirroring the browser storage the blobs migrated from.
///
/// # Example
///
/// ```rust
/// use ltrc_store::Store;
///
/// #[tokio::main]
/// async fn main() -> Result<(), ltrc_store::StoreError> {
///     let store = Store::in_memory();
///     store.set_raw("ltrc-theme-preference", "dark").await?;
///     assert_eq!(store.get_raw("ltrc-theme-preference").await?.as_deref(), Some("dark"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) inner: Arc<StoreInner>,
}

impl Deref for Store {
    type Target = StoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Store {
    #[must_use = "The store is not initialized until you call .connect()"]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// A process-local store with no disk backing.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { inner: Arc::new(StoreInner { backend: Backend::Memory(RwLock::default()) }) }
    }

    /// Reads the raw string stored under `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] for an unusable key and
    /// [`StoreError::Io`] for filesystem failures other than a missing file.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        match &self.backend {
            Backend::Memory(map) => Ok(map.read().get(key).cloned()),
            Backend::File { root, .. } => {
                let path = root.join(key);
                match fs::read_to_string(&path).await {
                    Ok(value) => Ok(Some(value)),
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(err) => {
                        Err(err).context(format!("Read failed: {}", path.display()))
                    },
                }
            },
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// The file backend uses an atomic swap: the value is written to a unique
    /// temp file, synced to hardware, then renamed over the target, so the
    /// stored blob is never observed half-written.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] or [`StoreError::Io`].
    pub async fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        match &self.backend {
            Backend::Memory(map) => {
                map.write().insert(key.to_owned(), value.to_owned());
                Ok(())
            },
            Backend::File { root, tmp_counter } => {
                let target = root.join(key);
                let temp = unique_tmp_path(&target, tmp_counter);

                {
                    let mut file = fs::OpenOptions::new()
                        .create_new(true)
                        .write(true)
                        .open(&temp)
                        .await
                        .context(format!("Temp creation failed: {}", temp.display()))?;
                    file.write_all(value.as_bytes()).await.context("Write failed")?;
                    file.sync_all().await.context("Hardware sync failed")?;
                }

                if let Err(err) = fs::rename(&temp, &target).await {
                    if err.kind() == std::io::ErrorKind::AlreadyExists {
                        fs::remove_file(&target).await.context(format!(
                            "Failed to replace existing blob: {}",
                            target.display()
                        ))?;
                        fs::rename(&temp, &target).await.context(format!(
                            "Atomic swap failed: {} -> {}",
                            temp.display(),
                            target.display()
                        ))?;
                    } else {
                        return Err(err).context(format!(
                            "Atomic swap failed: {} -> {}",
                            temp.display(),
                            target.display()
                        ));
                    }
                }

                debug!(key, "Blob saved atomically");
                Ok(())
            },
        }
    }

    /// Removes the value stored under `key`. Removing an absent key is a no-op,
    /// matching `localStorage.removeItem` semantics.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] or [`StoreError::Io`].
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        match &self.backend {
            Backend::Memory(map) => {
                map.write().remove(key);
                Ok(())
            },
            Backend::File { root, .. } => {
                let path = root.join(key);
                match fs::remove_file(&path).await {
                    Ok(()) => {
                        debug!(key, "Blob removed");
                        Ok(())
                    },
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                    Err(err) => {
                        Err(err).context(format!("Failed to remove: {}", path.display()))
                    },
                }
            },
        }
    }

    /// Loads and parses the JSON blob under `key`.
    ///
    /// On a missing key the default is returned silently; on malformed JSON,
    /// shape mismatch, or a read failure a warning is logged and the default
    /// is returned. This method never raises to the caller.
    pub async fn load<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        let raw = match self.get_raw(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                warn!(key, error = %err, "Failed to read stored blob, using default");
                return default;
            },
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "Failed to parse stored blob, using default");
                default
            },
        }
    }

    /// Serializes `value` to JSON and writes it under `key`.
    ///
    /// Unlike [`Store::load`], failures here are surfaced: a quota-style write
    /// error must reach the user as a "couldn't save" notice rather than
    /// vanish.
    ///
    /// # Errors
    /// Returns [`StoreError::Serialize`] or any raw-write error.
    pub async fn save<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let encoded =
            serde_json::to_string(value).context(format!("Failed to encode blob for {key}"))?;
        self.set_raw(key, &encoded).await
    }
}

/// Keys name flat files; path separators and empties are rejected outright.
fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey { message: "empty key".into(), context: None });
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.') {
        return Err(StoreError::InvalidKey {
            message: format!("illegal characters in key '{key}'").into(),
            context: None,
        });
    }
    Ok(())
}

fn unique_tmp_path(target: &std::path::Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("blob");
    let tmp_name = format!("{file_name}.ltrctmp.{counter}");
    target.with_file_name(tmp_name)
}
