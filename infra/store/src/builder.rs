use crate::engine::{Backend, Store, StoreInner};
use crate::error::{StoreError, StoreErrorExt};
use parking_lot::RwLock;
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone)]
struct StoreConfig {
    create: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Type-safe fluent builder for a file-backed [`Store`].
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: StoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> StoreBuilder<S> {
    #[must_use = "Sets whether the store root should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> StoreBuilder<N> {
        StoreBuilder { state, config: self.config }
    }
}

impl StoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory path for the file backend"]
    pub fn root(self, path: impl Into<PathBuf>) -> StoreBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }

    /// Shortcut to a memory-backed store; equivalent to [`Store::in_memory`].
    #[must_use]
    pub fn memory(self) -> Store {
        Store { inner: Arc::new(StoreInner { backend: Backend::Memory(RwLock::default()) }) }
    }
}

impl StoreBuilder<WithRoot> {
    /// Consumes the configuration and initializes the file-backed store.
    ///
    /// Boot sequence:
    /// 1. **Bootstrapping**: Creates the root directory if `create(true)` was set.
    /// 2. **Canonicalization**: Resolves the root to an absolute physical path.
    /// 3. **Self-Healing**: Removes orphaned `.ltrctmp.*` files left behind by
    ///    a crash mid-write; failures here only log a warning.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the root cannot be created or resolved.
    pub async fn connect(self) -> Result<Store, StoreError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .await
                .context(format!("Failed to bootstrap store root: {}", root.display()))?;
            info!(path = %root.display(), "Bootstrapped store root directory");
        }

        let canonical = fs::canonicalize(root)
            .await
            .context(format!("Failed to resolve store root: {}", root.display()))?;

        purge_tmp(&canonical).await;

        Ok(Store {
            inner: Arc::new(StoreInner {
                backend: Backend::File { root: canonical, tmp_counter: AtomicU64::new(1) },
            }),
        })
    }
}

/// Best-effort cleanup of temp files orphaned by a crash during an atomic swap.
async fn purge_tmp(root: &std::path::Path) {
    let Ok(mut entries) = fs::read_dir(root).await else {
        return;
    };
    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.contains(".ltrctmp.")
            && let Err(err) = fs::remove_file(entry.path()).await
        {
            tracing::warn!(path = %entry.path().display(), error = %err, "Orphaned temp cleanup failed");
        }
    }
}
