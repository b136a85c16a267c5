//! Trailing-edge debounce as an explicit cancellable scheduled task.
//!
//! Each call cancels any pending task and schedules a new one, so a burst of
//! edits produces exactly one execution after the quiet period — the autosave
//! semantics the wizard relies on. There is deliberately no queueing: the
//! latest scheduled task is the only one that can fire.

use std::future::Future;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::trace;

/// A single-slot debounce timer.
///
/// Not `Clone`: the owner of the debouncer owns the pending slot. Dropping it
/// cancels whatever is still scheduled.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// The configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `task` to run after the quiet period, cancelling any task
    /// scheduled earlier that has not fired yet.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        });
        trace!(delay_ms = delay.as_millis() as u64, "Debounce scheduled");
        self.pending = Some(handle.abort_handle());
    }

    /// Cancels the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a scheduled task is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
