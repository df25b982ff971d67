//! Cooperative cancellation for view-owned async work.
//!
//! A view that spawns a request creates a token bound to its own cleanup.
//! The completion callback checks the token before touching signals, so a
//! response that lands after the view is gone is dropped.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    parent: Option<Box<CancelToken>>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that is also cancelled whenever `self` is.
    #[must_use]
    pub fn child(&self) -> Self {
        Self { cancelled: Arc::default(), parent: Some(Box::new(self.clone())) }
    }

    /// Cancel `previous` and return a fresh child for the next run.
    ///
    /// Used by effects that reload on a changing input: only the latest
    /// run may apply its result.
    #[must_use]
    pub fn restart(&self, previous: Option<Self>) -> Self {
        if let Some(previous) = previous {
            previous.cancel();
        }
        self.child()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.parent.as_ref().is_some_and(|p| p.is_cancelled())
    }
}

/// Token cancelled when the current reactive owner is cleaned up.
pub fn cancel_on_cleanup() -> CancelToken {
    let token = CancelToken::new();
    let on_drop = token.clone();
    leptos::prelude::on_cleanup(move || on_drop.cancel());
    token
}

/// Run `task` in the background and hand its output to `apply` unless
/// `cancel` fired first. Browser-only; server rendering skips the task.
pub fn spawn_cancellable<F, T, A>(cancel: &CancelToken, task: F, apply: A)
where
    F: Future<Output = T> + 'static,
    T: 'static,
    A: FnOnce(T) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let cancel = cancel.clone();
        leptos::task::spawn_local(async move {
            let output = task.await;
            if cancel.is_cancelled() {
                log::debug!("dropping result of cancelled view task");
                return;
            }
            apply(output);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cancel, task, apply);
    }
}
