//! Cooperative shutdown signalling for pipeline tasks.
//!
//! A single [`Shutdown`] is created per pipeline run and cloned into every
//! spawned task. Triggering it unblocks all pending waits at once; the
//! open → triggered transition happens at most once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

struct Inner {
    triggered: AtomicBool,
    notify: Notify,
}

/// Cloneable one-shot broadcast signal.
///
/// Clones share the same underlying state, so any holder can observe the
/// signal and exactly one call to [`trigger`](Shutdown::trigger) performs
/// the transition.
#[derive(Clone)]
pub struct Shutdown {
    inner: Arc<Inner>,
}

impl Shutdown {
    /// Create a fresh, open signal.
    pub fn new() -> Self {
        Shutdown {
            inner: Arc::new(Inner {
                triggered: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    /// Perform the open → triggered transition.
    ///
    /// Returns `true` only for the call that performed the transition;
    /// later calls are no-ops returning `false`.
    pub fn trigger(&self) -> bool {
        if self.inner.triggered.swap(true, Ordering::AcqRel) {
            return false;
        }
        log::debug!("shutdown triggered");
        self.inner.notify.notify_waiters();
        true
    }

    /// Synchronous probe of the signal state.
    pub fn is_triggered(&self) -> bool {
        self.inner.triggered.load(Ordering::Acquire)
    }

    /// Wait until the signal is triggered.
    ///
    /// Resolves immediately if it already was. Intended for use inside
    /// `tokio::select!`, raced against a channel send or receive.
    pub async fn triggered(&self) {
        if self.is_triggered() {
            return;
        }
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        // Register the waiter before re-checking the flag so a trigger
        // landing in between still wakes us.
        notified.as_mut().enable();
        if self.is_triggered() {
            return;
        }
        notified.await;
    }

    /// RAII guard that triggers this signal when dropped.
    pub fn guard(&self) -> ShutdownGuard {
        ShutdownGuard {
            shutdown: self.clone(),
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Triggers its [`Shutdown`] on drop.
///
/// Held by the top-level driver so the pipeline is torn down on every exit
/// path of the consuming scope, normal or early.
pub struct ShutdownGuard {
    shutdown: Shutdown,
}

impl ShutdownGuard {
    /// The signal this guard releases.
    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
