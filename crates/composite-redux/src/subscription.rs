//! Observer side of the store
//!
//! Every subscription receives the state that was current when it subscribed,
//! followed by one snapshot per reduced action, in reduce order. Consumers decide
//! on which task or thread they read, which is how view-models keep their
//! updates on the UI context while reduction runs on the store worker.

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Lossless stream of published state snapshots
pub struct StateSubscription<S> {
    rx: UnboundedReceiver<Arc<S>>,
}

impl<S> StateSubscription<S> {
    pub(crate) fn new(rx: UnboundedReceiver<Arc<S>>) -> Self {
        Self { rx }
    }

    /// Wait for the next snapshot
    ///
    /// Returns `None` once the store has shut down and all snapshots published
    /// before that have been consumed.
    pub async fn next(&mut self) -> Option<Arc<S>> {
        self.rx.recv().await
    }

    /// Take the next snapshot if one is already waiting
    pub fn try_next(&mut self) -> Option<Arc<S>> {
        self.rx.try_recv().ok()
    }

    /// Blocking variant of [`next`](Self::next) for synchronous callers
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn blocking_next(&mut self) -> Option<Arc<S>> {
        self.rx.blocking_recv()
    }

    /// Wait until a snapshot satisfies `predicate`, skipping the ones before it
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Option<Arc<S>>
    where
        F: FnMut(&S) -> bool,
    {
        while let Some(state) = self.rx.recv().await {
            if predicate(&state) {
                return Some(state);
            }
        }
        None
    }
}
