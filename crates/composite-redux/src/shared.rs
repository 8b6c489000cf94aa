//! State cell shared between the store worker, the host and subscribers

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::subscription::StateSubscription;

pub(crate) struct Shared<S> {
    state: RwLock<Arc<S>>,
    /// `None` once the worker stopped
    subscribers: Mutex<Option<Vec<UnboundedSender<Arc<S>>>>>,
}

impl<S> Shared<S> {
    pub(crate) fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(Arc::new(initial)),
            subscribers: Mutex::new(Some(Vec::new())),
        }
    }

    /// Latest published state
    pub(crate) fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace the state and notify every live subscriber
    ///
    /// The subscriber list stays locked while the state is swapped so a
    /// concurrent `subscribe` sees either the old state plus this publish or
    /// the new state alone, never both.
    pub(crate) fn publish(&self, next: Arc<S>) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&next);
        if let Some(subscribers) = subscribers.as_mut() {
            subscribers.retain(|tx| tx.send(Arc::clone(&next)).is_ok());
        }
    }

    /// After [`close`](Self::close) the subscription yields the final state
    /// and ends
    pub(crate) fn subscribe(&self) -> StateSubscription<S> {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (tx, rx) = mpsc::unbounded_channel();
        // Cannot fail, the receiver is still in scope
        let _ = tx.send(self.snapshot());
        if let Some(subscribers) = subscribers.as_mut() {
            subscribers.push(tx);
        }
        StateSubscription::new(rx)
    }

    /// Drop all subscriber channels so pending subscriptions end, and refuse
    /// new ones
    pub(crate) fn close(&self) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
