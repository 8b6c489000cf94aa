//! Dispatcher for actions that re-enter the store queue
//!
//! Middleware and asynchronous effects never hold the store itself. They get a
//! `Dispatcher`, a cloneable non-owning handle onto the store's action channel.
//! Actions sent through it are appended to the same serialized queue as the
//! ones dispatched by the host, so they are processed after everything that was
//! already queued.
//!
//! Once the store has shut down the channel is closed and dispatching turns into
//! a logged no-op; effects that finish after teardown need no special handling.

use std::sync::mpsc::Sender;

/// Item carried by the store queue
pub(crate) enum Envelope<A> {
    Action(A),
    Shutdown,
}

/// Handle for dispatching actions into a store's serialized queue
pub struct Dispatcher<A> {
    tx: Sender<Envelope<A>>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<A> Dispatcher<A> {
    pub(crate) fn new(tx: Sender<Envelope<A>>) -> Self {
        Self { tx }
    }

    /// Enqueue an action and return immediately
    ///
    /// The action runs through the full middleware chain once every action
    /// queued before it has been processed.
    pub fn dispatch(&self, action: A) {
        if self.tx.send(Envelope::Action(action)).is_err() {
            log::debug!("Dispatcher: store is shut down, dropping action");
        }
    }

    /// Ask the worker to stop after the actions already queued
    pub(crate) fn request_shutdown(&self) {
        // A closed channel means the worker already stopped
        let _ = self.tx.send(Envelope::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_dispatch_enqueues_in_order() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(1);
        dispatcher.clone().dispatch(2);

        let received: Vec<i32> = rx
            .try_iter()
            .filter_map(|envelope| match envelope {
                Envelope::Action(value) => Some(value),
                Envelope::Shutdown => None,
            })
            .collect();
        assert_eq!(received, vec![1, 2]);
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_is_noop() {
        let (tx, rx) = mpsc::channel::<Envelope<i32>>();
        let dispatcher = Dispatcher::new(tx);
        drop(rx);

        // Must not panic
        dispatcher.dispatch(42);
        dispatcher.request_shutdown();
    }
}
