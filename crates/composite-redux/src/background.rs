//! Store worker thread
//!
//! The worker is the store's sequential execution context:
//! - receives actions from the host and from [`Dispatcher`] re-entry,
//! - threads each one through the middleware chain,
//! - reduces the ones that reach the end of the chain and publishes the result.
//!
//! One action is processed at a time, so reductions never interleave and no
//! lock is needed around the reducer.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread;

use crate::action::Action;
use crate::dispatcher::{Dispatcher, Envelope};
use crate::middleware::{Context, Middleware, Next};
use crate::shared::Shared;
use crate::store::Reducer;

pub(crate) struct Worker<S, A> {
    pub(crate) rx: Receiver<Envelope<A>>,
    pub(crate) dispatcher: Dispatcher<A>,
    pub(crate) shared: Arc<Shared<S>>,
    pub(crate) reducer: Reducer<S, A>,
    pub(crate) middleware: Vec<Box<dyn Middleware<S, A>>>,
}

impl<S, A> Worker<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Action,
{
    pub(crate) fn spawn(self) -> std::io::Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("composite-store".to_string())
            .spawn(move || self.run())
    }

    fn run(mut self) {
        log::info!("Store worker started");

        while let Ok(envelope) = self.rx.recv() {
            let action = match envelope {
                Envelope::Action(action) => action,
                Envelope::Shutdown => {
                    log::info!("Store worker received shutdown signal");
                    break;
                }
            };

            if self.process(action) {
                log::info!("Terminal action reduced, stopping store worker");
                break;
            }
        }

        self.shared.close();
        log::info!("Store worker stopped");
    }

    /// Run one action through the chain, returns `true` if a terminal action
    /// was reduced
    fn process(&mut self, action: A) -> bool {
        let shared = &*self.shared;
        let reducer = self.reducer;
        let mut reached_terminal = false;

        let mut reduce = |action: A| {
            let next_state = reducer(S::clone(&shared.snapshot()), &action);
            shared.publish(Arc::new(next_state));
            log::trace!("Reduced {:?}", action);
            reached_terminal |= action.is_terminal();
        };

        let ctx = Context::new(shared, &self.dispatcher);
        Next::new(&mut self.middleware, &ctx, &mut reduce).run(action);

        reached_terminal
    }
}
