use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::action::Action;
use crate::background::Worker;
use crate::dispatcher::Dispatcher;
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::shared::Shared;
use crate::subscription::StateSubscription;

/// Pure state transition function
pub type Reducer<S, A> = fn(S, &A) -> S;

/// Store - single source of truth for a composite session
///
/// The Store follows the Redux pattern:
/// - Centralized state, replaced wholesale on each reduced action
/// - Actions are processed strictly in submission order on a dedicated worker
/// - Middleware intercepts actions before the reducer and runs side effects
/// - Observers receive immutable `Arc<S>` snapshots
///
/// The store is created once per session and owned by the host. Consumers get
/// a [`Dispatcher`] or a [`StateSubscription`], never the store itself. Dropping
/// the store (or calling [`shutdown`](Self::shutdown)) stops the worker.
pub struct Store<S, A> {
    shared: Arc<Shared<S>>,
    dispatcher: Dispatcher<A>,
    worker: Option<JoinHandle<()>>,
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Action,
{
    /// Create a store without middleware
    pub fn new(initial_state: S, reducer: Reducer<S, A>) -> Result<Self, StoreError> {
        Self::builder(initial_state, reducer).build()
    }

    /// Start building a store with middleware
    pub fn builder(initial_state: S, reducer: Reducer<S, A>) -> StoreBuilder<S, A> {
        StoreBuilder {
            initial_state,
            reducer,
            middleware: Vec::new(),
        }
    }

    /// Enqueue an action; returns without waiting for it to be processed
    pub fn dispatch(&self, action: A) {
        self.dispatcher.dispatch(action);
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    /// Get the latest published state
    pub fn state(&self) -> Arc<S> {
        self.shared.snapshot()
    }

    /// Subscribe to state changes, starting with the current state
    pub fn subscribe(&self) -> StateSubscription<S> {
        self.shared.subscribe()
    }

    /// Stop the worker once the actions queued so far are processed
    ///
    /// Follow-up actions dispatched by effects after this point are dropped.
    pub fn shutdown(mut self) {
        self.stop();
    }
}

impl<S, A> Store<S, A> {
    fn stop(&mut self) {
        let Some(handle) = self.worker.take() else {
            return;
        };
        self.dispatcher.request_shutdown();
        if handle.thread().id() == thread::current().id() {
            return;
        }
        if handle.join().is_err() {
            log::error!("Store worker panicked");
        }
    }
}

impl<S, A> Drop for Store<S, A> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Builder collecting the middleware chain before the worker starts
pub struct StoreBuilder<S, A> {
    initial_state: S,
    reducer: Reducer<S, A>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Action,
{
    /// Add middleware; the first one added is the outermost
    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<S, A> + 'static,
    {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Add an already boxed middleware
    pub fn boxed_middleware(mut self, middleware: Box<dyn Middleware<S, A>>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Spawn the worker and return the running store
    pub fn build(self) -> Result<Store<S, A>, StoreError> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let shared = Arc::new(Shared::new(self.initial_state));

        let worker = Worker {
            rx,
            dispatcher: dispatcher.clone(),
            shared: Arc::clone(&shared),
            reducer: self.reducer,
            middleware: self.middleware,
        }
        .spawn()?;

        Ok(Store {
            shared,
            dispatcher,
            worker: Some(worker),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{Context, Next};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Push(u32),
        Noop,
        Request(u32),
        Exit,
    }

    impl Action for TestAction {
        fn is_terminal(&self) -> bool {
            matches!(self, TestAction::Exit)
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestState {
        values: Vec<u32>,
    }

    fn reduce(mut state: TestState, action: &TestAction) -> TestState {
        if let TestAction::Push(value) = action {
            state.values.push(*value);
        }
        state
    }

    /// Answers `Request(n)` with `Push(n * 10)` from a spawned thread
    struct EchoMiddleware;

    impl Middleware<TestState, TestAction> for EchoMiddleware {
        fn handle(
            &mut self,
            action: TestAction,
            ctx: &Context<'_, TestState, TestAction>,
            next: Next<'_, TestState, TestAction>,
        ) {
            if let TestAction::Request(value) = action {
                let dispatcher = ctx.dispatcher();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(10));
                    dispatcher.dispatch(TestAction::Push(value * 10));
                });
            }
            next.run(action);
        }
    }

    /// Consumes `Noop` so it never reaches the reducer
    struct SwallowNoop;

    impl Middleware<TestState, TestAction> for SwallowNoop {
        fn handle(
            &mut self,
            action: TestAction,
            _ctx: &Context<'_, TestState, TestAction>,
            next: Next<'_, TestState, TestAction>,
        ) {
            if action != TestAction::Noop {
                next.run(action);
            }
        }
    }

    #[test]
    fn test_subscription_starts_with_current_state() {
        let store = Store::new(TestState::default(), reduce).unwrap();
        let mut updates = store.subscribe();

        assert_eq!(*updates.blocking_next().unwrap(), TestState::default());
    }

    #[test]
    fn test_actions_reduced_in_submission_order() {
        let store = Store::new(TestState::default(), reduce).unwrap();
        let mut updates = store.subscribe();

        for value in 0..50 {
            store.dispatch(TestAction::Push(value));
        }

        // Initial snapshot plus one per action, each one longer than the last
        for expected_len in 0..=50 {
            let state = updates.blocking_next().unwrap();
            assert_eq!(state.values.len(), expected_len);
        }
        assert_eq!(store.state().values, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_unchanged_state_is_still_published() {
        let store = Store::new(TestState::default(), reduce).unwrap();
        let mut updates = store.subscribe();

        store.dispatch(TestAction::Request(1));
        store.dispatch(TestAction::Request(2));

        let _initial = updates.blocking_next().unwrap();
        assert!(updates.blocking_next().unwrap().values.is_empty());
        assert!(updates.blocking_next().unwrap().values.is_empty());
    }

    #[test]
    fn test_concurrent_dispatch_is_serialized() {
        let store = Store::new(TestState::default(), reduce).unwrap();
        let mut updates = store.subscribe();

        thread::scope(|scope| {
            for caller in 0..4u32 {
                let dispatcher = store.dispatcher().clone();
                scope.spawn(move || {
                    for index in 0..25 {
                        dispatcher.dispatch(TestAction::Push(caller * 100 + index));
                    }
                });
            }
        });

        // Interleaved reductions would lose updates, so all 100 must land
        let mut last = updates.blocking_next().unwrap();
        while last.values.len() < 100 {
            last = updates.blocking_next().unwrap();
        }

        // Every caller's actions appear in the order that caller submitted them
        for caller in 0..4u32 {
            let own: Vec<u32> = last
                .values
                .iter()
                .copied()
                .filter(|value| value / 100 == caller)
                .collect();
            assert_eq!(own, (0..25).map(|i| caller * 100 + i).collect::<Vec<_>>());
        }
    }

    #[tokio::test]
    async fn test_follow_up_dispatch_processed_after_queued_actions() {
        let store = Store::builder(TestState::default(), reduce)
            .middleware(EchoMiddleware)
            .build()
            .unwrap();
        let mut updates = store.subscribe();

        store.dispatch(TestAction::Request(4));
        store.dispatch(TestAction::Push(1));

        let state = tokio::time::timeout(
            Duration::from_secs(5),
            updates.wait_for(|state| state.values.len() == 2),
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(state.values, vec![1, 40]);
    }

    #[test]
    fn test_consumed_action_is_not_published() {
        let store = Store::builder(TestState::default(), reduce)
            .middleware(SwallowNoop)
            .build()
            .unwrap();
        let mut updates = store.subscribe();

        store.dispatch(TestAction::Noop);
        store.dispatch(TestAction::Push(3));

        let _initial = updates.blocking_next().unwrap();
        assert_eq!(updates.blocking_next().unwrap().values, vec![3]);
    }

    #[test]
    fn test_dispatch_after_shutdown_is_noop() {
        let store = Store::new(TestState::default(), reduce).unwrap();
        let dispatcher = store.dispatcher().clone();
        let mut updates = store.subscribe();

        store.dispatch(TestAction::Push(1));
        store.shutdown();
        dispatcher.dispatch(TestAction::Push(2));

        let mut last = None;
        while let Some(state) = updates.blocking_next() {
            last = Some(state);
        }
        assert_eq!(last.unwrap().values, vec![1]);
    }

    #[test]
    fn test_terminal_action_stops_processing() {
        let store = Store::new(TestState::default(), reduce).unwrap();
        let mut updates = store.subscribe();

        store.dispatch(TestAction::Push(1));
        store.dispatch(TestAction::Exit);
        store.dispatch(TestAction::Push(2));

        let mut published = Vec::new();
        while let Some(state) = updates.blocking_next() {
            published.push(state);
        }

        // initial, Push(1), Exit; the subscription ends with the worker
        assert_eq!(published.len(), 3);
        assert_eq!(published[2].values, vec![1]);
    }

    #[test]
    fn test_subscription_after_terminal_action_ends() {
        let store = Store::new(TestState::default(), reduce).unwrap();
        let mut updates = store.subscribe();

        store.dispatch(TestAction::Push(1));
        store.dispatch(TestAction::Exit);
        while updates.blocking_next().is_some() {}

        let mut late = store.subscribe();
        assert_eq!(late.blocking_next().unwrap().values, vec![1]);
        assert!(late.blocking_next().is_none());
    }
}
