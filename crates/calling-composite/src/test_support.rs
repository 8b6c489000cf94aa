//! Helpers shared by the unit tests

use std::time::Duration;

use composite_redux::{Dispatcher, StateSubscription, Store};

use crate::actions::Action;

/// Reducer of an action recorder store
pub(crate) fn record(mut actions: Vec<Action>, action: &Action) -> Vec<Action> {
    actions.push(action.clone());
    actions
}

pub(crate) fn recorder() -> Store<Vec<Action>, Action> {
    Store::new(Vec::new(), record).unwrap()
}

/// Last snapshot published before the store shut down
pub(crate) async fn drain<S: Clone + Default>(mut subscription: StateSubscription<S>) -> S {
    let mut last = S::default();
    while let Ok(Some(state)) =
        tokio::time::timeout(Duration::from_secs(5), subscription.next()).await
    {
        last = state.as_ref().clone();
    }
    last
}

/// Actions an intent dispatches
pub(crate) async fn dispatched_by(intent: impl FnOnce(&Dispatcher<Action>)) -> Vec<Action> {
    let store = recorder();
    let subscription = store.subscribe();
    intent(store.dispatcher());
    store.shutdown();
    drain(subscription).await
}
