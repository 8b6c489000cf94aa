//! View-model binding
//!
//! View-models keep a projection of the state plus local UI fields that never
//! go through the store. They compare before writing so the view only redraws
//! when something it shows actually changed.

use crate::subscription::StateSubscription;

/// Projection of a state `S` into presentation fields
pub trait ViewModel<S> {
    /// Refresh the projection, returns whether anything visible changed
    fn update(&mut self, state: &S) -> bool;
}

/// Drive `view_model` from `subscription` until the store shuts down
///
/// Runs on whatever task awaits it, which makes that task the UI context:
/// `on_change` is called there after every update that changed something.
pub async fn bind_view_model<S, V, F>(
    mut subscription: StateSubscription<S>,
    view_model: &mut V,
    mut on_change: F,
) where
    V: ViewModel<S>,
    F: FnMut(&V),
{
    while let Some(state) = subscription.next().await {
        if view_model.update(&state) {
            on_change(view_model);
        }
    }
}
