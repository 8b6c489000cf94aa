use std::fmt::Debug;

/// Marker trait for values that can be dispatched into a [`Store`](crate::Store)
///
/// Actions are immutable descriptions of intents or events. `Debug` is required
/// so the logging middleware and the worker can trace them.
pub trait Action: Debug + Send + 'static {
    /// Whether this action ends the session
    ///
    /// After a terminal action has been reduced and published, the store stops
    /// processing; anything dispatched afterwards is dropped.
    fn is_terminal(&self) -> bool {
        false
    }
}
