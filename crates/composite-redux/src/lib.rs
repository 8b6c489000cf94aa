//! Redux-style state container shared by the calling and chat composites
//!
//! ```text
//! dispatch(action) ──► queue ──► Middleware chain ──► Reducer ──► publish Arc<State>
//!        ▲                            │
//!        └──────── Dispatcher ◄───────┘  (follow-up actions from async effects)
//! ```
//!
//! - One worker thread per [`Store`] processes actions strictly in submission order.
//! - Middlewares wrap each other like an onion: the first registered one sees an
//!   action first and decides whether to pass it on via [`Next::run`].
//! - The reducer is a plain `fn(S, &A) -> S`; every action that reaches it results
//!   in exactly one published snapshot.
//!
//! # Example
//!
//! ```rust
//! use composite_redux::{Action, Store};
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {}
//!
//! fn reduce(state: u32, action: &CounterAction) -> u32 {
//!     match action {
//!         CounterAction::Increment => state + 1,
//!     }
//! }
//!
//! # fn main() -> Result<(), composite_redux::StoreError> {
//! let store = Store::new(0u32, reduce)?;
//! let mut updates = store.subscribe();
//! store.dispatch(CounterAction::Increment);
//! assert_eq!(*updates.blocking_next().unwrap(), 0);
//! assert_eq!(*updates.blocking_next().unwrap(), 1);
//! store.shutdown();
//! # Ok(())
//! # }
//! ```

mod action;
mod background;
mod dispatcher;
mod error;
pub mod middleware;
mod shared;
mod store;
mod subscription;
mod view_model;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use error::StoreError;
pub use middleware::{
    logging::LoggingMiddleware,
    throttle::{ThrottleMiddleware, Throttler},
    Context, Middleware, Next,
};
pub use store::{Reducer, Store, StoreBuilder};
pub use subscription::StateSubscription;
pub use view_model::{bind_view_model, ViewModel};
