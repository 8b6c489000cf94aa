//! Chat composite state container
//!
//! Same shape as the calling composite: a [`composite_redux::Store`] over
//! [`AppState`](state::AppState), a middleware talking to a
//! [`ChatService`](service::ChatService), and view-models over the state.
//! The message list keeps locally sent messages next to the ones coming from
//! the service, tracking their send status.

pub mod actions;
pub mod domain_models;
pub mod error;
pub mod middleware;
pub mod reducers;
pub mod service;
pub mod state;
pub mod store;
pub mod view_models;

#[cfg(test)]
mod test_support;

pub use actions::Action;
pub use error::{ChatCompositeInternalError, ServiceError};
pub use service::{ChatEvent, ChatService};
pub use state::AppState;
pub use store::{construct_store, ChatStore};
