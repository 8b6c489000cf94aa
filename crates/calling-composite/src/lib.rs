//! Calling composite state container
//!
//! The calling session is driven by a [`composite_redux::Store`] holding an
//! [`AppState`](state::AppState). Hosts dispatch [`Action`](actions::Action)s,
//! the calling middleware turns the relevant ones into calls on a
//! [`CallingService`](service::CallingService), and view-models project the
//! published state into UI-facing fields.

pub mod actions;
pub mod domain_models;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod service;
pub mod state;
pub mod store;
pub mod view_models;

#[cfg(test)]
mod test_support;

pub use actions::Action;
pub use error::{CallCompositeInternalError, ServiceError};
pub use service::{CallingEvent, CallingService};
pub use state::AppState;
pub use store::{construct_store, CallingStore};
