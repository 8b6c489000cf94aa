//! Reducers
//!
//! Same contract as every composite reducer: pure `(state, &Action) -> state`,
//! identity for actions a substate does not care about.

pub mod app_reducer;
pub mod chat_reducer;
pub mod error_reducer;
pub mod lifecycle_reducer;
pub mod participants_reducer;
pub mod repository_reducer;

pub use app_reducer::reduce;
