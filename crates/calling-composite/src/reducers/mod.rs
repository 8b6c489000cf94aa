//! Reducers
//!
//! Pure functions `(state, &Action) -> state`. Each substate reducer receives the
//! full action and returns its state untouched for actions it does not handle.

pub mod app_reducer;
pub mod audio_session_reducer;
pub mod button_view_data_reducer;
pub mod calling_reducer;
pub mod error_reducer;
pub mod lifecycle_reducer;
pub mod local_user_reducer;
pub mod navigation_reducer;
pub mod permission_reducer;
pub mod remote_participants_reducer;

pub use app_reducer::reduce;
