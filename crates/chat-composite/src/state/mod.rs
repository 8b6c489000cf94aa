//! Application State Module

mod app;
mod chat;
mod error;
mod lifecycle;
mod participants;
mod repository;

pub use app::AppState;
pub use chat::{ChatState, LocalUserInfo};
pub use error::{ErrorCategory, ErrorState};
pub use lifecycle::{AppStatus, LifecycleState};
pub use participants::ParticipantsState;
pub use repository::RepositoryState;
