//! View models
//!
//! Projections of [`AppState`](crate::state::AppState) for the chat screen,
//! driven with [`composite_redux::bind_view_model`].

pub mod chat_view_model;
pub mod message_list_view_model;
pub mod typing_participants_view_model;

pub use chat_view_model::ChatViewModel;
pub use message_list_view_model::{MessageListViewModel, MessageRow};
pub use typing_participants_view_model::TypingParticipantsViewModel;

/// Assign `value` to `field`, returning whether it was different
pub(crate) fn set<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}
