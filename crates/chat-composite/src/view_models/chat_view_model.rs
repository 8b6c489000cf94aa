//! Chat screen
//!
//! Aggregates the message list and typing indicator with the header, the
//! request-error banner and the exit signal for the host.

use composite_redux::{Dispatcher, ViewModel};

use crate::actions::{Action, ChatAction};
use crate::error::ChatCompositeInternalError;
use crate::state::{AppState, ErrorCategory};

use super::{set, MessageListViewModel, TypingParticipantsViewModel};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatViewModel {
    pub title: String,
    pub participant_count: usize,
    pub is_loading: bool,
    pub message_list: MessageListViewModel,
    pub typing: TypingParticipantsViewModel,
    /// Banner for a failed request; the chat keeps going
    pub error_banner: Option<String>,
    /// The session ended and the host should close the chat
    pub exit_error_code: Option<&'static str>,
    last_request_error: Option<ChatCompositeInternalError>,
}

impl ChatViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_appeared(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(ChatAction::ChatStartRequested.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error_banner = None;
    }

    pub fn leave(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(Action::CompositeExit);
    }
}

impl ViewModel<AppState> for ChatViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let title = state.chat.topic.clone().unwrap_or_else(|| "Chat".to_string());
        let mut changed = set(&mut self.title, title);
        // the local user is not listed
        changed |= set(
            &mut self.participant_count,
            state.participants.participants.len(),
        );
        changed |= set(
            &mut self.is_loading,
            state.chat.is_initializing || state.repository.is_fetching_initial,
        );
        changed |= self.message_list.update(state);
        changed |= self.typing.update(state);

        match (state.error.category, state.error.internal_error) {
            (ErrorCategory::Fatal, Some(internal_error)) => {
                changed |= set(&mut self.exit_error_code, internal_error.error_code());
            }
            (ErrorCategory::Request, Some(internal_error))
                if self.last_request_error != Some(internal_error) =>
            {
                self.last_request_error = Some(internal_error);
                changed |= set(&mut self.error_banner, Some(internal_error.to_string()));
            }
            _ => {}
        }
        changed
    }
}
