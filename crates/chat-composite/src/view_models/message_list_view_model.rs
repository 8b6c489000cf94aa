//! Message list and composer
//!
//! The draft lives here only; the store sees a message once it is sent.

use chrono::{DateTime, Utc};
use composite_redux::{Dispatcher, ViewModel};
use uuid::Uuid;

use crate::actions::{Action, ChatAction, RepositoryAction};
use crate::domain_models::{ChatMessage, ChatMessageType, MessageSendStatus};
use crate::state::AppState;

use super::set;

/// One rendered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: String,
    pub content: String,
    pub sender_name: String,
    pub is_local: bool,
    pub send_status: Option<MessageSendStatus>,
    pub created_on: DateTime<Utc>,
    pub is_edited: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageListViewModel {
    pub rows: Vec<MessageRow>,
    pub is_fetching_previous: bool,
    pub has_fetched_all: bool,
    pub draft: String,
    /// Newest message from someone else, target of read receipts
    latest_remote_message_id: Option<String>,
}

impl MessageListViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the composer text; typing announces itself to the thread
    pub fn set_draft(&mut self, text: impl Into<String>, dispatcher: &Dispatcher<Action>) {
        self.draft = text.into();
        if !self.draft.trim().is_empty() {
            dispatcher.dispatch(ChatAction::SendTypingIndicatorTriggered.into());
        }
    }

    /// Send the draft and clear it
    ///
    /// # Returns
    /// The internal id of the message, `None` for a blank draft
    pub fn send_draft(
        &mut self,
        now: DateTime<Utc>,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<String> {
        let content = self.draft.trim().to_string();
        if content.is_empty() {
            return None;
        }

        let internal_id = Uuid::new_v4().to_string();
        self.draft.clear();
        dispatcher.dispatch(
            RepositoryAction::SendMessageTriggered {
                internal_id: internal_id.clone(),
                content,
                timestamp: now,
            }
            .into(),
        );
        Some(internal_id)
    }

    /// Scrolled to the top of the list
    pub fn fetch_previous(&self, dispatcher: &Dispatcher<Action>) {
        if self.is_fetching_previous || self.has_fetched_all {
            return;
        }
        dispatcher.dispatch(RepositoryAction::FetchPreviousMessagesTriggered.into());
    }

    /// The newest message is on screen
    pub fn mark_read(&self, dispatcher: &Dispatcher<Action>) {
        if let Some(message_id) = &self.latest_remote_message_id {
            dispatcher.dispatch(
                ChatAction::SendReadReceiptTriggered {
                    message_id: message_id.clone(),
                }
                .into(),
            );
        }
    }

    /// Edit one of the local user's messages
    pub fn edit_message(
        &self,
        message_id: &str,
        content: impl Into<String>,
        dispatcher: &Dispatcher<Action>,
    ) {
        let Some(row) = self.rows.iter().find(|row| row.id == message_id) else {
            return;
        };
        if !row.is_local {
            return;
        }
        dispatcher.dispatch(
            RepositoryAction::EditMessageTriggered {
                message_id: message_id.to_string(),
                content: content.into(),
                prev_content: row.content.clone(),
            }
            .into(),
        );
    }

    pub fn delete_message(&self, message_id: &str, dispatcher: &Dispatcher<Action>) {
        if self.rows.iter().any(|row| row.id == message_id && row.is_local) {
            dispatcher.dispatch(
                RepositoryAction::DeleteMessageTriggered {
                    message_id: message_id.to_string(),
                }
                .into(),
            );
        }
    }
}

impl ViewModel<AppState> for MessageListViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let local_user = &state.chat.local_user;
        let rows: Vec<MessageRow> = state
            .repository
            .messages
            .iter()
            .filter(|message| {
                matches!(
                    message.message_type,
                    ChatMessageType::Text | ChatMessageType::Html
                )
            })
            .map(|message| {
                let is_local = message.is_local()
                    || message.sender_id.as_deref() == Some(local_user.identifier.as_str());
                MessageRow {
                    id: message.id.clone(),
                    content: message.content.clone(),
                    sender_name: sender_name(message, state, is_local),
                    is_local,
                    send_status: message.send_status,
                    created_on: message.created_on,
                    is_edited: message.edited_on.is_some(),
                }
            })
            .collect();
        let latest_remote = state
            .repository
            .latest_remote_message(&local_user.identifier)
            .map(|message| message.id.clone());

        let mut changed = set(&mut self.rows, rows);
        changed |= set(
            &mut self.is_fetching_previous,
            state.repository.is_fetching_previous,
        );
        changed |= set(&mut self.has_fetched_all, state.repository.has_fetched_all);
        // not rendered
        self.latest_remote_message_id = latest_remote;
        changed
    }
}

fn sender_name(message: &ChatMessage, state: &AppState, is_local: bool) -> String {
    if is_local {
        return state.chat.local_user.display_name.clone();
    }
    message
        .sender_display_name
        .clone()
        .or_else(|| {
            let sender_id = message.sender_id.as_deref()?;
            state
                .participants
                .display_name(sender_id)
                .map(str::to_string)
        })
        .unwrap_or_default()
}
