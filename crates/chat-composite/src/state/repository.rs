//! Message repository
//!
//! Messages are kept in `created_on` order. Locally sent messages live under
//! their internal id until the service returns the actual one.

use crate::domain_models::ChatMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryState {
    pub messages: Vec<ChatMessage>,
    pub is_fetching_initial: bool,
    pub is_fetching_previous: bool,
    /// The service returned an empty page of history
    pub has_fetched_all: bool,
}

impl RepositoryState {
    pub fn message(&self, id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    pub(crate) fn message_mut(&mut self, id: &str) -> Option<&mut ChatMessage> {
        self.messages.iter_mut().find(|message| message.id == id)
    }

    /// Insert or replace by id, keeping the order
    pub(crate) fn upsert(&mut self, message: ChatMessage) {
        match self.message_mut(&message.id) {
            Some(existing) => *existing = message,
            None => {
                let index = self
                    .messages
                    .partition_point(|existing| existing.created_on <= message.created_on);
                self.messages.insert(index, message);
            }
        }
    }

    pub(crate) fn remove(&mut self, id: &str) {
        self.messages.retain(|message| message.id != id);
    }

    /// Newest message not sent by `local_user_id`
    pub fn latest_remote_message(&self, local_user_id: &str) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|message| {
            !message.is_local() && message.sender_id.as_deref() != Some(local_user_id)
        })
    }
}
