//! Message repository actions

use chrono::{DateTime, Utc};

use crate::domain_models::ChatMessage;
use crate::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryAction {
    FetchInitialMessagesTriggered,
    FetchInitialMessagesSuccess {
        messages: Vec<ChatMessage>,
    },
    FetchInitialMessagesFailed {
        error: ServiceError,
    },
    FetchPreviousMessagesTriggered,
    FetchPreviousMessagesSuccess {
        messages: Vec<ChatMessage>,
    },
    FetchPreviousMessagesFailed {
        error: ServiceError,
    },

    /// Show the message right away under a local id until the service answers
    SendMessageTriggered {
        internal_id: String,
        content: String,
        timestamp: DateTime<Utc>,
    },
    SendMessageSuccess {
        internal_id: String,
        actual_id: String,
    },
    SendMessageFailed {
        internal_id: String,
        error: ServiceError,
    },
    EditMessageTriggered {
        message_id: String,
        content: String,
        prev_content: String,
    },
    EditMessageSuccess {
        message_id: String,
    },
    EditMessageFailed {
        message_id: String,
        prev_content: String,
        error: ServiceError,
    },
    DeleteMessageTriggered {
        message_id: String,
    },
    DeleteMessageSuccess {
        message_id: String,
    },
    DeleteMessageFailed {
        message_id: String,
        error: ServiceError,
    },

    ChatMessageReceived {
        message: ChatMessage,
    },
    ChatMessageEditedReceived {
        message: ChatMessage,
    },
    ChatMessageDeletedReceived {
        message: ChatMessage,
    },
}
