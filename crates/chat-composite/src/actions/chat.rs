//! Thread-level chat actions

use crate::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// The chat view was presented
    ChatStartRequested,
    InitializeChatTriggered,
    InitializeChatFailed {
        error: ServiceError,
    },
    /// Topic as read while connecting
    TopicRetrieved {
        topic: String,
    },
    TopicUpdateReceived {
        topic: String,
    },
    SendTypingIndicatorTriggered,
    SendTypingIndicatorSuccess,
    SendTypingIndicatorFailed {
        error: ServiceError,
    },
    SendReadReceiptTriggered {
        message_id: String,
    },
    SendReadReceiptSuccess {
        message_id: String,
    },
    SendReadReceiptFailed {
        error: ServiceError,
    },
    ChatThreadDeleted,
}
