use crate::actions::{Action, ChatAction};
use crate::state::ChatState;

/// Reduce thread-level state
///
/// The topic read while connecting marks the chat as initialized.
pub fn reduce_chat(state: ChatState, action: &Action) -> ChatState {
    let Action::Chat(action) = action else {
        return state;
    };

    match action {
        ChatAction::InitializeChatTriggered => ChatState {
            is_initializing: true,
            ..state
        },
        ChatAction::InitializeChatFailed { .. } => ChatState {
            is_initializing: false,
            ..state
        },
        ChatAction::TopicRetrieved { topic } => ChatState {
            topic: Some(topic.clone()),
            is_initializing: false,
            is_initialized: true,
            ..state
        },
        ChatAction::TopicUpdateReceived { topic } => ChatState {
            topic: Some(topic.clone()),
            ..state
        },
        ChatAction::SendReadReceiptSuccess { message_id } => ChatState {
            last_read_receipt_sent: Some(message_id.clone()),
            ..state
        },
        ChatAction::ChatThreadDeleted => ChatState {
            is_thread_deleted: true,
            ..state
        },
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[test]
    fn test_initialization() {
        let state = reduce_chat(
            ChatState::default(),
            &ChatAction::InitializeChatTriggered.into(),
        );
        assert!(state.is_initializing);

        let state = reduce_chat(
            state,
            &ChatAction::TopicRetrieved {
                topic: "Standup".into(),
            }
            .into(),
        );
        assert!(state.is_initialized);
        assert!(!state.is_initializing);
        assert_eq!(state.topic.as_deref(), Some("Standup"));
    }

    #[test]
    fn test_initialize_failed() {
        let triggered = ChatState {
            is_initializing: true,
            ..ChatState::default()
        };
        let state = reduce_chat(
            triggered,
            &ChatAction::InitializeChatFailed {
                error: ServiceError::sdk(401, "unauthorized"),
            }
            .into(),
        );
        assert!(!state.is_initializing);
        assert!(!state.is_initialized);
    }

    #[test]
    fn test_read_receipt_success() {
        let state = reduce_chat(
            ChatState::default(),
            &ChatAction::SendReadReceiptSuccess {
                message_id: "m3".into(),
            }
            .into(),
        );
        assert_eq!(state.last_read_receipt_sent.as_deref(), Some("m3"));
    }

    #[test]
    fn test_typing_actions_are_identity() {
        let state = ChatState {
            topic: Some("Standup".into()),
            ..ChatState::default()
        };
        assert_eq!(
            reduce_chat(state.clone(), &ChatAction::SendTypingIndicatorSuccess.into()),
            state
        );
        assert_eq!(reduce_chat(state.clone(), &Action::CompositeExit), state);
    }
}
