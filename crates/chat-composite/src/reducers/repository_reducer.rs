use crate::actions::{Action, ParticipantsAction, RepositoryAction};
use crate::domain_models::{ChatMessage, MessageSendStatus};
use crate::state::RepositoryState;

/// Reduce the message repository
pub fn reduce_repository(mut state: RepositoryState, action: &Action) -> RepositoryState {
    match action {
        Action::Repository(action) => reduce_repository_action(state, action),
        Action::Participants(ParticipantsAction::ReadReceiptReceived { event }) => {
            for message in state.messages.iter_mut() {
                if message.send_status == Some(MessageSendStatus::Sent)
                    && message.created_on <= event.timestamp
                {
                    message.send_status = Some(MessageSendStatus::Seen);
                }
            }
            state
        }
        _ => state,
    }
}

fn reduce_repository_action(mut state: RepositoryState, action: &RepositoryAction) -> RepositoryState {
    match action {
        RepositoryAction::FetchInitialMessagesTriggered => {
            state.is_fetching_initial = true;
        }
        RepositoryAction::FetchInitialMessagesSuccess { messages } => {
            state.is_fetching_initial = false;
            state.has_fetched_all = messages.is_empty();
            for message in messages {
                merge_received(&mut state, message.clone());
            }
        }
        RepositoryAction::FetchInitialMessagesFailed { .. } => {
            state.is_fetching_initial = false;
        }
        RepositoryAction::FetchPreviousMessagesTriggered => {
            state.is_fetching_previous = true;
        }
        RepositoryAction::FetchPreviousMessagesSuccess { messages } => {
            state.is_fetching_previous = false;
            if messages.is_empty() {
                state.has_fetched_all = true;
            }
            for message in messages {
                merge_received(&mut state, message.clone());
            }
        }
        RepositoryAction::FetchPreviousMessagesFailed { .. } => {
            state.is_fetching_previous = false;
        }

        RepositoryAction::SendMessageTriggered {
            internal_id,
            content,
            timestamp,
        } => {
            state.upsert(ChatMessage::outgoing(
                internal_id.clone(),
                content.clone(),
                *timestamp,
            ));
        }
        RepositoryAction::SendMessageSuccess {
            internal_id,
            actual_id,
        } => {
            // the service may have echoed the message before answering
            let echoed = state.message(actual_id).cloned();
            state.remove(actual_id);
            if let Some(message) = state.message_mut(internal_id) {
                message.id = actual_id.clone();
                message.send_status = Some(MessageSendStatus::Sent);
                if let Some(echoed) = echoed {
                    message.sender_id = echoed.sender_id;
                    message.sender_display_name = echoed.sender_display_name;
                }
            }
        }
        RepositoryAction::SendMessageFailed { internal_id, .. } => {
            if let Some(message) = state.message_mut(internal_id) {
                message.send_status = Some(MessageSendStatus::Failed);
            }
        }

        RepositoryAction::EditMessageTriggered {
            message_id,
            content,
            ..
        } => {
            if let Some(message) = state.message_mut(message_id) {
                message.content = content.clone();
            }
        }
        RepositoryAction::EditMessageFailed {
            message_id,
            prev_content,
            ..
        } => {
            if let Some(message) = state.message_mut(message_id) {
                message.content = prev_content.clone();
            }
        }
        RepositoryAction::DeleteMessageSuccess { message_id } => {
            state.remove(message_id);
        }

        RepositoryAction::ChatMessageReceived { message } => {
            merge_received(&mut state, message.clone());
        }
        RepositoryAction::ChatMessageEditedReceived { message } => {
            if let Some(existing) = state.message_mut(&message.id) {
                existing.content = message.content.clone();
                existing.edited_on = message.edited_on;
            }
        }
        RepositoryAction::ChatMessageDeletedReceived { message } => {
            state.remove(&message.id);
        }

        RepositoryAction::EditMessageSuccess { .. }
        | RepositoryAction::DeleteMessageTriggered { .. }
        | RepositoryAction::DeleteMessageFailed { .. } => {}
    }
    state
}

/// Replace by id, keeping the send status of messages sent from here
fn merge_received(state: &mut RepositoryState, message: ChatMessage) {
    match state.message_mut(&message.id) {
        Some(existing) => {
            let send_status = existing.send_status;
            *existing = message;
            existing.send_status = send_status;
        }
        None => state.upsert(message),
    }
}
