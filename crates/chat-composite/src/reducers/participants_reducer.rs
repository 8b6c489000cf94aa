use crate::actions::{Action, ParticipantsAction, RepositoryAction};
use crate::state::ParticipantsState;

/// Reduce participants, typing indicators and read receipts
pub fn reduce_participants(mut state: ParticipantsState, action: &Action) -> ParticipantsState {
    match action {
        Action::Participants(ParticipantsAction::ParticipantsAdded { participants }) => {
            for participant in participants {
                state
                    .participants
                    .insert(participant.identifier.clone(), participant.clone());
            }
        }
        Action::Participants(ParticipantsAction::ParticipantsRemoved { participants }) => {
            for participant in participants {
                state.participants.remove(&participant.identifier);
                state.typing.remove(&participant.identifier);
                state.read_receipts.remove(&participant.identifier);
            }
        }
        Action::Participants(ParticipantsAction::TypingIndicatorReceived { event }) => {
            state
                .typing
                .insert(event.identifier.clone(), event.timestamp);
        }
        Action::Participants(ParticipantsAction::ReadReceiptReceived { event }) => {
            let latest = state
                .read_receipts
                .entry(event.identifier.clone())
                .or_insert(event.timestamp);
            if *latest < event.timestamp {
                *latest = event.timestamp;
            }
        }
        Action::Participants(ParticipantsAction::ClearIdleTypingParticipants { now }) => {
            let timeout = state.typing_indicator_timeout;
            state.typing.retain(|_, typed_at| *now - *typed_at < timeout);
        }
        // a message ends the sender's typing
        Action::Repository(RepositoryAction::ChatMessageReceived { message }) => {
            if let Some(sender_id) = &message.sender_id {
                state.typing.remove(sender_id);
            }
        }
        _ => {}
    }
    state
}
