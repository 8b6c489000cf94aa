use crate::actions::{Action, ErrorAction, RemoteParticipantsAction};
use crate::state::RemoteParticipantsState;

pub fn reduce_remote_participants(
    mut state: RemoteParticipantsState,
    action: &Action,
) -> RemoteParticipantsState {
    match action {
        Action::RemoteParticipants(RemoteParticipantsAction::ParticipantListUpdated {
            participants,
            timestamp,
        }) => {
            state.participants = participants.clone();
            state.last_update_timestamp = Some(*timestamp);
        }
        Action::RemoteParticipants(RemoteParticipantsAction::DominantSpeakersUpdated {
            speakers,
            timestamp,
        }) => {
            state.dominant_speakers = speakers.clone();
            state.dominant_speakers_modified_timestamp = Some(*timestamp);
        }
        Action::Error(ErrorAction::StatusErrorAndCallReset { .. }) => {
            state = RemoteParticipantsState::default();
        }
        _ => {}
    }
    state
}
