use crate::actions::{Action, CallingAction, ErrorAction};
use crate::state::{CallingState, CallingStatus};

/// Reduce call state
pub fn reduce_calling(mut state: CallingState, action: &Action) -> CallingState {
    match action {
        Action::Calling(CallingAction::StateUpdated { status }) => {
            state.status = *status;
        }
        Action::Calling(CallingAction::RecordingStateUpdated {
            is_recording_active,
        }) => {
            state.is_recording_active = *is_recording_active;
        }
        Action::Calling(CallingAction::TranscriptionStateUpdated {
            is_transcription_active,
        }) => {
            state.is_transcription_active = *is_transcription_active;
        }
        Action::Calling(CallingAction::CallEnded) => {
            state.status = CallingStatus::Disconnected;
        }
        Action::Error(ErrorAction::StatusErrorAndCallReset { .. }) => {
            state = CallingState::default();
        }
        _ => {}
    }
    state
}
