use crate::actions::{Action, AudioSessionAction};
use crate::state::{AudioSessionState, AudioSessionStatus};

pub fn reduce_audio_session(mut state: AudioSessionState, action: &Action) -> AudioSessionState {
    let Action::AudioSession(action) = action else {
        return state;
    };

    state.status = match action {
        AudioSessionAction::AudioInterrupted => AudioSessionStatus::Interrupted,
        AudioSessionAction::AudioInterruptEnded | AudioSessionAction::AudioEngaged => {
            AudioSessionStatus::Active
        }
    };
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CallingAction;

    #[test]
    fn test_interrupt_and_end() {
        let state = reduce_audio_session(
            AudioSessionState::default(),
            &Action::AudioSession(AudioSessionAction::AudioInterrupted),
        );
        assert_eq!(state.status, AudioSessionStatus::Interrupted);

        let state = reduce_audio_session(
            state,
            &Action::AudioSession(AudioSessionAction::AudioInterruptEnded),
        );
        assert_eq!(state.status, AudioSessionStatus::Active);
    }

    #[test]
    fn test_unrelated_action_is_identity() {
        let interrupted = AudioSessionState {
            status: AudioSessionStatus::Interrupted,
        };
        let state = reduce_audio_session(
            interrupted.clone(),
            &Action::Calling(CallingAction::CallEnded),
        );
        assert_eq!(state, interrupted);
    }
}
