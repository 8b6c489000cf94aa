//! Local User Reducer
//!
//! Camera and microphone go through a `Pending` state while the calling service
//! works on a request. Failures restore the state the device is known to be in
//! and keep the error next to it. A later success on the same device clears it.

use crate::actions::{Action, LocalUserAction};
use crate::state::{
    AudioDeviceSelectionStatus, AudioOperationalStatus, CameraDeviceSelectionStatus,
    CameraOperationalStatus, CameraTransmissionStatus, LocalUserState,
};

/// Reduce local user state
pub fn reduce_local_user(mut state: LocalUserState, action: &Action) -> LocalUserState {
    let Action::LocalUser(action) = action else {
        return state;
    };

    match action {
        LocalUserAction::CameraPreviewOnTriggered => {
            state.camera.transmission = CameraTransmissionStatus::Local;
            state.camera.operation = CameraOperationalStatus::Pending;
        }
        LocalUserAction::CameraOnTriggered => {
            state.camera.transmission = CameraTransmissionStatus::Remote;
            state.camera.operation = CameraOperationalStatus::Pending;
        }
        LocalUserAction::CameraOnSucceeded {
            video_stream_identifier,
        } => {
            state.local_video_stream_identifier = Some(video_stream_identifier.clone());
            state.camera.operation = CameraOperationalStatus::On;
            state.camera.error = None;
        }
        LocalUserAction::CameraOnFailed { error } => {
            state.camera.operation = CameraOperationalStatus::Off;
            state.camera.error = Some(error.clone());
        }
        LocalUserAction::CameraOffTriggered => {
            state.camera.operation = CameraOperationalStatus::Pending;
        }
        LocalUserAction::CameraOffSucceeded => {
            state.local_video_stream_identifier = None;
            state.camera.operation = CameraOperationalStatus::Off;
            state.camera.error = None;
        }
        LocalUserAction::CameraOffFailed { error } => {
            state.camera.operation = CameraOperationalStatus::On;
            state.camera.error = Some(error.clone());
        }
        LocalUserAction::CameraPausedSucceeded => {
            state.camera.operation = CameraOperationalStatus::Paused;
        }
        LocalUserAction::CameraPausedFailed { error } => {
            state.camera.error = Some(error.clone());
        }
        LocalUserAction::CameraSwitchTriggered => {
            state.camera.device = CameraDeviceSelectionStatus::Switching;
        }
        LocalUserAction::CameraSwitchSucceeded { camera_device } => {
            state.camera.device = (*camera_device).into();
            state.camera.error = None;
        }
        LocalUserAction::CameraSwitchFailed {
            previous_camera,
            error,
        } => {
            state.camera.device = *previous_camera;
            state.camera.error = Some(error.clone());
        }

        LocalUserAction::MicrophoneOnTriggered | LocalUserAction::MicrophoneOffTriggered => {
            state.audio.operation = AudioOperationalStatus::Pending;
        }
        LocalUserAction::MicrophonePreviewOn => {
            state.audio.operation = AudioOperationalStatus::On;
        }
        LocalUserAction::MicrophonePreviewOff => {
            state.audio.operation = AudioOperationalStatus::Off;
        }
        LocalUserAction::MicrophoneOnFailed { error } => {
            state.audio.operation = AudioOperationalStatus::Off;
            state.audio.error = Some(error.clone());
        }
        LocalUserAction::MicrophoneOffFailed { error } => {
            state.audio.operation = AudioOperationalStatus::On;
            state.audio.error = Some(error.clone());
        }
        LocalUserAction::MicrophoneMuteStateUpdated { is_muted } => {
            state.audio.operation = if *is_muted {
                AudioOperationalStatus::Off
            } else {
                AudioOperationalStatus::On
            };
            state.audio.error = None;
        }

        LocalUserAction::AudioDeviceChangeRequested { device } => {
            state.audio.device = AudioDeviceSelectionStatus::requested(*device);
        }
        LocalUserAction::AudioDeviceChangeSucceeded { device } => {
            state.audio.device = AudioDeviceSelectionStatus::selected(*device);
            state.audio.error = None;
        }
        LocalUserAction::AudioDeviceChangeFailed { error } => {
            state.audio.error = Some(error.clone());
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CallingAction;
    use crate::domain_models::{AudioDeviceType, CameraDevice};
    use crate::error::ServiceError;

    fn reduce(state: LocalUserState, action: LocalUserAction) -> LocalUserState {
        reduce_local_user(state, &Action::LocalUser(action))
    }

    fn camera_on() -> LocalUserState {
        reduce(
            LocalUserState::default(),
            LocalUserAction::CameraOnSucceeded {
                video_stream_identifier: "vs1".into(),
            },
        )
    }

    #[test]
    fn test_defaults() {
        let state = LocalUserState::default();
        assert_eq!(state.camera.operation, CameraOperationalStatus::Off);
        assert_eq!(state.camera.device, CameraDeviceSelectionStatus::Front);
        assert_eq!(state.camera.transmission, CameraTransmissionStatus::Local);
        assert_eq!(state.audio.operation, AudioOperationalStatus::Off);
        assert_eq!(
            state.audio.device,
            AudioDeviceSelectionStatus::ReceiverSelected
        );
    }

    #[test]
    fn test_camera_preview_and_on_triggers_set_transmission() {
        let state = reduce(
            LocalUserState::default(),
            LocalUserAction::CameraPreviewOnTriggered,
        );
        assert_eq!(state.camera.operation, CameraOperationalStatus::Pending);
        assert_eq!(state.camera.transmission, CameraTransmissionStatus::Local);

        let state = reduce(state, LocalUserAction::CameraOnTriggered);
        assert_eq!(state.camera.operation, CameraOperationalStatus::Pending);
        assert_eq!(state.camera.transmission, CameraTransmissionStatus::Remote);
    }

    #[test]
    fn test_camera_on_succeeded_stores_stream_identifier() {
        let state = camera_on();
        assert_eq!(state.camera.operation, CameraOperationalStatus::On);
        assert_eq!(state.local_video_stream_identifier.as_deref(), Some("vs1"));
    }

    #[test]
    fn test_camera_on_failed_turns_off_with_error() {
        let error = ServiceError::sdk(3, "camera busy");
        let state = reduce(
            LocalUserState::default(),
            LocalUserAction::CameraOnFailed {
                error: error.clone(),
            },
        );
        assert_eq!(state.camera.operation, CameraOperationalStatus::Off);
        assert_eq!(state.camera.error, Some(error));
    }

    #[test]
    fn test_camera_off_round_trip() {
        let state = reduce(camera_on(), LocalUserAction::CameraOffTriggered);
        assert_eq!(state.camera.operation, CameraOperationalStatus::Pending);

        let state = reduce(state, LocalUserAction::CameraOffSucceeded);
        assert_eq!(state.camera.operation, CameraOperationalStatus::Off);
        assert_eq!(state.local_video_stream_identifier, None);
    }

    #[test]
    fn test_camera_off_failed_stays_on() {
        let state = reduce(
            camera_on(),
            LocalUserAction::CameraOffFailed {
                error: ServiceError::sdk(1, "stuck"),
            },
        );
        assert_eq!(state.camera.operation, CameraOperationalStatus::On);
        assert!(state.camera.error.is_some());
    }

    #[test]
    fn test_camera_success_clears_previous_error() {
        let failed = reduce(
            camera_on(),
            LocalUserAction::CameraOffFailed {
                error: ServiceError::sdk(1, "stuck"),
            },
        );
        let state = reduce(failed.clone(), LocalUserAction::CameraOffSucceeded);
        assert_eq!(state.camera.error, None);

        let state = reduce(
            failed,
            LocalUserAction::CameraSwitchSucceeded {
                camera_device: CameraDevice::Back,
            },
        );
        assert_eq!(state.camera.error, None);

        // pausing is not a user request and leaves the error alone
        let state = reduce(
            reduce(
                LocalUserState::default(),
                LocalUserAction::CameraOnFailed {
                    error: ServiceError::sdk(3, "camera busy"),
                },
            ),
            LocalUserAction::CameraPausedSucceeded,
        );
        assert!(state.camera.error.is_some());
    }

    #[test]
    fn test_camera_paused() {
        let state = reduce(camera_on(), LocalUserAction::CameraPausedSucceeded);
        assert_eq!(state.camera.operation, CameraOperationalStatus::Paused);
    }

    #[test]
    fn test_camera_switch() {
        let state = reduce(camera_on(), LocalUserAction::CameraSwitchTriggered);
        assert_eq!(state.camera.device, CameraDeviceSelectionStatus::Switching);

        let state = reduce(
            state,
            LocalUserAction::CameraSwitchSucceeded {
                camera_device: CameraDevice::Back,
            },
        );
        assert_eq!(state.camera.device, CameraDeviceSelectionStatus::Back);
    }

    #[test]
    fn test_camera_switch_failed_restores_previous_camera() {
        let state = reduce(camera_on(), LocalUserAction::CameraSwitchTriggered);
        let state = reduce(
            state,
            LocalUserAction::CameraSwitchFailed {
                previous_camera: CameraDeviceSelectionStatus::Front,
                error: ServiceError::sdk(9, "no back camera"),
            },
        );
        assert_eq!(state.camera.device, CameraDeviceSelectionStatus::Front);
        assert!(state.camera.error.is_some());
    }

    #[test]
    fn test_microphone_transitions() {
        let state = reduce(
            LocalUserState::default(),
            LocalUserAction::MicrophoneOnTriggered,
        );
        assert_eq!(state.audio.operation, AudioOperationalStatus::Pending);

        let state = reduce(
            state,
            LocalUserAction::MicrophoneMuteStateUpdated { is_muted: false },
        );
        assert_eq!(state.audio.operation, AudioOperationalStatus::On);

        let state = reduce(
            state,
            LocalUserAction::MicrophoneOffFailed {
                error: ServiceError::sdk(2, "denied"),
            },
        );
        assert_eq!(state.audio.operation, AudioOperationalStatus::On);
        assert!(state.audio.error.is_some());

        let state = reduce(
            state,
            LocalUserAction::MicrophoneMuteStateUpdated { is_muted: true },
        );
        assert_eq!(state.audio.operation, AudioOperationalStatus::Off);
        assert_eq!(state.audio.error, None);
    }

    #[test]
    fn test_microphone_preview() {
        let state = reduce(
            LocalUserState::default(),
            LocalUserAction::MicrophonePreviewOn,
        );
        assert_eq!(state.audio.operation, AudioOperationalStatus::On);
        let state = reduce(state, LocalUserAction::MicrophonePreviewOff);
        assert_eq!(state.audio.operation, AudioOperationalStatus::Off);
    }

    #[test]
    fn test_audio_device_change() {
        let state = reduce(
            LocalUserState::default(),
            LocalUserAction::AudioDeviceChangeRequested {
                device: AudioDeviceType::Speaker,
            },
        );
        assert_eq!(
            state.audio.device,
            AudioDeviceSelectionStatus::SpeakerRequested
        );

        let state = reduce(
            state,
            LocalUserAction::AudioDeviceChangeSucceeded {
                device: AudioDeviceType::Speaker,
            },
        );
        assert_eq!(
            state.audio.device,
            AudioDeviceSelectionStatus::SpeakerSelected
        );
        assert_eq!(
            state.audio.device.selected_device(),
            Some(AudioDeviceType::Speaker)
        );
    }

    #[test]
    fn test_unrelated_action_is_identity() {
        let state = reduce_local_user(camera_on(), &Action::Calling(CallingAction::CallEnded));
        assert_eq!(state, camera_on());
    }
}
