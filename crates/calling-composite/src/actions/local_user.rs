//! Camera, microphone and audio route of the local user

use crate::domain_models::{AudioDeviceType, CameraDevice};
use crate::error::ServiceError;
use crate::state::CameraDeviceSelectionStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum LocalUserAction {
    /// Start the camera for the preview on the setup screen
    CameraPreviewOnTriggered,
    /// Start the camera and send video into the call
    CameraOnTriggered,
    CameraOnSucceeded {
        video_stream_identifier: String,
    },
    CameraOnFailed {
        error: ServiceError,
    },
    CameraOffTriggered,
    CameraOffSucceeded,
    CameraOffFailed {
        error: ServiceError,
    },
    CameraPausedSucceeded,
    CameraPausedFailed {
        error: ServiceError,
    },
    CameraSwitchTriggered,
    CameraSwitchSucceeded {
        camera_device: CameraDevice,
    },
    CameraSwitchFailed {
        previous_camera: CameraDeviceSelectionStatus,
        error: ServiceError,
    },

    MicrophoneOnTriggered,
    MicrophoneOnFailed {
        error: ServiceError,
    },
    MicrophoneOffTriggered,
    MicrophoneOffFailed {
        error: ServiceError,
    },
    /// Mute state as confirmed by the calling service
    MicrophoneMuteStateUpdated {
        is_muted: bool,
    },
    /// Toggle the microphone on the setup screen, before a call exists
    MicrophonePreviewOn,
    MicrophonePreviewOff,

    AudioDeviceChangeRequested {
        device: AudioDeviceType,
    },
    AudioDeviceChangeSucceeded {
        device: AudioDeviceType,
    },
    AudioDeviceChangeFailed {
        error: ServiceError,
    },
}
