//! Error types of the calling composite

use thiserror::Error;

/// Error codes reported to the host application
pub mod error_code {
    pub const CALL_JOIN: &str = "callJoin";
    pub const CALL_END: &str = "callEnd";
    pub const TOKEN_EXPIRED: &str = "tokenExpired";
    pub const CAMERA_FAILURE: &str = "cameraFailure";
    pub const MICROPHONE_PERMISSION_NOT_GRANTED: &str = "microphonePermissionNotGranted";
    pub const NETWORK_CONNECTION_NOT_AVAILABLE: &str = "networkConnectionNotAvailable";
}

/// Failures the composite knows how to present
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallCompositeInternalError {
    #[error("device manager failed")]
    DeviceManagerFailed,
    #[error("connection failed while joining the call")]
    CallJoinConnectionFailed,
    #[error("access token expired")]
    CallTokenFailed,
    #[error("failed to join the call")]
    CallJoinFailed,
    #[error("failed to end the call")]
    CallEndFailed,
    #[error("failed to hold the call")]
    CallHoldFailed,
    #[error("failed to resume the call")]
    CallResumeFailed,
    #[error("removed from the call")]
    CallEvicted,
    #[error("denied entry to the call")]
    CallDenied,
    #[error("microphone permission not granted")]
    CallJoinFailedByMicPermission,
    #[error("failed to switch camera")]
    CameraSwitchFailed,
    #[error("failed to turn camera on")]
    CameraOnFailed,
    #[error("network connection not available")]
    NetworkConnectionNotAvailable,
}

impl CallCompositeInternalError {
    /// Error code surfaced to the host, `None` for errors handled in-composite
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::DeviceManagerFailed | Self::CameraOnFailed => Some(error_code::CAMERA_FAILURE),
            Self::CallTokenFailed => Some(error_code::TOKEN_EXPIRED),
            Self::CallJoinFailed | Self::CallJoinConnectionFailed => Some(error_code::CALL_JOIN),
            Self::CallEndFailed => Some(error_code::CALL_END),
            Self::CallJoinFailedByMicPermission => {
                Some(error_code::MICROPHONE_PERMISSION_NOT_GRANTED)
            }
            Self::NetworkConnectionNotAvailable => {
                Some(error_code::NETWORK_CONNECTION_NOT_AVAILABLE)
            }
            Self::CallHoldFailed
            | Self::CallResumeFailed
            | Self::CallEvicted
            | Self::CallDenied
            | Self::CameraSwitchFailed => None,
        }
    }

    /// Fatal errors end the session, the others are shown and can be dismissed
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DeviceManagerFailed
            | Self::CallTokenFailed
            | Self::CallJoinFailed
            | Self::CallJoinFailedByMicPermission
            | Self::NetworkConnectionNotAvailable
            | Self::CallEndFailed => true,
            Self::CallHoldFailed
            | Self::CallResumeFailed
            | Self::CallEvicted
            | Self::CallDenied
            | Self::CameraSwitchFailed
            | Self::CameraOnFailed
            | Self::CallJoinConnectionFailed => false,
        }
    }
}

/// Failure reported by a calling service collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service already classified the failure
    #[error(transparent)]
    Internal(#[from] CallCompositeInternalError),
    /// Unclassified failure from the underlying SDK
    #[error("calling SDK error {code}: {message}")]
    Sdk { code: i32, message: String },
}

impl ServiceError {
    pub fn sdk(code: i32, message: impl Into<String>) -> Self {
        Self::Sdk {
            code,
            message: message.into(),
        }
    }

    /// Classification to use, falling back when the SDK gave none
    pub fn internal_or(&self, fallback: CallCompositeInternalError) -> CallCompositeInternalError {
        match self {
            Self::Internal(internal) => *internal,
            Self::Sdk { .. } => fallback,
        }
    }
}
