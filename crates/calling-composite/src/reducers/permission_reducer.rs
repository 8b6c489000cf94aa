use crate::actions::{Action, PermissionAction};
use crate::state::{AppPermissionStatus, PermissionState};

/// Reduce permission state
pub fn reduce_permission(mut state: PermissionState, action: &Action) -> PermissionState {
    let Action::Permission(action) = action else {
        return state;
    };

    match action {
        PermissionAction::AudioPermissionRequested => {
            state.audio_permission = AppPermissionStatus::Requesting
        }
        PermissionAction::AudioPermissionGranted => {
            state.audio_permission = AppPermissionStatus::Granted
        }
        PermissionAction::AudioPermissionDenied => {
            state.audio_permission = AppPermissionStatus::Denied
        }
        PermissionAction::AudioPermissionNotAsked => {
            state.audio_permission = AppPermissionStatus::NotAsked
        }
        PermissionAction::CameraPermissionRequested => {
            state.camera_permission = AppPermissionStatus::Requesting
        }
        PermissionAction::CameraPermissionGranted => {
            state.camera_permission = AppPermissionStatus::Granted
        }
        PermissionAction::CameraPermissionDenied => {
            state.camera_permission = AppPermissionStatus::Denied
        }
        PermissionAction::CameraPermissionNotAsked => {
            state.camera_permission = AppPermissionStatus::NotAsked
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::LifecycleAction;

    #[test]
    fn test_audio_permission_transitions() {
        let state = reduce_permission(
            PermissionState::default(),
            &Action::Permission(PermissionAction::AudioPermissionRequested),
        );
        assert_eq!(state.audio_permission, AppPermissionStatus::Requesting);

        let state = reduce_permission(
            state,
            &Action::Permission(PermissionAction::AudioPermissionGranted),
        );
        assert_eq!(state.audio_permission, AppPermissionStatus::Granted);
        assert_eq!(state.camera_permission, AppPermissionStatus::Unknown);
    }

    #[test]
    fn test_camera_permission_denied() {
        let state = reduce_permission(
            PermissionState::default(),
            &Action::Permission(PermissionAction::CameraPermissionDenied),
        );
        assert_eq!(state.camera_permission, AppPermissionStatus::Denied);
    }

    #[test]
    fn test_unrelated_action_is_identity() {
        let state = reduce_permission(
            PermissionState::default(),
            &Action::Lifecycle(LifecycleAction::BackgroundEntered),
        );
        assert_eq!(state, PermissionState::default());
    }
}
