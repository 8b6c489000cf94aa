use crate::actions::Action;
use crate::reducers::{
    audio_session_reducer, button_view_data_reducer, calling_reducer, error_reducer,
    lifecycle_reducer, local_user_reducer, navigation_reducer, permission_reducer,
    remote_participants_reducer,
};
use crate::state::AppState;

/// Root reducer - hands every substate and the full action to its reducer
pub fn reduce(state: AppState, action: &Action) -> AppState {
    let AppState {
        calling,
        permission,
        local_user,
        lifecycle,
        audio_session,
        navigation,
        remote_participants,
        error,
        button_view_data,
    } = state;

    AppState {
        calling: calling_reducer::reduce_calling(calling, action),
        permission: permission_reducer::reduce_permission(permission, action),
        local_user: local_user_reducer::reduce_local_user(local_user, action),
        lifecycle: lifecycle_reducer::reduce_lifecycle(lifecycle, action),
        audio_session: audio_session_reducer::reduce_audio_session(audio_session, action),
        navigation: navigation_reducer::reduce_navigation(navigation, action),
        remote_participants: remote_participants_reducer::reduce_remote_participants(
            remote_participants,
            action,
        ),
        error: error_reducer::reduce_error(error, action),
        button_view_data: button_view_data_reducer::reduce_button_view_data(
            button_view_data,
            action,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        CallingAction, ErrorAction, LocalUserAction, NavigationAction, PermissionAction,
        RemoteParticipantsAction,
    };
    use crate::domain_models::ParticipantInfo;
    use crate::error::CallCompositeInternalError;
    use crate::state::{
        AppPermissionStatus, CallingStatus, CameraOperationalStatus, ErrorCategory,
        NavigationStatus,
    };
    use chrono::{TimeZone, Utc};

    fn sample_actions() -> Vec<Action> {
        vec![
            CallingAction::StateUpdated {
                status: CallingStatus::Connected,
            }
            .into(),
            LocalUserAction::CameraOnTriggered.into(),
            PermissionAction::CameraPermissionGranted.into(),
            RemoteParticipantsAction::ParticipantListUpdated {
                participants: vec![ParticipantInfo::new("p1", "Ada")],
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            }
            .into(),
            ErrorAction::FatalErrorUpdated {
                internal_error: CallCompositeInternalError::CallTokenFailed,
                error: None,
            }
            .into(),
            NavigationAction::AudioSelectionShown.into(),
            Action::CompositeExit,
        ]
    }

    #[test]
    fn test_reduce_is_deterministic() {
        for action in sample_actions() {
            let first = reduce(AppState::new("Me"), &action);
            let second = reduce(AppState::new("Me"), &action);
            assert_eq!(first, second, "{action:?}");
        }
    }

    #[test]
    fn test_reduce_updates_every_concerned_substate() {
        let state = reduce(
            AppState::new("Me"),
            &Action::from(ErrorAction::FatalErrorUpdated {
                internal_error: CallCompositeInternalError::CallJoinFailed,
                error: None,
            }),
        );

        assert_eq!(state.error.category, ErrorCategory::Fatal);
        assert_eq!(state.navigation.status, NavigationStatus::Exit);
        assert_eq!(state.calling.status, CallingStatus::None);
    }

    #[test]
    fn test_reduce_leaves_unrelated_substates_alone() {
        let initial = AppState::new("Me");
        let state = reduce(
            initial.clone(),
            &Action::from(PermissionAction::CameraPermissionDenied),
        );

        assert_eq!(
            state.permission.camera_permission,
            AppPermissionStatus::Denied
        );
        assert_eq!(state.local_user, initial.local_user);
        assert_eq!(state.calling, initial.calling);
        assert_eq!(state.navigation, initial.navigation);
    }

    #[test]
    fn test_camera_on_triggered_marks_camera_pending() {
        let state = reduce(
            AppState::new("Me"),
            &Action::from(LocalUserAction::CameraOnTriggered),
        );
        assert_eq!(
            state.local_user.camera.operation,
            CameraOperationalStatus::Pending
        );
    }

    #[test]
    fn test_new_keeps_display_name() {
        assert_eq!(
            AppState::new("Me").local_user.display_name.as_deref(),
            Some("Me")
        );
        assert_eq!(AppState::new("").local_user.display_name, None);
    }
}
