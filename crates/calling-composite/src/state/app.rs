use super::{
    AudioSessionState, ButtonViewDataState, CallingState, ErrorState, LifecycleState, LocalUserState, NavigationState,
    PermissionState, RemoteParticipantsState,
};

/// Application state - root of all calling state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub calling: CallingState,
    pub permission: PermissionState,
    pub local_user: LocalUserState,
    pub lifecycle: LifecycleState,
    pub audio_session: AudioSessionState,
    pub navigation: NavigationState,
    pub remote_participants: RemoteParticipantsState,
    pub error: ErrorState,
    pub button_view_data: ButtonViewDataState,
}

impl AppState {
    /// Initial state for a local participant with the given display name
    pub fn new(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            local_user: LocalUserState {
                display_name: (!display_name.is_empty()).then_some(display_name),
                ..LocalUserState::default()
            },
            ..Self::default()
        }
    }
}
