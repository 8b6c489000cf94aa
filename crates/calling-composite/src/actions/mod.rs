//! Actions module
//!
//! Actions are tagged by the part of the composite they concern. Every substate
//! reducer receives the full [`Action`] and picks out what it cares about, so a
//! single action (an error, the composite exit) can update several substates.

pub mod audio_session;
pub mod button_view_data;
pub mod calling;
pub mod error;
pub mod lifecycle;
pub mod local_user;
pub mod navigation;
pub mod permission;
pub mod remote_participants;

pub use audio_session::AudioSessionAction;
pub use button_view_data::ButtonViewDataAction;
pub use calling::CallingAction;
pub use error::ErrorAction;
pub use lifecycle::LifecycleAction;
pub use local_user::LocalUserAction;
pub use navigation::NavigationAction;
pub use permission::PermissionAction;
pub use remote_participants::RemoteParticipantsAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Calling(CallingAction),
    LocalUser(LocalUserAction),
    RemoteParticipants(RemoteParticipantsAction),
    Permission(PermissionAction),
    Lifecycle(LifecycleAction),
    AudioSession(AudioSessionAction),
    Error(ErrorAction),
    Navigation(NavigationAction),
    ButtonViewData(ButtonViewDataAction),
    /// Leave the composite; the store stops after reducing it
    CompositeExit,
}

impl composite_redux::Action for Action {
    fn is_terminal(&self) -> bool {
        matches!(self, Action::CompositeExit)
    }
}

impl From<CallingAction> for Action {
    fn from(action: CallingAction) -> Self {
        Action::Calling(action)
    }
}

impl From<LocalUserAction> for Action {
    fn from(action: LocalUserAction) -> Self {
        Action::LocalUser(action)
    }
}

impl From<RemoteParticipantsAction> for Action {
    fn from(action: RemoteParticipantsAction) -> Self {
        Action::RemoteParticipants(action)
    }
}

impl From<PermissionAction> for Action {
    fn from(action: PermissionAction) -> Self {
        Action::Permission(action)
    }
}

impl From<LifecycleAction> for Action {
    fn from(action: LifecycleAction) -> Self {
        Action::Lifecycle(action)
    }
}

impl From<AudioSessionAction> for Action {
    fn from(action: AudioSessionAction) -> Self {
        Action::AudioSession(action)
    }
}

impl From<ErrorAction> for Action {
    fn from(action: ErrorAction) -> Self {
        Action::Error(action)
    }
}

impl From<NavigationAction> for Action {
    fn from(action: NavigationAction) -> Self {
        Action::Navigation(action)
    }
}

impl From<ButtonViewDataAction> for Action {
    fn from(action: ButtonViewDataAction) -> Self {
        Action::ButtonViewData(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composite_redux::Action as _;

    #[test]
    fn test_only_composite_exit_is_terminal() {
        assert!(Action::CompositeExit.is_terminal());
        assert!(!Action::from(CallingAction::CallEnded).is_terminal());
        assert!(!Action::from(NavigationAction::CallingViewLaunched).is_terminal());
    }
}
