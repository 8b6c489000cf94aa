use chrono::Duration;

use super::{
    ChatState, ErrorState, LifecycleState, LocalUserInfo, ParticipantsState, RepositoryState,
};

/// Application state - root of all chat state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub chat: ChatState,
    pub repository: RepositoryState,
    pub participants: ParticipantsState,
    pub lifecycle: LifecycleState,
    pub error: ErrorState,
}

impl AppState {
    pub fn new(local_user: LocalUserInfo, typing_indicator_timeout: Duration) -> Self {
        Self {
            chat: ChatState {
                local_user,
                ..ChatState::default()
            },
            participants: ParticipantsState::new(typing_indicator_timeout),
            ..Self::default()
        }
    }
}
