use strum::Display;

/// Connection status of a remote participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ParticipantStatus {
    Idle,
    Connecting,
    #[default]
    Connected,
    Hold,
    InLobby,
    EarlyMedia,
    Ringing,
    Disconnected,
}

/// Snapshot of a remote participant as reported by the calling service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantInfo {
    pub user_identifier: String,
    pub display_name: String,
    pub is_muted: bool,
    pub is_speaking: bool,
    pub status: ParticipantStatus,
    pub video_stream_id: Option<String>,
    pub screen_share_stream_id: Option<String>,
}

impl ParticipantInfo {
    /// Connected, muted participant without video
    pub fn new(user_identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_identifier: user_identifier.into(),
            display_name: display_name.into(),
            is_muted: true,
            is_speaking: false,
            status: ParticipantStatus::Connected,
            video_stream_id: None,
            screen_share_stream_id: None,
        }
    }

    /// Participants waiting in the lobby are not shown in the grid
    pub fn is_in_call(&self) -> bool {
        !matches!(
            self.status,
            ParticipantStatus::InLobby | ParticipantStatus::Disconnected
        )
    }
}
