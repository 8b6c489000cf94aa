use strum::Display;

/// Call status as reported by the calling service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CallingStatus {
    #[default]
    None,
    EarlyMedia,
    Connecting,
    Ringing,
    Connected,
    LocalHold,
    Disconnecting,
    Disconnected,
    InLobby,
    RemoteHold,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingState {
    pub status: CallingStatus,
    pub is_recording_active: bool,
    pub is_transcription_active: bool,
}
