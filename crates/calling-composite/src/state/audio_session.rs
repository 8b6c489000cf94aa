/// Whether the OS audio session is available to the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioSessionStatus {
    #[default]
    Active,
    Interrupted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioSessionState {
    pub status: AudioSessionStatus,
}
