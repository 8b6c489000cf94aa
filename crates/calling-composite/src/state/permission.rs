use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AppPermissionStatus {
    #[default]
    Unknown,
    NotAsked,
    Requesting,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionState {
    pub audio_permission: AppPermissionStatus,
    pub camera_permission: AppPermissionStatus,
}
