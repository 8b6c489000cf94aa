//! Application State Module
//!
//! One module per independently reducible substate, aggregated in [`AppState`].

mod app;
mod audio_session;
mod button_view_data;
mod calling;
mod error;
mod lifecycle;
mod local_user;
mod navigation;
mod permission;
mod remote_participants;

pub use app::AppState;
pub use audio_session::{AudioSessionState, AudioSessionStatus};
pub use button_view_data::{
    ButtonScreen, ButtonViewDataState, ControlButton, DefaultButtonState,
};
pub use calling::{CallingState, CallingStatus};
pub use error::{ErrorCategory, ErrorState};
pub use lifecycle::{AppStatus, LifecycleState};
pub use local_user::{
    AudioDeviceSelectionStatus, AudioOperationalStatus, AudioState, CameraDeviceSelectionStatus,
    CameraOperationalStatus, CameraState, CameraTransmissionStatus, LocalUserState,
};
pub use navigation::{NavigationState, NavigationStatus};
pub use permission::{AppPermissionStatus, PermissionState};
pub use remote_participants::RemoteParticipantsState;
