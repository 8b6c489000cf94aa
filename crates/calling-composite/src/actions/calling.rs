//! Call control actions

use crate::state::CallingStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallingAction {
    /// Prepare the call (device manager, preview) on the setup screen
    SetupCall,
    /// Join the call
    CallStartRequested,
    CallEndRequested,
    CallEnded,
    /// A call request failed without changing the call status
    RequestFailed,
    HoldRequested,
    ResumeRequested,
    StateUpdated {
        status: CallingStatus,
    },
    RecordingStateUpdated {
        is_recording_active: bool,
    },
    TranscriptionStateUpdated {
        is_transcription_active: bool,
    },
    /// Leave the setup screen without joining
    DismissSetup,
}
