//! Error banner
//!
//! The banner reappears only for an error different from the last one shown.
//! Clearing the error hides it without forgetting that last error.

use composite_redux::ViewModel;

use crate::error::CallCompositeInternalError;
use crate::state::AppState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorInfoViewModel {
    pub is_displayed: bool,
    pub title: String,
    previous_error: Option<CallCompositeInternalError>,
}

impl ErrorInfoViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismiss(&mut self) {
        self.is_displayed = false;
    }

    pub fn show(&mut self) {
        self.is_displayed = true;
    }

    /// Error codes reported to the host, when the shown error has one
    pub fn error_code(&self) -> Option<&'static str> {
        self.previous_error
            .as_ref()
            .and_then(CallCompositeInternalError::error_code)
    }
}

impl ViewModel<AppState> for ErrorInfoViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let Some(internal_error) = state.error.internal_error else {
            return super::set(&mut self.is_displayed, false);
        };

        if self.previous_error == Some(internal_error) {
            return false;
        }

        self.previous_error = Some(internal_error);
        self.is_displayed = true;
        self.title = banner_title(internal_error).to_string();
        true
    }
}

fn banner_title(error: CallCompositeInternalError) -> &'static str {
    match error {
        CallCompositeInternalError::CallJoinFailed => "Unable to join the call",
        CallCompositeInternalError::CallEndFailed => "Unable to leave the call",
        CallCompositeInternalError::CallEvicted => "You were removed from the call",
        CallCompositeInternalError::CallDenied => "You were not admitted to the call",
        CallCompositeInternalError::CameraOnFailed => "Unable to turn on your camera",
        CallCompositeInternalError::CallJoinConnectionFailed
        | CallCompositeInternalError::NetworkConnectionNotAvailable => "Connection error",
        _ => "Something went wrong",
    }
}
