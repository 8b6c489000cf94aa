//! Calling middleware
//!
//! - [`CallingMiddleware`] routes actions to the [`CallingMiddlewareHandler`]
//! - the handler spawns one effect task per request against the
//!   [`CallingService`](crate::service::CallingService)
//! - [`CallingServiceListener`] turns service events into actions
//! - [`throttle_key`] groups repeated user intents for the throttle middleware

mod calling_handler;
mod calling_middleware;
mod service_listener;

pub use calling_handler::CallingMiddlewareHandler;
pub use calling_middleware::CallingMiddleware;
pub use service_listener::CallingServiceListener;

use crate::actions::{Action, CallingAction, LocalUserAction};

/// Throttle key of user intents that are commonly repeated by accident
pub fn throttle_key(action: &Action) -> Option<String> {
    let key = match action {
        Action::LocalUser(LocalUserAction::CameraOnTriggered)
        | Action::LocalUser(LocalUserAction::CameraPreviewOnTriggered)
        | Action::LocalUser(LocalUserAction::CameraOffTriggered) => "camera-toggle",
        Action::LocalUser(LocalUserAction::CameraSwitchTriggered) => "camera-switch",
        Action::LocalUser(LocalUserAction::MicrophoneOnTriggered)
        | Action::LocalUser(LocalUserAction::MicrophoneOffTriggered) => "microphone-toggle",
        Action::Calling(CallingAction::CallEndRequested) => "call-end",
        Action::Calling(CallingAction::HoldRequested)
        | Action::Calling(CallingAction::ResumeRequested) => "call-hold",
        _ => return None,
    };
    Some(key.to_string())
}
