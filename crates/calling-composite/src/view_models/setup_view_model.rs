use composite_redux::{Dispatcher, ViewModel};

use crate::actions::{Action, CallingAction};
use crate::state::{AppPermissionStatus, AppState, CallingStatus, ErrorCategory};

use super::set;

/// Setup screen: preview, device toggles and the join button
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupViewModel {
    pub is_join_enabled: bool,
    /// Join was tapped and the call has not failed since
    pub is_joining: bool,
    pub is_audio_permission_denied: bool,
}

impl SetupViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn setup_view_appeared(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(CallingAction::SetupCall.into());
    }

    pub fn join_call(&mut self, dispatcher: &Dispatcher<Action>) {
        if !self.is_join_enabled || self.is_joining {
            return;
        }
        self.is_joining = true;
        dispatcher.dispatch(CallingAction::CallStartRequested.into());
    }

    pub fn dismiss(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(CallingAction::DismissSetup.into());
    }
}

impl ViewModel<AppState> for SetupViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let audio_denied = state.permission.audio_permission == AppPermissionStatus::Denied;
        let call_failed = state.error.category != ErrorCategory::None
            && state.calling.status == CallingStatus::None;

        let mut changed = set(&mut self.is_audio_permission_denied, audio_denied);
        changed |= set(&mut self.is_join_enabled, !audio_denied);
        if call_failed {
            changed |= set(&mut self.is_joining, false);
        }
        changed
    }
}
