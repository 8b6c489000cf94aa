//! Control Bar View Model
//!
//! Camera, microphone and audio route buttons, shared by the setup and the
//! in-call screen. Toggles pick the preview actions while on the setup screen.
//! The host can disable or hide each button per screen.

use composite_redux::{Dispatcher, ViewModel};

use crate::actions::{Action, LocalUserAction, NavigationAction};
use crate::domain_models::AudioDeviceType;
use crate::state::{
    AppPermissionStatus, AppState, AudioOperationalStatus, ButtonScreen, CallingStatus,
    CameraDeviceSelectionStatus, CameraOperationalStatus, ControlButton, NavigationStatus,
};

use super::set;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleButtonState {
    On,
    #[default]
    Off,
    /// A request is in flight
    Busy,
    Disabled,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlBarViewModel {
    pub camera_button: ToggleButtonState,
    pub microphone_button: ToggleButtonState,
    pub is_camera_switching: bool,
    /// Current audio route, `None` while a change is in flight
    pub audio_device: Option<AudioDeviceType>,
    pub is_audio_device_enabled: bool,
    pub is_camera_visible: bool,
    pub is_microphone_visible: bool,
    pub is_audio_device_visible: bool,
    in_setup: bool,
}

impl ControlBarViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_camera(&self, dispatcher: &Dispatcher<Action>) {
        let action = match self.camera_button {
            ToggleButtonState::On => LocalUserAction::CameraOffTriggered,
            ToggleButtonState::Off if self.in_setup => LocalUserAction::CameraPreviewOnTriggered,
            ToggleButtonState::Off => LocalUserAction::CameraOnTriggered,
            ToggleButtonState::Busy | ToggleButtonState::Disabled => return,
        };
        dispatcher.dispatch(action.into());
    }

    pub fn toggle_microphone(&self, dispatcher: &Dispatcher<Action>) {
        let action = match (self.microphone_button, self.in_setup) {
            (ToggleButtonState::On, true) => LocalUserAction::MicrophonePreviewOff,
            (ToggleButtonState::On, false) => LocalUserAction::MicrophoneOffTriggered,
            (ToggleButtonState::Off, true) => LocalUserAction::MicrophonePreviewOn,
            (ToggleButtonState::Off, false) => LocalUserAction::MicrophoneOnTriggered,
            (ToggleButtonState::Busy | ToggleButtonState::Disabled, _) => return,
        };
        dispatcher.dispatch(action.into());
    }

    pub fn switch_camera(&self, dispatcher: &Dispatcher<Action>) {
        if self.camera_button == ToggleButtonState::On && !self.is_camera_switching {
            dispatcher.dispatch(LocalUserAction::CameraSwitchTriggered.into());
        }
    }

    pub fn select_audio_device(&self, device: AudioDeviceType, dispatcher: &Dispatcher<Action>) {
        if self.audio_device != Some(device) {
            dispatcher.dispatch(LocalUserAction::AudioDeviceChangeRequested { device }.into());
        }
        dispatcher.dispatch(NavigationAction::AudioSelectionHidden.into());
    }

    pub fn show_audio_selection(&self, dispatcher: &Dispatcher<Action>) {
        if self.is_audio_device_enabled {
            dispatcher.dispatch(NavigationAction::AudioSelectionShown.into());
        }
    }

    pub fn show_more_options(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(NavigationAction::MoreOptionsShown.into());
    }

    /// Ask for confirmation before leaving the call
    pub fn end_call(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(NavigationAction::EndCallConfirmationShown.into());
    }
}

impl ViewModel<AppState> for ControlBarViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let on_hold = state.calling.status == CallingStatus::LocalHold;
        let camera = &state.local_user.camera;
        let audio = &state.local_user.audio;
        let in_setup = state.navigation.status == NavigationStatus::Setup;
        let screen = if in_setup {
            ButtonScreen::Setup
        } else {
            ButtonScreen::Call
        };
        let buttons = &state.button_view_data;
        let camera_flags = buttons.effective(screen, ControlButton::Camera);
        let microphone_flags = buttons.effective(screen, ControlButton::Microphone);
        let audio_device_flags = buttons.effective(screen, ControlButton::AudioDevice);

        let camera_button = if on_hold
            || !camera_flags.enabled
            || state.permission.camera_permission == AppPermissionStatus::Denied
        {
            ToggleButtonState::Disabled
        } else {
            match camera.operation {
                CameraOperationalStatus::On => ToggleButtonState::On,
                CameraOperationalStatus::Pending => ToggleButtonState::Busy,
                CameraOperationalStatus::Off | CameraOperationalStatus::Paused => {
                    ToggleButtonState::Off
                }
            }
        };

        let microphone_button = if on_hold
            || !microphone_flags.enabled
            || state.permission.audio_permission == AppPermissionStatus::Denied
        {
            ToggleButtonState::Disabled
        } else {
            match audio.operation {
                AudioOperationalStatus::On => ToggleButtonState::On,
                AudioOperationalStatus::Pending => ToggleButtonState::Busy,
                AudioOperationalStatus::Off => ToggleButtonState::Off,
            }
        };

        let mut changed = set(&mut self.camera_button, camera_button);
        changed |= set(&mut self.microphone_button, microphone_button);
        changed |= set(
            &mut self.is_camera_switching,
            camera.device == CameraDeviceSelectionStatus::Switching,
        );
        changed |= set(&mut self.audio_device, audio.device.selected_device());
        changed |= set(&mut self.is_audio_device_enabled, audio_device_flags.enabled);
        changed |= set(&mut self.is_camera_visible, camera_flags.visible);
        changed |= set(&mut self.is_microphone_visible, microphone_flags.visible);
        changed |= set(&mut self.is_audio_device_visible, audio_device_flags.visible);
        // not shown, only steers the intents
        self.in_setup = in_setup;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DefaultButtonState;
    use crate::test_support::dispatched_by;

    fn in_call() -> AppState {
        let mut state = AppState::default();
        state.navigation.status = NavigationStatus::InCall;
        state.calling.status = CallingStatus::Connected;
        state
    }

    #[test]
    fn test_update_reports_changes_only() {
        let mut view_model = ControlBarViewModel::new();
        let mut state = in_call();
        state.local_user.camera.operation = CameraOperationalStatus::Pending;

        assert!(view_model.update(&state));
        assert_eq!(view_model.camera_button, ToggleButtonState::Busy);
        assert!(!view_model.update(&state));
    }

    #[test]
    fn test_hold_disables_toggles() {
        let mut view_model = ControlBarViewModel::new();
        let mut state = in_call();
        state.calling.status = CallingStatus::LocalHold;

        view_model.update(&state);
        assert_eq!(view_model.camera_button, ToggleButtonState::Disabled);
        assert_eq!(view_model.microphone_button, ToggleButtonState::Disabled);
    }

    #[tokio::test]
    async fn test_host_disabled_buttons_follow_screen() {
        let mut view_model = ControlBarViewModel::new();
        let mut state = in_call();
        state.button_view_data.call_camera = Some(DefaultButtonState {
            enabled: false,
            visible: true,
        });
        state.button_view_data.call_audio_device = Some(DefaultButtonState {
            enabled: false,
            visible: false,
        });

        view_model.update(&state);
        assert_eq!(view_model.camera_button, ToggleButtonState::Disabled);
        assert_eq!(view_model.microphone_button, ToggleButtonState::Off);
        assert!(view_model.is_camera_visible);
        assert!(!view_model.is_audio_device_visible);
        assert!(!view_model.is_audio_device_enabled);

        let actions = dispatched_by(|d| {
            view_model.toggle_camera(d);
            view_model.show_audio_selection(d);
        })
        .await;
        assert!(actions.is_empty());

        // call screen overrides do not reach the setup screen
        state.navigation.status = NavigationStatus::Setup;
        assert!(view_model.update(&state));
        assert_eq!(view_model.camera_button, ToggleButtonState::Off);
        assert!(view_model.is_audio_device_visible);
        assert!(view_model.is_audio_device_enabled);
    }

    #[tokio::test]
    async fn test_toggle_camera_in_setup_uses_preview() {
        let mut view_model = ControlBarViewModel::new();
        view_model.update(&AppState::default());

        let actions = dispatched_by(|d| view_model.toggle_camera(d)).await;
        assert_eq!(
            actions,
            vec![Action::from(LocalUserAction::CameraPreviewOnTriggered)]
        );
    }

    #[tokio::test]
    async fn test_toggle_microphone_in_call() {
        let mut view_model = ControlBarViewModel::new();
        let mut state = in_call();
        state.local_user.audio.operation = AudioOperationalStatus::On;
        view_model.update(&state);

        let actions = dispatched_by(|d| view_model.toggle_microphone(d)).await;
        assert_eq!(
            actions,
            vec![Action::from(LocalUserAction::MicrophoneOffTriggered)]
        );
    }

    #[tokio::test]
    async fn test_busy_camera_ignores_toggle() {
        let mut view_model = ControlBarViewModel::new();
        let mut state = in_call();
        state.local_user.camera.operation = CameraOperationalStatus::Pending;
        view_model.update(&state);

        let actions = dispatched_by(|d| view_model.toggle_camera(d)).await;
        assert!(actions.is_empty());
    }

    #[tokio::test]
    async fn test_select_audio_device_closes_selection() {
        let mut view_model = ControlBarViewModel::new();
        view_model.update(&in_call());

        let actions =
            dispatched_by(|d| view_model.select_audio_device(AudioDeviceType::Speaker, d)).await;
        assert_eq!(
            actions,
            vec![
                Action::from(LocalUserAction::AudioDeviceChangeRequested {
                    device: AudioDeviceType::Speaker
                }),
                Action::from(NavigationAction::AudioSelectionHidden),
            ]
        );
    }
}
