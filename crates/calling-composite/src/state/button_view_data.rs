use composite_config::{ButtonOption, ButtonOptions};
use strum::Display;

/// Screen a control bar button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ButtonScreen {
    Setup,
    Call,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ControlButton {
    Camera,
    Microphone,
    AudioDevice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultButtonState {
    pub enabled: bool,
    pub visible: bool,
}

impl Default for DefaultButtonState {
    fn default() -> Self {
        Self {
            enabled: true,
            visible: true,
        }
    }
}

impl From<ButtonOption> for DefaultButtonState {
    fn from(option: ButtonOption) -> Self {
        Self {
            enabled: option.enabled,
            visible: option.visible,
        }
    }
}

/// Host overrides of the control bar buttons
///
/// `None` means the host did not claim the button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonViewDataState {
    pub setup_camera: Option<DefaultButtonState>,
    pub setup_microphone: Option<DefaultButtonState>,
    pub setup_audio_device: Option<DefaultButtonState>,
    pub call_camera: Option<DefaultButtonState>,
    pub call_microphone: Option<DefaultButtonState>,
    pub call_audio_device: Option<DefaultButtonState>,
}

impl ButtonViewDataState {
    pub fn button(&self, screen: ButtonScreen, button: ControlButton) -> Option<DefaultButtonState> {
        match (screen, button) {
            (ButtonScreen::Setup, ControlButton::Camera) => self.setup_camera,
            (ButtonScreen::Setup, ControlButton::Microphone) => self.setup_microphone,
            (ButtonScreen::Setup, ControlButton::AudioDevice) => self.setup_audio_device,
            (ButtonScreen::Call, ControlButton::Camera) => self.call_camera,
            (ButtonScreen::Call, ControlButton::Microphone) => self.call_microphone,
            (ButtonScreen::Call, ControlButton::AudioDevice) => self.call_audio_device,
        }
    }

    pub fn button_mut(
        &mut self,
        screen: ButtonScreen,
        button: ControlButton,
    ) -> &mut Option<DefaultButtonState> {
        match (screen, button) {
            (ButtonScreen::Setup, ControlButton::Camera) => &mut self.setup_camera,
            (ButtonScreen::Setup, ControlButton::Microphone) => &mut self.setup_microphone,
            (ButtonScreen::Setup, ControlButton::AudioDevice) => &mut self.setup_audio_device,
            (ButtonScreen::Call, ControlButton::Camera) => &mut self.call_camera,
            (ButtonScreen::Call, ControlButton::Microphone) => &mut self.call_microphone,
            (ButtonScreen::Call, ControlButton::AudioDevice) => &mut self.call_audio_device,
        }
    }

    /// Flags to render with, unclaimed buttons are enabled and visible
    pub fn effective(&self, screen: ButtonScreen, button: ControlButton) -> DefaultButtonState {
        self.button(screen, button).unwrap_or_default()
    }
}

impl From<&ButtonOptions> for ButtonViewDataState {
    fn from(options: &ButtonOptions) -> Self {
        Self {
            setup_camera: options.setup_camera.map(Into::into),
            setup_microphone: options.setup_microphone.map(Into::into),
            setup_audio_device: options.setup_audio_device.map(Into::into),
            call_camera: options.call_camera.map(Into::into),
            call_microphone: options.call_microphone.map(Into::into),
            call_audio_device: options.call_audio_device.map(Into::into),
        }
    }
}
