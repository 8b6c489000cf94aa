use strum::Display;

/// Screen the composite is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum NavigationStatus {
    #[default]
    Setup,
    InCall,
    Exit,
}

/// Current screen plus the overlays stacked on top of it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub status: NavigationStatus,
    pub participants_visible: bool,
    pub audio_selection_visible: bool,
    pub end_call_confirmation_visible: bool,
    pub more_options_visible: bool,
}

impl NavigationState {
    pub fn in_status(status: NavigationStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn any_overlay_visible(&self) -> bool {
        self.participants_visible
            || self.audio_selection_visible
            || self.end_call_confirmation_visible
            || self.more_options_visible
    }
}
