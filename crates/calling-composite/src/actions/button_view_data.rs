//! Host updates of control bar buttons

use crate::state::{ButtonScreen, ControlButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonViewDataAction {
    IsEnabledUpdated {
        screen: ButtonScreen,
        button: ControlButton,
        enabled: bool,
    },
    IsVisibleUpdated {
        screen: ButtonScreen,
        button: ControlButton,
        visible: bool,
    },
}
