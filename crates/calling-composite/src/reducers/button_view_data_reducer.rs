//! Button View Data Reducer
//!
//! Only buttons the host claimed at launch can be updated. Updates to an
//! unclaimed button are ignored.

use crate::actions::{Action, ButtonViewDataAction};
use crate::state::ButtonViewDataState;

pub fn reduce_button_view_data(
    mut state: ButtonViewDataState,
    action: &Action,
) -> ButtonViewDataState {
    let Action::ButtonViewData(action) = action else {
        return state;
    };

    match *action {
        ButtonViewDataAction::IsEnabledUpdated {
            screen,
            button,
            enabled,
        } => {
            if let Some(current) = state.button_mut(screen, button) {
                current.enabled = enabled;
            }
        }
        ButtonViewDataAction::IsVisibleUpdated {
            screen,
            button,
            visible,
        } => {
            if let Some(current) = state.button_mut(screen, button) {
                current.visible = visible;
            }
        }
    }
    state
}
