use crate::actions::{Action, CallingAction, ErrorAction, NavigationAction};
use crate::state::{NavigationState, NavigationStatus};

/// Reduce navigation state
///
/// Screen changes reset the overlays; overlay actions only toggle their flag.
pub fn reduce_navigation(mut state: NavigationState, action: &Action) -> NavigationState {
    match action {
        Action::Navigation(NavigationAction::CallingViewLaunched) => {
            state = NavigationState::in_status(NavigationStatus::InCall);
        }
        Action::CompositeExit
        | Action::Calling(CallingAction::DismissSetup)
        | Action::Error(ErrorAction::FatalErrorUpdated { .. }) => {
            state = NavigationState::in_status(NavigationStatus::Exit);
        }
        Action::Error(ErrorAction::StatusErrorAndCallReset { .. }) => {
            state = NavigationState::in_status(NavigationStatus::Setup);
        }
        Action::Navigation(NavigationAction::ParticipantsListShown) => {
            state.participants_visible = true;
        }
        Action::Navigation(NavigationAction::ParticipantsListHidden) => {
            state.participants_visible = false;
        }
        Action::Navigation(NavigationAction::AudioSelectionShown) => {
            state.audio_selection_visible = true;
        }
        Action::Navigation(NavigationAction::AudioSelectionHidden) => {
            state.audio_selection_visible = false;
        }
        Action::Navigation(NavigationAction::EndCallConfirmationShown) => {
            state.end_call_confirmation_visible = true;
        }
        Action::Navigation(NavigationAction::EndCallConfirmationHidden) => {
            state.end_call_confirmation_visible = false;
        }
        Action::Navigation(NavigationAction::MoreOptionsShown) => {
            state.more_options_visible = true;
        }
        Action::Navigation(NavigationAction::MoreOptionsHidden) => {
            state.more_options_visible = false;
        }
        _ => {}
    }
    state
}
