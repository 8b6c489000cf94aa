use crate::actions::{Action, LifecycleAction};
use crate::state::{AppStatus, LifecycleState};

pub fn reduce_lifecycle(mut state: LifecycleState, action: &Action) -> LifecycleState {
    match action {
        Action::Lifecycle(LifecycleAction::ForegroundEntered) => {
            state.current_status = AppStatus::Foreground;
        }
        Action::Lifecycle(LifecycleAction::BackgroundEntered) => {
            state.current_status = AppStatus::Background;
        }
        _ => {}
    }
    state
}
