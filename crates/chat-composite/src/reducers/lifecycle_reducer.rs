use crate::actions::{Action, LifecycleAction};
use crate::state::{AppStatus, LifecycleState};

pub fn reduce_lifecycle(state: LifecycleState, action: &Action) -> LifecycleState {
    match action {
        Action::Lifecycle(LifecycleAction::ForegroundEntered) => LifecycleState {
            current_status: AppStatus::Foreground,
        },
        Action::Lifecycle(LifecycleAction::BackgroundEntered) => LifecycleState {
            current_status: AppStatus::Background,
        },
        _ => state,
    }
}
