use crate::actions::Action;
use crate::reducers::{
    chat_reducer, error_reducer, lifecycle_reducer, participants_reducer, repository_reducer,
};
use crate::state::AppState;

/// Root reducer - hands every substate and the full action to its reducer
pub fn reduce(state: AppState, action: &Action) -> AppState {
    let AppState {
        chat,
        repository,
        participants,
        lifecycle,
        error,
    } = state;

    AppState {
        chat: chat_reducer::reduce_chat(chat, action),
        repository: repository_reducer::reduce_repository(repository, action),
        participants: participants_reducer::reduce_participants(participants, action),
        lifecycle: lifecycle_reducer::reduce_lifecycle(lifecycle, action),
        error: error_reducer::reduce_error(error, action),
    }
}
