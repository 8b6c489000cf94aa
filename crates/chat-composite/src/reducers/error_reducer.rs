use crate::actions::{Action, ChatAction, ErrorAction, RepositoryAction};
use crate::error::{ChatCompositeInternalError, ServiceError};
use crate::state::{ErrorCategory, ErrorState};

/// Reduce error state
///
/// Failed requests are mapped to their internal error; whether that ends the
/// session is decided by [`ChatCompositeInternalError::is_fatal`].
pub fn reduce_error(state: ErrorState, action: &Action) -> ErrorState {
    match action {
        Action::Error(ErrorAction::FatalErrorUpdated {
            internal_error,
            error,
        }) => ErrorState {
            internal_error: Some(*internal_error),
            error: error.clone(),
            category: ErrorCategory::Fatal,
        },
        Action::Chat(ChatAction::InitializeChatFailed { error }) => {
            failed(error, ChatCompositeInternalError::ChatInitializationFailed)
        }
        Action::Chat(ChatAction::ChatThreadDeleted) => ErrorState {
            internal_error: Some(ChatCompositeInternalError::ChatThreadDeleted),
            error: None,
            category: ErrorCategory::Fatal,
        },
        Action::Chat(ChatAction::ChatStartRequested) => ErrorState::default(),
        Action::Repository(RepositoryAction::FetchInitialMessagesFailed { error })
        | Action::Repository(RepositoryAction::FetchPreviousMessagesFailed { error }) => {
            failed(error, ChatCompositeInternalError::FetchMessagesFailed)
        }
        Action::Repository(RepositoryAction::SendMessageFailed { error, .. }) => {
            failed(error, ChatCompositeInternalError::SendMessageFailed)
        }
        Action::Repository(RepositoryAction::EditMessageFailed { error, .. }) => {
            failed(error, ChatCompositeInternalError::EditMessageFailed)
        }
        Action::Repository(RepositoryAction::DeleteMessageFailed { error, .. }) => {
            failed(error, ChatCompositeInternalError::DeleteMessageFailed)
        }
        _ => state,
    }
}

fn failed(error: &ServiceError, fallback: ChatCompositeInternalError) -> ErrorState {
    let internal_error = error.internal_or(fallback);
    let category = if internal_error.is_fatal() {
        ErrorCategory::Fatal
    } else {
        ErrorCategory::Request
    };
    ErrorState {
        internal_error: Some(internal_error),
        error: Some(error.clone()),
        category,
    }
}
