use crate::actions::{Action, CallingAction, ErrorAction, LocalUserAction};
use crate::error::CallCompositeInternalError;
use crate::state::{ErrorCategory, ErrorState};

/// Reduce error state
pub fn reduce_error(state: ErrorState, action: &Action) -> ErrorState {
    match action {
        Action::Error(ErrorAction::FatalErrorUpdated {
            internal_error,
            error,
        }) => ErrorState::new(*internal_error, error.clone(), ErrorCategory::Fatal),
        Action::Error(ErrorAction::StatusErrorAndCallReset {
            internal_error,
            error,
        }) => ErrorState::new(*internal_error, error.clone(), ErrorCategory::CallState),
        Action::LocalUser(LocalUserAction::CameraOnFailed { error }) => ErrorState::new(
            CallCompositeInternalError::CameraOnFailed,
            Some(error.clone()),
            ErrorCategory::CallState,
        ),
        Action::Calling(CallingAction::CallStartRequested) => ErrorState::default(),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[test]
    fn test_fatal_error_updated() {
        let error = ServiceError::sdk(401, "token expired");
        let state = reduce_error(
            ErrorState::default(),
            &Action::Error(ErrorAction::FatalErrorUpdated {
                internal_error: CallCompositeInternalError::CallTokenFailed,
                error: Some(error.clone()),
            }),
        );

        assert_eq!(
            state.internal_error,
            Some(CallCompositeInternalError::CallTokenFailed)
        );
        assert_eq!(state.error, Some(error));
        assert_eq!(state.category, ErrorCategory::Fatal);
    }

    #[test]
    fn test_status_error_and_call_reset() {
        let state = reduce_error(
            ErrorState::default(),
            &Action::Error(ErrorAction::StatusErrorAndCallReset {
                internal_error: CallCompositeInternalError::CallEvicted,
                error: None,
            }),
        );
        assert_eq!(
            state.internal_error,
            Some(CallCompositeInternalError::CallEvicted)
        );
        assert_eq!(state.category, ErrorCategory::CallState);
    }

    #[test]
    fn test_camera_on_failed() {
        let state = reduce_error(
            ErrorState::default(),
            &Action::LocalUser(LocalUserAction::CameraOnFailed {
                error: ServiceError::sdk(1, "busy"),
            }),
        );
        assert_eq!(
            state.internal_error,
            Some(CallCompositeInternalError::CameraOnFailed)
        );
        assert_eq!(state.category, ErrorCategory::CallState);
    }

    #[test]
    fn test_call_start_requested_clears_error() {
        let failed = ErrorState::new(
            CallCompositeInternalError::CallEvicted,
            None,
            ErrorCategory::CallState,
        );
        let state = reduce_error(failed, &Action::Calling(CallingAction::CallStartRequested));
        assert_eq!(state, ErrorState::default());
    }

    #[test]
    fn test_unrelated_action_is_identity() {
        let failed = ErrorState::new(
            CallCompositeInternalError::CallEvicted,
            None,
            ErrorCategory::CallState,
        );
        let state = reduce_error(failed.clone(), &Action::Calling(CallingAction::CallEnded));
        assert_eq!(state, failed);
    }
}
