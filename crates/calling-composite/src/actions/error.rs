use crate::error::{CallCompositeInternalError, ServiceError};

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorAction {
    /// The session cannot continue
    FatalErrorUpdated {
        internal_error: CallCompositeInternalError,
        error: Option<ServiceError>,
    },
    /// The call failed or was ended by the service; go back to setup
    StatusErrorAndCallReset {
        internal_error: CallCompositeInternalError,
        error: Option<ServiceError>,
    },
}

impl ErrorAction {
    /// Route an error to the fatal or the reset variant
    pub fn classify(internal_error: CallCompositeInternalError, error: Option<ServiceError>) -> Self {
        if internal_error.is_fatal() {
            Self::FatalErrorUpdated {
                internal_error,
                error,
            }
        } else {
            Self::StatusErrorAndCallReset {
                internal_error,
                error,
            }
        }
    }
}
