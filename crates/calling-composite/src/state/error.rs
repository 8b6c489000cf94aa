use crate::error::{CallCompositeInternalError, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCategory {
    #[default]
    None,
    /// The session cannot continue
    Fatal,
    /// The call was reset or an operation failed, the session continues
    CallState,
}

/// Last error the composite has to present
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorState {
    pub internal_error: Option<CallCompositeInternalError>,
    pub error: Option<ServiceError>,
    pub category: ErrorCategory,
}

impl ErrorState {
    pub fn new(
        internal_error: CallCompositeInternalError,
        error: Option<ServiceError>,
        category: ErrorCategory,
    ) -> Self {
        Self {
            internal_error: Some(internal_error),
            error,
            category,
        }
    }
}
