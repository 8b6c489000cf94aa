use crate::error::{ChatCompositeInternalError, ServiceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorAction {
    /// The chat session cannot continue
    FatalErrorUpdated {
        internal_error: ChatCompositeInternalError,
        error: Option<ServiceError>,
    },
}
