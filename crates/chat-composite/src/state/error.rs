use crate::error::{ChatCompositeInternalError, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCategory {
    #[default]
    None,
    Fatal,
    /// A single request failed, the chat continues
    Request,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub internal_error: Option<ChatCompositeInternalError>,
    pub error: Option<ServiceError>,
    pub category: ErrorCategory,
}
