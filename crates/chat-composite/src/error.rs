//! Error types of the chat composite

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatCompositeInternalError {
    #[error("failed to connect to the chat thread")]
    ChatInitializationFailed,
    #[error("access token expired")]
    TokenExpired,
    #[error("failed to load messages")]
    FetchMessagesFailed,
    #[error("failed to send message")]
    SendMessageFailed,
    #[error("failed to edit message")]
    EditMessageFailed,
    #[error("failed to delete message")]
    DeleteMessageFailed,
    #[error("the chat thread was deleted")]
    ChatThreadDeleted,
}

impl ChatCompositeInternalError {
    /// Error code surfaced to the host, `None` for errors handled in-composite
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::ChatInitializationFailed => Some("chatConnectFailed"),
            Self::TokenExpired => Some("tokenExpired"),
            Self::ChatThreadDeleted => Some("chatThreadDeleted"),
            Self::FetchMessagesFailed
            | Self::SendMessageFailed
            | Self::EditMessageFailed
            | Self::DeleteMessageFailed => None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.error_code().is_some()
    }
}

/// Failure reported by the chat service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Internal(#[from] ChatCompositeInternalError),
    #[error("chat SDK error {code}: {message}")]
    Sdk { code: i32, message: String },
}

impl ServiceError {
    pub fn sdk(code: i32, message: impl Into<String>) -> Self {
        Self::Sdk {
            code,
            message: message.into(),
        }
    }

    pub fn internal_or(&self, fallback: ChatCompositeInternalError) -> ChatCompositeInternalError {
        match self {
            Self::Internal(internal) => *internal,
            Self::Sdk { .. } => fallback,
        }
    }
}
