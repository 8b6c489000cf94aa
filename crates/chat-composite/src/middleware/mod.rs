//! Chat middleware
//!
//! - [`ChatMiddleware`] routes actions to the [`ChatMiddlewareHandler`]
//! - the handler runs one effect task per request against the
//!   [`ChatService`](crate::service::ChatService)
//! - [`ChatServiceListener`] turns thread events into actions

mod chat_handler;
mod chat_middleware;
mod service_listener;

pub use chat_handler::ChatMiddlewareHandler;
pub use chat_middleware::ChatMiddleware;
pub use service_listener::ChatServiceListener;

use crate::actions::{Action, ChatAction, RepositoryAction};

/// Throttle key of actions the UI fires on every keystroke or scroll
pub fn throttle_key(action: &Action) -> Option<String> {
    let key = match action {
        Action::Chat(ChatAction::SendTypingIndicatorTriggered) => "typing-indicator",
        Action::Repository(RepositoryAction::FetchPreviousMessagesTriggered) => "fetch-previous",
        _ => return None,
    };
    Some(key.to_string())
}
