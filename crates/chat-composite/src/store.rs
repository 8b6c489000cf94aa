//! Store assembly
//!
//! Middleware order: logging, throttling of keystroke-driven actions, then the
//! chat middleware.

use std::sync::Arc;

use chrono::Duration;
use composite_config::CompositeConfig;
use composite_redux::{LoggingMiddleware, StoreError, ThrottleMiddleware};
use tokio::runtime::Handle;

use crate::actions::{Action, ChatAction, ParticipantsAction};
use crate::middleware::{throttle_key, ChatMiddleware, ChatMiddlewareHandler};
use crate::reducers;
use crate::service::ChatService;
use crate::state::{AppState, LocalUserInfo};

pub type ChatStore = composite_redux::Store<AppState, Action>;

/// Build the chat store
///
/// # Arguments
/// * `config` - display name and chat options, including the thread id
/// * `local_user_id` - identifier of the local user in the thread
/// * `service` - chat SDK facade used by the effects
/// * `runtime` - runtime the effects are spawned on
pub fn construct_store(
    config: &CompositeConfig,
    local_user_id: &str,
    service: Arc<dyn ChatService>,
    runtime: Handle,
) -> Result<ChatStore, StoreError> {
    let typing_timeout = config.chat.typing_indicator_timeout();
    let local_user = LocalUserInfo {
        identifier: local_user_id.to_string(),
        display_name: config.display_name.clone(),
    };
    let mut initial = AppState::new(
        local_user,
        Duration::from_std(typing_timeout).unwrap_or_else(|_| Duration::seconds(8)),
    );
    initial.chat.thread_id = config.chat.thread_id.clone();
    let handler = ChatMiddlewareHandler::new(service, runtime, config.chat.clone());

    // receivers keep an indicator up for the full timeout, half of it is
    // often enough to resend
    ChatStore::builder(initial, reducers::reduce)
        .middleware(LoggingMiddleware::skipping(is_noisy))
        .middleware(ThrottleMiddleware::new(typing_timeout / 2, throttle_key))
        .middleware(ChatMiddleware::new(handler))
        .build()
}

fn is_noisy(action: &Action) -> bool {
    matches!(
        action,
        Action::Chat(ChatAction::SendTypingIndicatorTriggered)
            | Action::Chat(ChatAction::SendTypingIndicatorSuccess)
            | Action::Participants(ParticipantsAction::TypingIndicatorReceived { .. })
            | Action::Participants(ParticipantsAction::ClearIdleTypingParticipants { .. })
    )
}
