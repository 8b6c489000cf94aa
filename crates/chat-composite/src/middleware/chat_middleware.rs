use composite_redux::{Context, Middleware, Next};

use crate::actions::{Action, ChatAction, LifecycleAction, RepositoryAction};
use crate::middleware::ChatMiddlewareHandler;
use crate::state::AppState;

/// Routes chat actions to the handler, then passes them on
///
/// Triggers the handler refuses to act on are consumed here.
pub struct ChatMiddleware {
    handler: ChatMiddlewareHandler,
}

impl ChatMiddleware {
    pub fn new(handler: ChatMiddlewareHandler) -> Self {
        Self { handler }
    }
}

impl Middleware<AppState, Action> for ChatMiddleware {
    fn handle(
        &mut self,
        action: Action,
        ctx: &Context<'_, AppState, Action>,
        next: Next<'_, AppState, Action>,
    ) {
        let state = ctx.state();
        let dispatcher = ctx.dispatcher();
        let handler = &self.handler;

        match &action {
            Action::Chat(ChatAction::ChatStartRequested) => {
                handler.start_chat(&state, &dispatcher);
            }
            Action::Chat(ChatAction::InitializeChatTriggered) => {
                if handler.initialize(&state, &dispatcher).is_none() {
                    log::debug!("ChatMiddleware: chat initialization already started, dropping trigger");
                    return;
                }
            }
            Action::Chat(ChatAction::SendTypingIndicatorTriggered) => {
                handler.send_typing_indicator(&dispatcher);
            }
            Action::Chat(ChatAction::SendReadReceiptTriggered { message_id }) => {
                handler.send_read_receipt(&state, message_id, &dispatcher);
            }
            Action::Repository(RepositoryAction::FetchInitialMessagesTriggered) => {
                handler.fetch_initial_messages(&dispatcher);
            }
            // without a request in flight nothing would clear the fetching flag
            Action::Repository(RepositoryAction::FetchPreviousMessagesTriggered) => {
                if handler
                    .fetch_previous_messages(&state, &dispatcher)
                    .is_none()
                {
                    log::debug!("ChatMiddleware: no previous page to fetch, dropping trigger");
                    return;
                }
            }
            Action::Repository(RepositoryAction::SendMessageTriggered {
                internal_id,
                content,
                ..
            }) => {
                handler.send_message(&state, internal_id, content, &dispatcher);
            }
            Action::Repository(RepositoryAction::EditMessageTriggered {
                message_id,
                content,
                prev_content,
            }) => {
                handler.edit_message(message_id, content, prev_content, &dispatcher);
            }
            Action::Repository(RepositoryAction::DeleteMessageTriggered { message_id }) => {
                handler.delete_message(message_id, &dispatcher);
            }
            Action::Lifecycle(LifecycleAction::ForegroundEntered) => {
                handler.enter_foreground(&state, &dispatcher);
            }
            _ => {}
        }

        next.run(action);
    }
}
