//! Effects of the chat middleware
//!
//! Guards look at the state from before the triggering action was reduced.
//! Every effect reports back with a success or failure action.

use std::sync::Arc;

use composite_config::ChatOptions;
use composite_redux::Dispatcher;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::actions::{Action, ChatAction, ParticipantsAction, RepositoryAction};
use crate::middleware::ChatServiceListener;
use crate::service::ChatService;
use crate::state::AppState;

pub struct ChatMiddlewareHandler {
    service: Arc<dyn ChatService>,
    runtime: Handle,
    options: ChatOptions,
}

impl ChatMiddlewareHandler {
    pub fn new(service: Arc<dyn ChatService>, runtime: Handle, options: ChatOptions) -> Self {
        Self {
            service,
            runtime,
            options,
        }
    }

    /// Kick off initialization unless the chat is already up or connecting
    pub fn start_chat(&self, state: &AppState, dispatcher: &Dispatcher<Action>) {
        if state.chat.is_initialized || state.chat.is_initializing {
            log::debug!("ChatMiddleware: chat already started");
            return;
        }
        dispatcher.dispatch(ChatAction::InitializeChatTriggered.into());
    }

    /// Connect, start listening, then load participants and the first page
    pub fn initialize(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        if state.chat.is_initialized || state.chat.is_initializing {
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let listener = ChatServiceListener::new(
            state.chat.local_user.identifier.clone(),
            self.options.typing_indicator_timeout(),
        );
        let thread = state.chat.thread_id.clone().unwrap_or_else(|| "<unset>".to_string());

        Some(self.runtime.spawn(async move {
            let topic = match service.initialize().await {
                Ok(topic) => topic,
                Err(error) => {
                    log::warn!("ChatMiddleware: initialization failed: {}", error);
                    dispatcher.dispatch(ChatAction::InitializeChatFailed { error }.into());
                    return;
                }
            };
            log::info!("ChatMiddleware: chat initialized on thread {}", thread);
            dispatcher.dispatch(ChatAction::TopicRetrieved { topic }.into());

            let events = service.subscribe_events();
            tokio::spawn(listener.run(events, dispatcher.clone()));

            match service.list_participants().await {
                Ok(participants) => dispatcher
                    .dispatch(ParticipantsAction::ParticipantsAdded { participants }.into()),
                Err(error) => log::warn!("ChatMiddleware: listing participants failed: {}", error),
            }
            dispatcher.dispatch(RepositoryAction::FetchInitialMessagesTriggered.into());
        }))
    }

    pub fn fetch_initial_messages(&self, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let page_size = self.options.page_size;

        self.runtime.spawn(async move {
            let action = match service.get_initial_messages(page_size).await {
                Ok(messages) => RepositoryAction::FetchInitialMessagesSuccess { messages },
                Err(error) => RepositoryAction::FetchInitialMessagesFailed { error },
            };
            dispatcher.dispatch(action.into());
        })
    }

    /// Load the next older page, one request at a time
    pub fn fetch_previous_messages(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        let repository = &state.repository;
        if repository.is_fetching_previous || repository.has_fetched_all {
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let page_size = self.options.page_size;
        Some(self.runtime.spawn(async move {
            let action = match service.get_previous_messages(page_size).await {
                Ok(messages) => RepositoryAction::FetchPreviousMessagesSuccess { messages },
                Err(error) => RepositoryAction::FetchPreviousMessagesFailed { error },
            };
            dispatcher.dispatch(action.into());
        }))
    }

    pub fn send_message(
        &self,
        state: &AppState,
        internal_id: &str,
        content: &str,
        dispatcher: &Dispatcher<Action>,
    ) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let internal_id = internal_id.to_string();
        let content = content.to_string();
        let display_name = state.chat.local_user.display_name.clone();

        self.runtime.spawn(async move {
            let action = match service.send_message(&content, &display_name).await {
                Ok(actual_id) => RepositoryAction::SendMessageSuccess {
                    internal_id,
                    actual_id,
                },
                Err(error) => RepositoryAction::SendMessageFailed { internal_id, error },
            };
            dispatcher.dispatch(action.into());
        })
    }

    pub fn edit_message(
        &self,
        message_id: &str,
        content: &str,
        prev_content: &str,
        dispatcher: &Dispatcher<Action>,
    ) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let message_id = message_id.to_string();
        let content = content.to_string();
        let prev_content = prev_content.to_string();

        self.runtime.spawn(async move {
            let action = match service.edit_message(&message_id, &content).await {
                Ok(()) => RepositoryAction::EditMessageSuccess { message_id },
                Err(error) => RepositoryAction::EditMessageFailed {
                    message_id,
                    prev_content,
                    error,
                },
            };
            dispatcher.dispatch(action.into());
        })
    }

    pub fn delete_message(&self, message_id: &str, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let message_id = message_id.to_string();

        self.runtime.spawn(async move {
            let action = match service.delete_message(&message_id).await {
                Ok(()) => RepositoryAction::DeleteMessageSuccess { message_id },
                Err(error) => RepositoryAction::DeleteMessageFailed { message_id, error },
            };
            dispatcher.dispatch(action.into());
        })
    }

    pub fn send_typing_indicator(&self, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let action = match service.send_typing_indicator().await {
                Ok(()) => ChatAction::SendTypingIndicatorSuccess,
                Err(error) => ChatAction::SendTypingIndicatorFailed { error },
            };
            dispatcher.dispatch(action.into());
        })
    }

    /// Skipped when the receipt for this message already went out
    pub fn send_read_receipt(
        &self,
        state: &AppState,
        message_id: &str,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        if state.chat.last_read_receipt_sent.as_deref() == Some(message_id) {
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let message_id = message_id.to_string();
        Some(self.runtime.spawn(async move {
            let action = match service.send_read_receipt(&message_id).await {
                Ok(()) => ChatAction::SendReadReceiptSuccess { message_id },
                Err(error) => ChatAction::SendReadReceiptFailed { error },
            };
            dispatcher.dispatch(action.into());
        }))
    }

    /// Catch up on messages missed while in the background
    pub fn enter_foreground(&self, state: &AppState, dispatcher: &Dispatcher<Action>) {
        if state.chat.is_initialized && !state.chat.is_thread_deleted {
            dispatcher.dispatch(RepositoryAction::FetchInitialMessagesTriggered.into());
        }
    }
}
