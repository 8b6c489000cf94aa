//! Chat service collaborator
//!
//! Everything the composite needs from a chat SDK sits behind [`ChatService`];
//! real-time notifications arrive as [`ChatEvent`]s.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain_models::{ChatMessage, ChatParticipant, UserEventTimestamp};
use crate::error::ServiceError;

/// Real-time notification of the chat thread
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    MessageReceived(ChatMessage),
    MessageEdited(ChatMessage),
    MessageDeleted(ChatMessage),
    TypingIndicatorReceived(UserEventTimestamp),
    ReadReceiptReceived(UserEventTimestamp),
    TopicUpdated(String),
    ParticipantsAdded(Vec<ChatParticipant>),
    ParticipantsRemoved(Vec<ChatParticipant>),
    ThreadDeleted,
}

/// Chat SDK facade
///
/// Implementations must be `Send + Sync`, one instance is shared by every
/// effect task of the chat middleware.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Connect to the thread and register for real-time notifications
    ///
    /// # Returns
    /// The thread topic
    async fn initialize(&self) -> Result<String, ServiceError>;

    async fn list_participants(&self) -> Result<Vec<ChatParticipant>, ServiceError>;

    /// Newest page of messages; resets the history cursor
    async fn get_initial_messages(&self, page_size: u32) -> Result<Vec<ChatMessage>, ServiceError>;

    /// Next older page; empty once the whole history was read
    async fn get_previous_messages(
        &self,
        page_size: u32,
    ) -> Result<Vec<ChatMessage>, ServiceError>;

    /// # Returns
    /// Id the service assigned to the message
    async fn send_message(
        &self,
        content: &str,
        sender_display_name: &str,
    ) -> Result<String, ServiceError>;

    async fn edit_message(&self, message_id: &str, content: &str) -> Result<(), ServiceError>;

    async fn delete_message(&self, message_id: &str) -> Result<(), ServiceError>;

    async fn send_typing_indicator(&self) -> Result<(), ServiceError>;

    async fn send_read_receipt(&self, message_id: &str) -> Result<(), ServiceError>;

    /// Stream of thread events; closes when the service disconnects
    fn subscribe_events(&self) -> UnboundedReceiver<ChatEvent>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

    /// In-memory service recording every call it receives
    pub(crate) struct MockChatService {
        calls: Mutex<Vec<String>>,
        failures: Mutex<HashMap<&'static str, ServiceError>>,
        initial_messages: Mutex<Vec<ChatMessage>>,
        previous_pages: Mutex<Vec<Vec<ChatMessage>>>,
        participants: Mutex<Vec<ChatParticipant>>,
        next_id: Mutex<u32>,
        events_tx: UnboundedSender<ChatEvent>,
        events_rx: Mutex<Option<UnboundedReceiver<ChatEvent>>>,
    }

    impl MockChatService {
        pub(crate) fn new() -> Arc<Self> {
            let (events_tx, events_rx) = unbounded_channel();
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                failures: Mutex::new(HashMap::new()),
                initial_messages: Mutex::new(Vec::new()),
                previous_pages: Mutex::new(Vec::new()),
                participants: Mutex::new(Vec::new()),
                next_id: Mutex::new(0),
                events_tx,
                events_rx: Mutex::new(Some(events_rx)),
            })
        }

        pub(crate) fn fail(&self, operation: &'static str, error: ServiceError) {
            self.failures.lock().unwrap().insert(operation, error);
        }

        pub(crate) fn with_initial_messages(&self, messages: Vec<ChatMessage>) {
            *self.initial_messages.lock().unwrap() = messages;
        }

        /// Pages served by `get_previous_messages`, newest history first
        pub(crate) fn with_previous_pages(&self, pages: Vec<Vec<ChatMessage>>) {
            *self.previous_pages.lock().unwrap() = pages;
        }

        pub(crate) fn with_participants(&self, participants: Vec<ChatParticipant>) {
            *self.participants.lock().unwrap() = participants;
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn emit(&self, event: ChatEvent) {
            let _ = self.events_tx.send(event);
        }

        fn record(&self, call: String, operation: &'static str) -> Result<(), ServiceError> {
            self.calls.lock().unwrap().push(call);
            match self.failures.lock().unwrap().get(operation) {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ChatService for MockChatService {
        async fn initialize(&self) -> Result<String, ServiceError> {
            self.record("initialize".into(), "initialize")?;
            Ok("Standup".into())
        }

        async fn list_participants(&self) -> Result<Vec<ChatParticipant>, ServiceError> {
            self.record("list_participants".into(), "list_participants")?;
            Ok(self.participants.lock().unwrap().clone())
        }

        async fn get_initial_messages(
            &self,
            _page_size: u32,
        ) -> Result<Vec<ChatMessage>, ServiceError> {
            self.record("get_initial_messages".into(), "get_initial_messages")?;
            Ok(self.initial_messages.lock().unwrap().clone())
        }

        async fn get_previous_messages(
            &self,
            _page_size: u32,
        ) -> Result<Vec<ChatMessage>, ServiceError> {
            self.record("get_previous_messages".into(), "get_previous_messages")?;
            let mut pages = self.previous_pages.lock().unwrap();
            if pages.is_empty() {
                return Ok(Vec::new());
            }
            Ok(pages.remove(0))
        }

        async fn send_message(
            &self,
            content: &str,
            _sender_display_name: &str,
        ) -> Result<String, ServiceError> {
            self.record(format!("send_message {content}"), "send_message")?;
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            Ok(format!("sent-{next_id}"))
        }

        async fn edit_message(&self, message_id: &str, content: &str) -> Result<(), ServiceError> {
            self.record(format!("edit_message {message_id} {content}"), "edit_message")
        }

        async fn delete_message(&self, message_id: &str) -> Result<(), ServiceError> {
            self.record(format!("delete_message {message_id}"), "delete_message")
        }

        async fn send_typing_indicator(&self) -> Result<(), ServiceError> {
            self.record("send_typing_indicator".into(), "send_typing_indicator")
        }

        async fn send_read_receipt(&self, message_id: &str) -> Result<(), ServiceError> {
            self.record(format!("send_read_receipt {message_id}"), "send_read_receipt")
        }

        fn subscribe_events(&self) -> UnboundedReceiver<ChatEvent> {
            self.calls.lock().unwrap().push("subscribe_events".into());
            match self.events_rx.lock().unwrap().take() {
                Some(events) => events,
                None => unbounded_channel().1,
            }
        }
    }
}
