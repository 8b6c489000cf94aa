use chrono::{DateTime, Utc};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ChatMessageType {
    #[default]
    Text,
    Html,
    TopicUpdated,
    ParticipantsAdded,
    ParticipantsRemoved,
}

/// Delivery status of a message sent by the local user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MessageSendStatus {
    Sending,
    Sent,
    Seen,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Service id, or the local id until the service accepted the message
    pub id: String,
    pub message_type: ChatMessageType,
    pub content: String,
    pub sender_id: Option<String>,
    pub sender_display_name: Option<String>,
    pub created_on: DateTime<Utc>,
    pub edited_on: Option<DateTime<Utc>>,
    /// Set for messages the local user sent from this device
    pub send_status: Option<MessageSendStatus>,
}

impl ChatMessage {
    /// Text message as received from the service
    pub fn text(
        id: impl Into<String>,
        sender_id: impl Into<String>,
        content: impl Into<String>,
        created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            message_type: ChatMessageType::Text,
            content: content.into(),
            sender_id: Some(sender_id.into()),
            sender_display_name: None,
            created_on,
            edited_on: None,
            send_status: None,
        }
    }

    /// Message typed locally and not yet accepted by the service
    pub fn outgoing(
        internal_id: impl Into<String>,
        content: impl Into<String>,
        created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id: internal_id.into(),
            message_type: ChatMessageType::Text,
            content: content.into(),
            sender_id: None,
            sender_display_name: None,
            created_on,
            edited_on: None,
            send_status: Some(MessageSendStatus::Sending),
        }
    }

    pub fn is_local(&self) -> bool {
        self.send_status.is_some()
    }
}
