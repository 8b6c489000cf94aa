//! Value types exchanged with the chat service

mod message;
mod participant;

pub use message::{ChatMessage, ChatMessageType, MessageSendStatus};
pub use participant::{ChatParticipant, UserEventTimestamp};
