//! Service event listener
//!
//! Maps chat thread events to actions. Typing indicators are stamped with the
//! time they arrived here, and the listener schedules a
//! `ClearIdleTypingParticipants` once each of them can have expired.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::Utc;
use composite_redux::Dispatcher;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

use crate::actions::{Action, ChatAction, ParticipantsAction, RepositoryAction};
use crate::domain_models::UserEventTimestamp;
use crate::service::ChatEvent;

pub struct ChatServiceListener {
    local_user_id: String,
    typing_timeout: Duration,
    /// When each received typing indicator runs out, oldest first
    typing_expiries: VecDeque<Instant>,
}

impl ChatServiceListener {
    pub fn new(local_user_id: impl Into<String>, typing_timeout: Duration) -> Self {
        Self {
            local_user_id: local_user_id.into(),
            typing_timeout,
            typing_expiries: VecDeque::new(),
        }
    }

    /// Listen until the stream closes or the thread is deleted
    pub async fn run(
        mut self,
        mut events: UnboundedReceiver<ChatEvent>,
        dispatcher: Dispatcher<Action>,
    ) {
        loop {
            let clear_at = self.typing_expiries.front().copied();

            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        log::debug!("ChatServiceListener: event stream closed");
                        break;
                    };
                    if self.handle_event(event, &dispatcher) {
                        break;
                    }
                }
                _ = sleep_until(clear_at.unwrap_or_else(Instant::now)), if clear_at.is_some() => {
                    let now = Instant::now();
                    while self.typing_expiries.front().is_some_and(|expiry| *expiry <= now) {
                        self.typing_expiries.pop_front();
                    }
                    dispatcher.dispatch(
                        ParticipantsAction::ClearIdleTypingParticipants { now: Utc::now() }.into(),
                    );
                }
            }
        }
    }

    /// Returns true once no further events should be processed
    fn handle_event(&mut self, event: ChatEvent, dispatcher: &Dispatcher<Action>) -> bool {
        let action: Action = match event {
            ChatEvent::MessageReceived(message) => {
                RepositoryAction::ChatMessageReceived { message }.into()
            }
            ChatEvent::MessageEdited(message) => {
                RepositoryAction::ChatMessageEditedReceived { message }.into()
            }
            ChatEvent::MessageDeleted(message) => {
                RepositoryAction::ChatMessageDeletedReceived { message }.into()
            }
            ChatEvent::TypingIndicatorReceived(event) => {
                if event.identifier == self.local_user_id {
                    return false;
                }
                self.typing_expiries
                    .push_back(Instant::now() + self.typing_timeout);
                ParticipantsAction::TypingIndicatorReceived {
                    event: UserEventTimestamp {
                        identifier: event.identifier,
                        timestamp: Utc::now(),
                    },
                }
                .into()
            }
            ChatEvent::ReadReceiptReceived(event) => {
                if event.identifier == self.local_user_id {
                    return false;
                }
                ParticipantsAction::ReadReceiptReceived { event }.into()
            }
            ChatEvent::TopicUpdated(topic) => ChatAction::TopicUpdateReceived { topic }.into(),
            ChatEvent::ParticipantsAdded(participants) => {
                ParticipantsAction::ParticipantsAdded { participants }.into()
            }
            ChatEvent::ParticipantsRemoved(participants) => {
                ParticipantsAction::ParticipantsRemoved { participants }.into()
            }
            ChatEvent::ThreadDeleted => {
                log::info!("ChatServiceListener: thread deleted");
                dispatcher.dispatch(ChatAction::ChatThreadDeleted.into());
                return true;
            }
        };
        dispatcher.dispatch(action);
        false
    }
}
