use chrono::{DateTime, Utc};

use crate::domain_models::{ChatParticipant, UserEventTimestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsAction {
    ParticipantsAdded {
        participants: Vec<ChatParticipant>,
    },
    ParticipantsRemoved {
        participants: Vec<ChatParticipant>,
    },
    TypingIndicatorReceived {
        event: UserEventTimestamp,
    },
    ReadReceiptReceived {
        event: UserEventTimestamp,
    },
    /// Drop typing indicators older than the typing timeout at `now`
    ClearIdleTypingParticipants {
        now: DateTime<Utc>,
    },
}
