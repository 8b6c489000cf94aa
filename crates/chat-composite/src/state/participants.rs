use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::domain_models::ChatParticipant;

/// Typing indicators stay visible this long unless refreshed
pub const DEFAULT_TYPING_TIMEOUT_SECS: i64 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantsState {
    /// Participants by identifier
    pub participants: BTreeMap<String, ChatParticipant>,
    /// Last typing indicator per participant
    pub typing: BTreeMap<String, DateTime<Utc>>,
    /// Last read receipt per participant
    pub read_receipts: BTreeMap<String, DateTime<Utc>>,
    pub typing_indicator_timeout: Duration,
}

impl Default for ParticipantsState {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TYPING_TIMEOUT_SECS))
    }
}

impl ParticipantsState {
    pub fn new(typing_indicator_timeout: Duration) -> Self {
        Self {
            participants: BTreeMap::new(),
            typing: BTreeMap::new(),
            read_receipts: BTreeMap::new(),
            typing_indicator_timeout,
        }
    }

    pub fn display_name(&self, identifier: &str) -> Option<&str> {
        self.participants
            .get(identifier)
            .map(|participant| participant.display_name.as_str())
    }

    /// Typing participants, most recent first
    pub fn typing_participants(&self) -> Vec<&str> {
        let mut typing: Vec<(&String, &DateTime<Utc>)> = self.typing.iter().collect();
        typing.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        typing.into_iter().map(|(id, _)| id.as_str()).collect()
    }
}
