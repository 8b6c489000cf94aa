use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatParticipant {
    pub identifier: String,
    pub display_name: String,
}

impl ChatParticipant {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

/// A participant did something (typed, read) at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEventTimestamp {
    pub identifier: String,
    pub timestamp: DateTime<Utc>,
}
