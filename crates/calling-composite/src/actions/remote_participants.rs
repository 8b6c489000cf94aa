use chrono::{DateTime, Utc};

use crate::domain_models::ParticipantInfo;

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteParticipantsAction {
    ParticipantListUpdated {
        participants: Vec<ParticipantInfo>,
        timestamp: DateTime<Utc>,
    },
    DominantSpeakersUpdated {
        speakers: Vec<String>,
        timestamp: DateTime<Utc>,
    },
}
