use chrono::{DateTime, Utc};

use crate::domain_models::ParticipantInfo;

/// Remote participants of the call
///
/// Timestamps are taken from the action payloads, so views can tell whether
/// the list changed without diffing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteParticipantsState {
    pub participants: Vec<ParticipantInfo>,
    pub last_update_timestamp: Option<DateTime<Utc>>,
    /// Identifiers of the current dominant speakers, most dominant first
    pub dominant_speakers: Vec<String>,
    pub dominant_speakers_modified_timestamp: Option<DateTime<Utc>>,
}
