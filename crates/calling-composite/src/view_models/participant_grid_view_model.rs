//! Participant Grid View Model
//!
//! Shows at most [`MAX_CELLS`] remote participants, dominant speakers first.
//! The grid is only rebuilt when one of the participant timestamps moved.

use chrono::{DateTime, Utc};
use composite_redux::ViewModel;

use crate::domain_models::ParticipantInfo;
use crate::state::AppState;

pub const MAX_CELLS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantGridCell {
    pub user_identifier: String,
    pub display_name: String,
    pub is_muted: bool,
    pub is_speaking: bool,
    /// Screen share wins over camera video
    pub video_stream_id: Option<String>,
}

impl From<&ParticipantInfo> for ParticipantGridCell {
    fn from(participant: &ParticipantInfo) -> Self {
        Self {
            user_identifier: participant.user_identifier.clone(),
            display_name: participant.display_name.clone(),
            is_muted: participant.is_muted,
            is_speaking: participant.is_speaking,
            video_stream_id: participant
                .screen_share_stream_id
                .clone()
                .or_else(|| participant.video_stream_id.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticipantGridViewModel {
    pub cells: Vec<ParticipantGridCell>,
    /// Participants in the call, including the ones without a cell
    pub participant_count: usize,
    last_update_timestamp: Option<DateTime<Utc>>,
    dominant_speakers_timestamp: Option<DateTime<Utc>>,
}

impl ParticipantGridViewModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewModel<AppState> for ParticipantGridViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let remote = &state.remote_participants;
        if self.last_update_timestamp == remote.last_update_timestamp
            && self.dominant_speakers_timestamp == remote.dominant_speakers_modified_timestamp
        {
            return false;
        }
        self.last_update_timestamp = remote.last_update_timestamp;
        self.dominant_speakers_timestamp = remote.dominant_speakers_modified_timestamp;

        let mut in_call: Vec<&ParticipantInfo> = remote
            .participants
            .iter()
            .filter(|participant| participant.is_in_call())
            .collect();
        // stable sort keeps list order among equally ranked participants
        in_call.sort_by_key(|participant| {
            remote
                .dominant_speakers
                .iter()
                .position(|id| *id == participant.user_identifier)
                .unwrap_or(usize::MAX)
        });

        let cells: Vec<ParticipantGridCell> = in_call
            .iter()
            .take(MAX_CELLS)
            .map(|participant| ParticipantGridCell::from(*participant))
            .collect();

        let mut changed = super::set(&mut self.participant_count, in_call.len());
        changed |= super::set(&mut self.cells, cells);
        changed
    }
}
