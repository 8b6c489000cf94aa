//! Calling View Model
//!
//! Root view-model of the in-call screen. Owns the control bar, participant
//! grid and error banner and adds the call-level fields: hold and lobby
//! overlays, the recording/transcription banner and the visible overlays.

use composite_redux::{Dispatcher, ViewModel};

use crate::actions::{Action, CallingAction, NavigationAction};
use crate::state::{AppState, CallingStatus, NavigationStatus};

use super::{set, ControlBarViewModel, ErrorInfoViewModel, ParticipantGridViewModel};

/// Compliance banner shown while the call is recorded or transcribed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoBanner {
    #[default]
    None,
    Recording,
    Transcription,
    RecordingAndTranscription,
}

impl InfoBanner {
    fn from_flags(is_recording_active: bool, is_transcription_active: bool) -> Self {
        match (is_recording_active, is_transcription_active) {
            (false, false) => Self::None,
            (true, false) => Self::Recording,
            (false, true) => Self::Transcription,
            (true, true) => Self::RecordingAndTranscription,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallingViewModel {
    pub control_bar: ControlBarViewModel,
    pub participant_grid: ParticipantGridViewModel,
    pub error_info: ErrorInfoViewModel,
    pub info_banner: InfoBanner,
    pub calling_status: CallingStatus,
    pub navigation_status: NavigationStatus,
    pub is_on_hold: bool,
    pub is_in_lobby: bool,
    pub is_participants_list_visible: bool,
    pub is_audio_selection_visible: bool,
    pub is_end_call_confirmation_visible: bool,
    pub is_more_options_visible: bool,
}

impl CallingViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-call screen was presented
    pub fn view_launched(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(NavigationAction::CallingViewLaunched.into());
    }

    pub fn confirm_end_call(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(NavigationAction::EndCallConfirmationHidden.into());
        dispatcher.dispatch(CallingAction::CallEndRequested.into());
    }

    pub fn cancel_end_call(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(NavigationAction::EndCallConfirmationHidden.into());
    }

    pub fn resume(&self, dispatcher: &Dispatcher<Action>) {
        if self.is_on_hold {
            dispatcher.dispatch(CallingAction::ResumeRequested.into());
        }
    }

    pub fn show_participants(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(NavigationAction::ParticipantsListShown.into());
    }

    pub fn hide_participants(&self, dispatcher: &Dispatcher<Action>) {
        dispatcher.dispatch(NavigationAction::ParticipantsListHidden.into());
    }
}

impl ViewModel<AppState> for CallingViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let calling = &state.calling;
        let navigation = &state.navigation;

        let mut changed = self.control_bar.update(state);
        changed |= self.participant_grid.update(state);
        changed |= self.error_info.update(state);
        changed |= set(
            &mut self.info_banner,
            InfoBanner::from_flags(calling.is_recording_active, calling.is_transcription_active),
        );
        changed |= set(&mut self.calling_status, calling.status);
        changed |= set(&mut self.navigation_status, navigation.status);
        changed |= set(
            &mut self.is_on_hold,
            calling.status == CallingStatus::LocalHold,
        );
        changed |= set(&mut self.is_in_lobby, calling.status == CallingStatus::InLobby);
        changed |= set(
            &mut self.is_participants_list_visible,
            navigation.participants_visible,
        );
        changed |= set(
            &mut self.is_audio_selection_visible,
            navigation.audio_selection_visible,
        );
        changed |= set(
            &mut self.is_end_call_confirmation_visible,
            navigation.end_call_confirmation_visible,
        );
        changed |= set(
            &mut self.is_more_options_visible,
            navigation.more_options_visible,
        );
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::RemoteParticipantsAction;
    use crate::domain_models::ParticipantInfo;
    use crate::reducers::reduce;
    use crate::test_support::dispatched_by;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_unchanged_state_reports_no_change() {
        let mut view_model = CallingViewModel::new();
        let state = AppState::default();

        view_model.update(&state);
        assert!(!view_model.update(&state));
    }

    #[test]
    fn test_banner_follows_recording_and_transcription() {
        let mut view_model = CallingViewModel::new();
        let mut state = AppState::default();
        state.calling.is_recording_active = true;

        assert!(view_model.update(&state));
        assert_eq!(view_model.info_banner, InfoBanner::Recording);

        state.calling.is_transcription_active = true;
        view_model.update(&state);
        assert_eq!(view_model.info_banner, InfoBanner::RecordingAndTranscription);
    }

    #[test]
    fn test_two_participant_updates_refresh_the_grid_twice() {
        let t1 = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let mut view_model = CallingViewModel::new();
        let mut state = AppState::default();
        view_model.update(&state);

        let mut refreshes = 0;
        for (i, timestamp) in [t1, t1 + Duration::seconds(1)].into_iter().enumerate() {
            let participants = (0..=i)
                .map(|n| ParticipantInfo::new(format!("p{n}"), "Guest"))
                .collect();
            state = reduce(
                state,
                &Action::from(RemoteParticipantsAction::ParticipantListUpdated {
                    participants,
                    timestamp,
                }),
            );
            if view_model.update(&state) {
                refreshes += 1;
            }
        }

        assert_eq!(refreshes, 2);
        assert_eq!(view_model.participant_grid.cells.len(), 2);
    }

    #[tokio::test]
    async fn test_confirm_end_call() {
        let view_model = CallingViewModel::new();
        let actions = dispatched_by(|d| view_model.confirm_end_call(d)).await;
        assert_eq!(
            actions,
            vec![
                Action::from(NavigationAction::EndCallConfirmationHidden),
                Action::from(CallingAction::CallEndRequested),
            ]
        );
    }

    #[tokio::test]
    async fn test_resume_only_when_on_hold() {
        let mut view_model = CallingViewModel::new();
        assert!(dispatched_by(|d| view_model.resume(d)).await.is_empty());

        let mut state = AppState::default();
        state.calling.status = CallingStatus::LocalHold;
        view_model.update(&state);
        assert_eq!(
            dispatched_by(|d| view_model.resume(d)).await,
            vec![Action::from(CallingAction::ResumeRequested)]
        );
    }
}
