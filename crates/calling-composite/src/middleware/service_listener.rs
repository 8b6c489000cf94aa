//! Service event listener
//!
//! Translates the calling service event stream into actions:
//! - boolean streams (recording, transcription, mute) only dispatch on change
//! - participant lists are throttled, keeping the latest list of a window
//! - call info ends the listener once the call failed or is over

use std::time::Duration;

use chrono::Utc;
use composite_redux::Dispatcher;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

use crate::actions::{
    Action, CallingAction, ErrorAction, LocalUserAction, RemoteParticipantsAction,
};
use crate::domain_models::ParticipantInfo;
use crate::service::CallingEvent;
use crate::state::CallingStatus;

pub struct CallingServiceListener {
    participant_throttle: Duration,
    last_participants_dispatch: Option<Instant>,
    pending_participants: Option<Vec<ParticipantInfo>>,
    is_recording_active: Option<bool>,
    is_transcription_active: Option<bool>,
    is_muted: Option<bool>,
}

impl CallingServiceListener {
    pub fn new(participant_throttle: Duration) -> Self {
        Self {
            participant_throttle,
            last_participants_dispatch: None,
            pending_participants: None,
            is_recording_active: None,
            is_transcription_active: None,
            is_muted: None,
        }
    }

    /// Listen until the stream closes or the call is over
    pub async fn run(
        mut self,
        mut events: UnboundedReceiver<CallingEvent>,
        dispatcher: Dispatcher<Action>,
    ) {
        loop {
            let flush_at = self.flush_deadline();

            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        log::debug!("CallingServiceListener: event stream closed");
                        break;
                    };
                    if self.handle_event(event, &dispatcher) {
                        break;
                    }
                }
                _ = sleep_until(flush_at.unwrap_or_else(Instant::now)), if flush_at.is_some() => {
                    if let Some(participants) = self.pending_participants.take() {
                        self.dispatch_participants(participants, &dispatcher);
                    }
                }
            }
        }
        self.flush(&dispatcher);
    }

    fn flush_deadline(&self) -> Option<Instant> {
        self.pending_participants.as_ref()?;
        self.last_participants_dispatch
            .map(|last| last + self.participant_throttle)
    }

    fn flush(&mut self, dispatcher: &Dispatcher<Action>) {
        if let Some(participants) = self.pending_participants.take() {
            self.dispatch_participants(participants, dispatcher);
        }
    }

    /// Returns true once no further events should be processed
    fn handle_event(&mut self, event: CallingEvent, dispatcher: &Dispatcher<Action>) -> bool {
        match event {
            CallingEvent::ParticipantsUpdated(participants) => {
                let window_open = self
                    .last_participants_dispatch
                    .is_none_or(|last| last.elapsed() >= self.participant_throttle);
                if window_open {
                    self.pending_participants = None;
                    self.dispatch_participants(participants, dispatcher);
                } else {
                    self.pending_participants = Some(participants);
                }
            }
            CallingEvent::DominantSpeakersChanged(speakers) => {
                dispatcher.dispatch(
                    RemoteParticipantsAction::DominantSpeakersUpdated {
                        speakers,
                        timestamp: Utc::now(),
                    }
                    .into(),
                );
            }
            CallingEvent::RecordingChanged(active) => {
                if changed(&mut self.is_recording_active, active) {
                    dispatcher.dispatch(
                        CallingAction::RecordingStateUpdated {
                            is_recording_active: active,
                        }
                        .into(),
                    );
                }
            }
            CallingEvent::TranscriptionChanged(active) => {
                if changed(&mut self.is_transcription_active, active) {
                    dispatcher.dispatch(
                        CallingAction::TranscriptionStateUpdated {
                            is_transcription_active: active,
                        }
                        .into(),
                    );
                }
            }
            CallingEvent::LocalMuteChanged(is_muted) => {
                if changed(&mut self.is_muted, is_muted) {
                    dispatcher.dispatch(
                        LocalUserAction::MicrophoneMuteStateUpdated { is_muted }.into(),
                    );
                }
            }
            CallingEvent::CallInfoUpdated {
                status,
                internal_error,
            } => {
                dispatcher.dispatch(CallingAction::StateUpdated { status }.into());

                if let Some(internal_error) = internal_error {
                    log::warn!("CallingServiceListener: call failed: {}", internal_error);
                    dispatcher.dispatch(ErrorAction::classify(internal_error, None).into());
                    return true;
                }
                if matches!(
                    status,
                    CallingStatus::Disconnected | CallingStatus::RemoteHold
                ) {
                    log::info!("CallingServiceListener: call over ({})", status);
                    dispatcher.dispatch(Action::CompositeExit);
                    return true;
                }
            }
        }
        false
    }

    fn dispatch_participants(
        &mut self,
        participants: Vec<ParticipantInfo>,
        dispatcher: &Dispatcher<Action>,
    ) {
        self.last_participants_dispatch = Some(Instant::now());
        dispatcher.dispatch(
            RemoteParticipantsAction::ParticipantListUpdated {
                participants,
                timestamp: Utc::now(),
            }
            .into(),
        );
    }
}

fn changed(last: &mut Option<bool>, value: bool) -> bool {
    if *last == Some(value) {
        return false;
    }
    *last = Some(value);
    true
}
