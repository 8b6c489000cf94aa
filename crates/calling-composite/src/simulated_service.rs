//! Scripted calling service for the demo binary

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use calling_composite::domain_models::{CameraDevice, ParticipantInfo};
use calling_composite::state::CallingStatus;
use calling_composite::{CallingEvent, CallingService, ServiceError};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub struct SimulatedCallingService {
    events_tx: UnboundedSender<CallingEvent>,
    events_rx: Mutex<Option<UnboundedReceiver<CallingEvent>>>,
    camera: Mutex<CameraDevice>,
}

impl SimulatedCallingService {
    pub fn new() -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            events_tx,
            events_rx: Mutex::new(Some(events_rx)),
            camera: Mutex::new(CameraDevice::Front),
        }
    }

    fn emit(&self, event: CallingEvent) {
        if self.events_tx.send(event).is_err() {
            log::debug!("SimulatedCallingService: nobody listens anymore");
        }
    }

    fn call_info(&self, status: CallingStatus) {
        self.emit(CallingEvent::CallInfoUpdated {
            status,
            internal_error: None,
        });
    }
}

#[async_trait]
impl CallingService for SimulatedCallingService {
    async fn setup_call(&self) -> Result<(), ServiceError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(())
    }

    async fn start_call(
        &self,
        is_camera_preferred: bool,
        is_audio_preferred: bool,
    ) -> Result<(), ServiceError> {
        log::info!(
            "SimulatedCallingService: joining (camera: {}, audio: {})",
            is_camera_preferred,
            is_audio_preferred
        );
        self.call_info(CallingStatus::Connecting);

        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let guests = ["Ada", "Brendan", "Cleo"];
            tokio::time::sleep(Duration::from_millis(300)).await;
            let _ = events.send(CallingEvent::CallInfoUpdated {
                status: CallingStatus::Connected,
                internal_error: None,
            });
            for joined in 1..=guests.len() {
                tokio::time::sleep(Duration::from_millis(400)).await;
                let participants = guests[..joined]
                    .iter()
                    .map(|name| ParticipantInfo::new(name.to_lowercase(), *name))
                    .collect();
                let _ = events.send(CallingEvent::ParticipantsUpdated(participants));
            }
            let _ = events.send(CallingEvent::DominantSpeakersChanged(vec!["cleo".into()]));
            let _ = events.send(CallingEvent::RecordingChanged(true));
        });
        Ok(())
    }

    async fn end_call(&self) -> Result<(), ServiceError> {
        self.call_info(CallingStatus::Disconnecting);
        tokio::time::sleep(Duration::from_millis(100)).await;
        self.call_info(CallingStatus::Disconnected);
        Ok(())
    }

    async fn hold_call(&self) -> Result<(), ServiceError> {
        self.call_info(CallingStatus::LocalHold);
        Ok(())
    }

    async fn resume_call(&self) -> Result<(), ServiceError> {
        self.call_info(CallingStatus::Connected);
        Ok(())
    }

    async fn request_camera_preview_on(&self) -> Result<String, ServiceError> {
        Ok("local-preview".to_string())
    }

    async fn start_local_video_stream(&self) -> Result<String, ServiceError> {
        Ok("local-video".to_string())
    }

    async fn stop_local_video_stream(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn switch_camera(&self) -> Result<CameraDevice, ServiceError> {
        let mut camera = self
            .camera
            .lock()
            .map_err(|_| ServiceError::sdk(-1, "camera state poisoned"))?;
        *camera = match *camera {
            CameraDevice::Front => CameraDevice::Back,
            CameraDevice::Back => CameraDevice::Front,
        };
        Ok(*camera)
    }

    async fn mute_local_mic(&self) -> Result<(), ServiceError> {
        self.emit(CallingEvent::LocalMuteChanged(true));
        Ok(())
    }

    async fn unmute_local_mic(&self) -> Result<(), ServiceError> {
        self.emit(CallingEvent::LocalMuteChanged(false));
        Ok(())
    }

    fn subscribe_events(&self) -> UnboundedReceiver<CallingEvent> {
        match self.events_rx.lock().ok().and_then(|mut rx| rx.take()) {
            Some(rx) => rx,
            None => unbounded_channel().1,
        }
    }
}
