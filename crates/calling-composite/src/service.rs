//! Calling service collaborator
//!
//! The composite never talks to a calling SDK directly. Everything it needs is
//! behind [`CallingService`], and everything the SDK reports arrives as a
//! stream of [`CallingEvent`]s.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain_models::{CameraDevice, ParticipantInfo};
use crate::error::{CallCompositeInternalError, ServiceError};
use crate::state::CallingStatus;

/// Notification pushed by the calling service while a call is running
#[derive(Debug, Clone, PartialEq)]
pub enum CallingEvent {
    ParticipantsUpdated(Vec<ParticipantInfo>),
    DominantSpeakersChanged(Vec<String>),
    CallInfoUpdated {
        status: CallingStatus,
        /// Reason the call ended or failed, if any
        internal_error: Option<CallCompositeInternalError>,
    },
    RecordingChanged(bool),
    TranscriptionChanged(bool),
    LocalMuteChanged(bool),
}

/// Calling SDK facade
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the middleware shares one instance
/// across all the effect tasks it spawns.
#[async_trait]
pub trait CallingService: Send + Sync {
    /// Prepare devices before joining
    async fn setup_call(&self) -> Result<(), ServiceError>;

    /// Join the call
    ///
    /// # Arguments
    /// * `is_camera_preferred` - send video right away
    /// * `is_audio_preferred` - join unmuted
    async fn start_call(
        &self,
        is_camera_preferred: bool,
        is_audio_preferred: bool,
    ) -> Result<(), ServiceError>;

    async fn end_call(&self) -> Result<(), ServiceError>;

    async fn hold_call(&self) -> Result<(), ServiceError>;

    async fn resume_call(&self) -> Result<(), ServiceError>;

    /// Start the camera for the local preview only
    ///
    /// # Returns
    /// Identifier of the local video stream
    async fn request_camera_preview_on(&self) -> Result<String, ServiceError>;

    /// Start the camera and send video into the call
    ///
    /// # Returns
    /// Identifier of the local video stream
    async fn start_local_video_stream(&self) -> Result<String, ServiceError>;

    async fn stop_local_video_stream(&self) -> Result<(), ServiceError>;

    /// Switch between front and back camera
    ///
    /// # Returns
    /// The camera now in use
    async fn switch_camera(&self) -> Result<CameraDevice, ServiceError>;

    async fn mute_local_mic(&self) -> Result<(), ServiceError>;

    async fn unmute_local_mic(&self) -> Result<(), ServiceError>;

    /// Stream of call events; closes when the call is torn down
    fn subscribe_events(&self) -> UnboundedReceiver<CallingEvent>;
}
