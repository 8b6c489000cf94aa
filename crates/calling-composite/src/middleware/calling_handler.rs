//! Effects of the calling middleware
//!
//! Every request is decided on the store worker from the state snapshot taken
//! before the triggering action is reduced, then carried out in a task on the
//! runtime. Results come back as actions through the dispatcher.

use std::sync::Arc;
use std::time::Duration;

use composite_config::CallingOptions;
use composite_redux::Dispatcher;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::actions::{Action, CallingAction, ErrorAction, LocalUserAction, PermissionAction};
use crate::error::{CallCompositeInternalError, ServiceError};
use crate::middleware::CallingServiceListener;
use crate::service::CallingService;
use crate::state::{
    AppPermissionStatus, AppState, AudioOperationalStatus, CallingStatus,
    CameraOperationalStatus, CameraTransmissionStatus,
};

pub struct CallingMiddlewareHandler {
    service: Arc<dyn CallingService>,
    runtime: Handle,
    options: CallingOptions,
}

impl CallingMiddlewareHandler {
    pub fn new(service: Arc<dyn CallingService>, runtime: Handle, options: CallingOptions) -> Self {
        Self {
            service,
            runtime,
            options,
        }
    }

    pub fn setup_call(&self, state: &AppState, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let preview_camera = self.options.camera_on_by_default
            && state.permission.camera_permission == AppPermissionStatus::Granted
            && state.local_user.camera.operation == CameraOperationalStatus::Off
            && state.error.internal_error.is_none();
        let microphone_on = self.options.microphone_on_by_default;

        self.runtime.spawn(async move {
            match service.setup_call().await {
                Ok(()) => {
                    log::info!("CallingMiddleware: call set up");
                    if preview_camera {
                        dispatcher.dispatch(LocalUserAction::CameraPreviewOnTriggered.into());
                    }
                    if microphone_on {
                        dispatcher.dispatch(LocalUserAction::MicrophonePreviewOn.into());
                    }
                }
                Err(error) => {
                    report_error(&dispatcher, error, CallCompositeInternalError::CallJoinFailed)
                }
            }
        })
    }

    pub fn start_call(&self, state: &AppState, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let is_camera_preferred = state.local_user.camera.operation == CameraOperationalStatus::On;
        let is_audio_preferred = state.local_user.audio.operation == AudioOperationalStatus::On;
        let listener = CallingServiceListener::new(self.options.participant_update_throttle());

        self.runtime.spawn(async move {
            match service
                .start_call(is_camera_preferred, is_audio_preferred)
                .await
            {
                Ok(()) => {
                    log::info!("CallingMiddleware: call started");
                    let events = service.subscribe_events();
                    tokio::spawn(listener.run(events, dispatcher));
                }
                Err(error) => {
                    report_error(&dispatcher, error, CallCompositeInternalError::CallJoinFailed)
                }
            }
        })
    }

    pub fn end_call(&self, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match service.end_call().await {
                Ok(()) => dispatcher.dispatch(CallingAction::CallEnded.into()),
                Err(error) => {
                    report_error(&dispatcher, error, CallCompositeInternalError::CallEndFailed);
                    dispatcher.dispatch(CallingAction::RequestFailed.into());
                }
            }
        })
    }

    /// Hold a connected call and pause the outgoing video
    pub fn hold_call(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        if state.calling.status != CallingStatus::Connected {
            log::debug!("CallingMiddleware: hold ignored in {}", state.calling.status);
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let camera_on = state.local_user.camera.operation == CameraOperationalStatus::On;

        Some(self.runtime.spawn(async move {
            match service.hold_call().await {
                Ok(()) => {
                    if camera_on {
                        pause_camera(service.as_ref(), &dispatcher).await;
                    }
                }
                Err(error) => {
                    report_error(&dispatcher, error, CallCompositeInternalError::CallHoldFailed)
                }
            }
        }))
    }

    /// Resume a locally held call and bring back paused video
    pub fn resume_call(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        if state.calling.status != CallingStatus::LocalHold {
            log::debug!("CallingMiddleware: resume ignored in {}", state.calling.status);
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let camera_paused = state.local_user.camera.operation == CameraOperationalStatus::Paused;
        let settle_delay = self.options.camera_settle_delay();

        Some(self.runtime.spawn(async move {
            match service.resume_call().await {
                Ok(()) => {
                    if camera_paused {
                        start_camera(service.as_ref(), &dispatcher, settle_delay).await;
                    }
                }
                Err(error) => {
                    report_error(&dispatcher, error, CallCompositeInternalError::CallResumeFailed)
                }
            }
        }))
    }

    /// Stop sending video while the app is in the background
    pub fn enter_background(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        if state.calling.status != CallingStatus::Connected
            || state.local_user.camera.operation != CameraOperationalStatus::On
        {
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        Some(self.runtime.spawn(async move {
            pause_camera(service.as_ref(), &dispatcher).await;
        }))
    }

    /// Restart video paused by [`enter_background`](Self::enter_background)
    pub fn enter_foreground(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        let in_call = matches!(
            state.calling.status,
            CallingStatus::Connected | CallingStatus::LocalHold
        );
        if !in_call || state.local_user.camera.operation != CameraOperationalStatus::Paused {
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let settle_delay = self.options.camera_settle_delay();
        Some(self.runtime.spawn(async move {
            start_camera(service.as_ref(), &dispatcher, settle_delay).await;
        }))
    }

    /// Hang up before the host process goes away
    pub fn will_terminate(&self, state: &AppState, dispatcher: &Dispatcher<Action>) {
        if state.calling.status == CallingStatus::Connected {
            dispatcher.dispatch(CallingAction::CallEndRequested.into());
        }
    }

    /// Hold the call when the OS takes the audio session away
    pub fn audio_session_interrupted(&self, state: &AppState, dispatcher: &Dispatcher<Action>) {
        if state.calling.status == CallingStatus::Connected {
            dispatcher.dispatch(CallingAction::HoldRequested.into());
        }
    }

    pub fn request_camera_preview_on(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        if state.permission.camera_permission == AppPermissionStatus::NotAsked {
            dispatcher.dispatch(PermissionAction::CameraPermissionRequested.into());
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        Some(self.runtime.spawn(async move {
            let action = match service.request_camera_preview_on().await {
                Ok(video_stream_identifier) => LocalUserAction::CameraOnSucceeded {
                    video_stream_identifier,
                },
                Err(error) => LocalUserAction::CameraOnFailed { error },
            };
            dispatcher.dispatch(action.into());
        }))
    }

    pub fn request_camera_on(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> Option<JoinHandle<()>> {
        if state.permission.camera_permission == AppPermissionStatus::NotAsked {
            dispatcher.dispatch(PermissionAction::CameraPermissionRequested.into());
            return None;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let settle_delay = self.options.camera_settle_delay();
        Some(self.runtime.spawn(async move {
            start_camera(service.as_ref(), &dispatcher, settle_delay).await;
        }))
    }

    pub fn request_camera_off(&self, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let action = match service.stop_local_video_stream().await {
                Ok(()) => LocalUserAction::CameraOffSucceeded,
                Err(error) => LocalUserAction::CameraOffFailed { error },
            };
            dispatcher.dispatch(action.into());
        })
    }

    pub fn request_camera_switch(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher<Action>,
    ) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let previous_camera = state.local_user.camera.device;
        let settle_delay = self.options.camera_settle_delay();
        self.runtime.spawn(async move {
            let action = match service.switch_camera().await {
                Ok(camera_device) => {
                    tokio::time::sleep(settle_delay).await;
                    LocalUserAction::CameraSwitchSucceeded { camera_device }
                }
                Err(error) => LocalUserAction::CameraSwitchFailed {
                    previous_camera,
                    error,
                },
            };
            dispatcher.dispatch(action.into());
        })
    }

    /// Mute state is confirmed by the service event stream, only failures
    /// are reported from here
    pub fn request_microphone_mute(&self, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            if let Err(error) = service.mute_local_mic().await {
                dispatcher.dispatch(LocalUserAction::MicrophoneOffFailed { error }.into());
            }
        })
    }

    pub fn request_microphone_unmute(&self, dispatcher: &Dispatcher<Action>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            if let Err(error) = service.unmute_local_mic().await {
                dispatcher.dispatch(LocalUserAction::MicrophoneOnFailed { error }.into());
            }
        })
    }

    /// Retry the camera request that was waiting for the permission prompt
    pub fn on_camera_permission_granted(&self, state: &AppState, dispatcher: &Dispatcher<Action>) {
        if state.permission.camera_permission != AppPermissionStatus::Requesting {
            return;
        }

        let retry = match state.local_user.camera.transmission {
            CameraTransmissionStatus::Local => LocalUserAction::CameraPreviewOnTriggered,
            CameraTransmissionStatus::Remote => LocalUserAction::CameraOnTriggered,
        };
        dispatcher.dispatch(retry.into());
    }
}

async fn start_camera(
    service: &dyn CallingService,
    dispatcher: &Dispatcher<Action>,
    settle_delay: Duration,
) {
    let action = match service.start_local_video_stream().await {
        Ok(video_stream_identifier) => {
            tokio::time::sleep(settle_delay).await;
            LocalUserAction::CameraOnSucceeded {
                video_stream_identifier,
            }
        }
        Err(error) => LocalUserAction::CameraOnFailed { error },
    };
    dispatcher.dispatch(action.into());
}

async fn pause_camera(service: &dyn CallingService, dispatcher: &Dispatcher<Action>) {
    let action = match service.stop_local_video_stream().await {
        Ok(()) => LocalUserAction::CameraPausedSucceeded,
        Err(error) => LocalUserAction::CameraPausedFailed { error },
    };
    dispatcher.dispatch(action.into());
}

fn report_error(
    dispatcher: &Dispatcher<Action>,
    error: ServiceError,
    fallback: CallCompositeInternalError,
) {
    let internal_error = error.internal_or(fallback);
    log::warn!("CallingMiddleware: {} ({})", internal_error, error);
    dispatcher.dispatch(ErrorAction::classify(internal_error, Some(error)).into());
}
