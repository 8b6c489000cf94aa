use composite_redux::{Context, Middleware, Next};

use crate::actions::{
    Action, AudioSessionAction, CallingAction, LifecycleAction, LocalUserAction, PermissionAction,
};
use crate::middleware::CallingMiddlewareHandler;
use crate::state::AppState;

/// Routes calling-related actions to the handler, then passes them on
pub struct CallingMiddleware {
    handler: CallingMiddlewareHandler,
}

impl CallingMiddleware {
    pub fn new(handler: CallingMiddlewareHandler) -> Self {
        Self { handler }
    }
}

impl Middleware<AppState, Action> for CallingMiddleware {
    fn handle(
        &mut self,
        action: Action,
        ctx: &Context<'_, AppState, Action>,
        next: Next<'_, AppState, Action>,
    ) {
        let state = ctx.state();
        let dispatcher = ctx.dispatcher();
        let handler = &self.handler;

        match &action {
            Action::Calling(CallingAction::SetupCall) => {
                handler.setup_call(&state, &dispatcher);
            }
            Action::Calling(CallingAction::CallStartRequested) => {
                handler.start_call(&state, &dispatcher);
            }
            Action::Calling(CallingAction::CallEndRequested) => {
                handler.end_call(&dispatcher);
            }
            Action::Calling(CallingAction::HoldRequested) => {
                handler.hold_call(&state, &dispatcher);
            }
            Action::Calling(CallingAction::ResumeRequested) => {
                handler.resume_call(&state, &dispatcher);
            }
            Action::Lifecycle(LifecycleAction::BackgroundEntered) => {
                handler.enter_background(&state, &dispatcher);
            }
            Action::Lifecycle(LifecycleAction::ForegroundEntered) => {
                handler.enter_foreground(&state, &dispatcher);
            }
            Action::Lifecycle(LifecycleAction::WillTerminate) => {
                handler.will_terminate(&state, &dispatcher);
            }
            Action::AudioSession(AudioSessionAction::AudioInterrupted) => {
                handler.audio_session_interrupted(&state, &dispatcher);
            }
            Action::LocalUser(LocalUserAction::CameraPreviewOnTriggered) => {
                handler.request_camera_preview_on(&state, &dispatcher);
            }
            Action::LocalUser(LocalUserAction::CameraOnTriggered) => {
                handler.request_camera_on(&state, &dispatcher);
            }
            Action::LocalUser(LocalUserAction::CameraOffTriggered) => {
                handler.request_camera_off(&dispatcher);
            }
            Action::LocalUser(LocalUserAction::CameraSwitchTriggered) => {
                handler.request_camera_switch(&state, &dispatcher);
            }
            Action::LocalUser(LocalUserAction::MicrophoneOffTriggered) => {
                handler.request_microphone_mute(&dispatcher);
            }
            Action::LocalUser(LocalUserAction::MicrophoneOnTriggered) => {
                handler.request_microphone_unmute(&dispatcher);
            }
            Action::Permission(PermissionAction::CameraPermissionGranted) => {
                handler.on_camera_permission_granted(&state, &dispatcher);
            }
            _ => {}
        }

        next.run(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::actions::ErrorAction;
    use crate::error::{CallCompositeInternalError, ServiceError};
    use crate::service::mock::MockCallingService;
    use crate::state::{CallingStatus, CameraOperationalStatus};
    use crate::test_support::recorder;
    use composite_config::CallingOptions;
    use composite_redux::Store;
    use std::sync::Arc;
    use std::time::Duration;

    fn options() -> CallingOptions {
        CallingOptions {
            camera_settle_delay_ms: 0,
            participant_update_throttle_ms: 0,
            ..CallingOptions::default()
        }
    }

    fn handler(service: &Arc<MockCallingService>) -> CallingMiddlewareHandler {
        CallingMiddlewareHandler::new(
            service.clone(),
            tokio::runtime::Handle::current(),
            options(),
        )
    }

    async fn recorded(store: &Store<Vec<Action>, Action>, count: usize) -> Vec<Action> {
        let mut subscription = store.subscribe();
        let state = tokio::time::timeout(
            Duration::from_secs(5),
            subscription.wait_for(|actions| actions.len() >= count),
        )
        .await
        .unwrap()
        .unwrap();
        state.as_ref().clone()
    }

    fn connected() -> AppState {
        let mut state = AppState::new("Me");
        state.calling.status = CallingStatus::Connected;
        state
    }

    #[tokio::test]
    async fn test_camera_on_reports_stream_identifier() {
        let service = MockCallingService::new();
        let store = recorder();

        handler(&service)
            .request_camera_on(&AppState::default(), store.dispatcher())
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            recorded(&store, 1).await,
            vec![Action::from(LocalUserAction::CameraOnSucceeded {
                video_stream_identifier: "vs1".into()
            })]
        );
        assert_eq!(service.calls(), vec!["start_local_video_stream"]);
    }

    #[tokio::test]
    async fn test_camera_on_without_permission_asks_for_it() {
        let service = MockCallingService::new();
        let store = recorder();
        let mut state = AppState::default();
        state.permission.camera_permission = crate::state::AppPermissionStatus::NotAsked;

        assert!(handler(&service)
            .request_camera_on(&state, store.dispatcher())
            .is_none());

        assert_eq!(
            recorded(&store, 1).await,
            vec![Action::from(PermissionAction::CameraPermissionRequested)]
        );
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_camera_failure_becomes_failure_action() {
        let service = MockCallingService::new();
        let error = ServiceError::sdk(7, "camera in use");
        service.fail("start_local_video_stream", error.clone());
        let store = recorder();

        handler(&service)
            .request_camera_on(&AppState::default(), store.dispatcher())
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            recorded(&store, 1).await,
            vec![Action::from(LocalUserAction::CameraOnFailed { error })]
        );
    }

    #[tokio::test]
    async fn test_start_call_failure_is_fatal_join_error() {
        let service = MockCallingService::new();
        let error = ServiceError::sdk(500, "join failed");
        service.fail("start_call", error.clone());
        let store = recorder();

        handler(&service)
            .start_call(&AppState::default(), store.dispatcher())
            .await
            .unwrap();

        assert_eq!(
            recorded(&store, 1).await,
            vec![Action::from(ErrorAction::FatalErrorUpdated {
                internal_error: CallCompositeInternalError::CallJoinFailed,
                error: Some(error),
            })]
        );
    }

    #[tokio::test]
    async fn test_end_call_failure_reports_request_failed() {
        let service = MockCallingService::new();
        service.fail("end_call", ServiceError::sdk(1, "nope"));
        let store = recorder();

        handler(&service).end_call(store.dispatcher()).await.unwrap();

        let actions = recorded(&store, 2).await;
        assert!(matches!(
            actions[0],
            Action::Error(ErrorAction::FatalErrorUpdated {
                internal_error: CallCompositeInternalError::CallEndFailed,
                ..
            })
        ));
        assert_eq!(actions[1], Action::from(CallingAction::RequestFailed));
    }

    #[tokio::test]
    async fn test_hold_only_when_connected() {
        let service = MockCallingService::new();
        let store = recorder();

        assert!(handler(&service)
            .hold_call(&AppState::default(), store.dispatcher())
            .is_none());
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_hold_pauses_camera() {
        let service = MockCallingService::new();
        let store = recorder();
        let mut state = connected();
        state.local_user.camera.operation = CameraOperationalStatus::On;

        handler(&service)
            .hold_call(&state, store.dispatcher())
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            recorded(&store, 1).await,
            vec![Action::from(LocalUserAction::CameraPausedSucceeded)]
        );
        assert_eq!(service.calls(), vec!["hold_call", "stop_local_video_stream"]);
    }

    #[tokio::test]
    async fn test_resume_restarts_paused_camera() {
        let service = MockCallingService::new();
        let store = recorder();
        let mut state = AppState::default();
        state.calling.status = CallingStatus::LocalHold;
        state.local_user.camera.operation = CameraOperationalStatus::Paused;

        handler(&service)
            .resume_call(&state, store.dispatcher())
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            service.calls(),
            vec!["resume_call", "start_local_video_stream"]
        );
        assert_eq!(recorded(&store, 1).await.len(), 1);
    }

    #[tokio::test]
    async fn test_background_only_pauses_running_camera() {
        let service = MockCallingService::new();
        let store = recorder();

        assert!(handler(&service)
            .enter_background(&connected(), store.dispatcher())
            .is_none());

        let mut state = connected();
        state.local_user.camera.operation = CameraOperationalStatus::On;
        handler(&service)
            .enter_background(&state, store.dispatcher())
            .unwrap()
            .await
            .unwrap();
        assert_eq!(service.calls(), vec!["stop_local_video_stream"]);
    }

    #[tokio::test]
    async fn test_audio_interruption_holds_connected_call() {
        let service = MockCallingService::new();
        let store = recorder();

        handler(&service).audio_session_interrupted(&connected(), store.dispatcher());

        assert_eq!(
            recorded(&store, 1).await,
            vec![Action::from(CallingAction::HoldRequested)]
        );
    }

    #[tokio::test]
    async fn test_permission_granted_retries_pending_camera_request() {
        let service = MockCallingService::new();
        let store = recorder();
        let mut state = AppState::default();
        state.permission.camera_permission = crate::state::AppPermissionStatus::Requesting;
        state.local_user.camera.transmission = crate::state::CameraTransmissionStatus::Remote;

        handler(&service).on_camera_permission_granted(&state, store.dispatcher());
        handler(&service).on_camera_permission_granted(&AppState::default(), store.dispatcher());

        assert_eq!(
            recorded(&store, 1).await,
            vec![Action::from(LocalUserAction::CameraOnTriggered)]
        );
    }

    #[tokio::test]
    async fn test_camera_on_triggered_reaches_state() {
        let service = MockCallingService::new();
        let store = Store::builder(AppState::new("Me"), crate::reducers::reduce)
            .middleware(CallingMiddleware::new(handler(&service)))
            .build()
            .unwrap();
        let mut subscription = store.subscribe();

        store.dispatch(LocalUserAction::CameraOnTriggered.into());

        let state = tokio::time::timeout(
            Duration::from_secs(5),
            subscription.wait_for(|state| {
                state.local_user.camera.operation == CameraOperationalStatus::On
            }),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(
            state.local_user.local_video_stream_identifier.as_deref(),
            Some("vs1")
        );
    }
}
