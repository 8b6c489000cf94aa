//! Store assembly
//!
//! Middleware order: logging sees every action, throttling drops repeated
//! user intents before any effect starts, the calling middleware runs last.

use std::sync::Arc;

use composite_config::CompositeConfig;
use composite_redux::{LoggingMiddleware, StoreError, ThrottleMiddleware};
use tokio::runtime::Handle;

use crate::actions::{Action, RemoteParticipantsAction};
use crate::middleware::{throttle_key, CallingMiddleware, CallingMiddlewareHandler};
use crate::reducers;
use crate::service::CallingService;
use crate::state::{AppState, ButtonViewDataState};

pub type CallingStore = composite_redux::Store<AppState, Action>;

/// Build the calling store
///
/// # Arguments
/// * `config` - display name, calling options and button overrides
/// * `service` - calling SDK facade used by the effects
/// * `runtime` - runtime the effects are spawned on
pub fn construct_store(
    config: &CompositeConfig,
    service: Arc<dyn CallingService>,
    runtime: Handle,
) -> Result<CallingStore, StoreError> {
    let handler = CallingMiddlewareHandler::new(service, runtime, config.calling.clone());
    let initial = AppState {
        button_view_data: ButtonViewDataState::from(&config.calling.buttons),
        ..AppState::new(&config.display_name)
    };

    CallingStore::builder(initial, reducers::reduce)
        .middleware(LoggingMiddleware::skipping(is_noisy))
        .middleware(ThrottleMiddleware::new(
            config.calling.action_throttle(),
            throttle_key,
        ))
        .middleware(CallingMiddleware::new(handler))
        .build()
}

/// Participant lists can be long and arrive often
fn is_noisy(action: &Action) -> bool {
    matches!(
        action,
        Action::RemoteParticipants(RemoteParticipantsAction::ParticipantListUpdated { .. })
    )
}
