use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use calling_composite::actions::{
    Action, CallingAction, LocalUserAction, NavigationAction, PermissionAction,
};
use calling_composite::view_models::CallingViewModel;
use calling_composite::{construct_store, logger};
use composite_config::CompositeConfig;
use composite_redux::{bind_view_model, Dispatcher};
use tokio::runtime::Handle;

mod simulated_service;

use simulated_service::SimulatedCallingService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = CompositeConfig::load();
    let log_file = logger::init(&config)?;

    log::info!("Starting calling composite, logging to {}", log_file.display());

    let service = Arc::new(SimulatedCallingService::new());
    let store = construct_store(&config, service, Handle::current())?;
    let dispatcher = store.dispatcher().clone();

    let subscription = store.subscribe();
    let ui = tokio::spawn(async move {
        let mut view_model = CallingViewModel::new();
        bind_view_model(subscription, &mut view_model, render).await;
    });

    run_script(&dispatcher).await;

    match tokio::time::timeout(Duration::from_secs(30), ui).await {
        Ok(joined) => joined?,
        Err(_) => log::warn!("Call did not end in time"),
    }
    store.shutdown();

    log::info!("Exiting calling composite");
    Ok(())
}

/// Host side of the demo: what a UI would dispatch over the call
async fn run_script(dispatcher: &Dispatcher<Action>) {
    let pause = |ms| tokio::time::sleep(Duration::from_millis(ms));

    dispatcher.dispatch(PermissionAction::AudioPermissionGranted.into());
    dispatcher.dispatch(PermissionAction::CameraPermissionGranted.into());
    dispatcher.dispatch(CallingAction::SetupCall.into());
    dispatcher.dispatch(LocalUserAction::MicrophonePreviewOn.into());
    pause(300).await;

    dispatcher.dispatch(CallingAction::CallStartRequested.into());
    dispatcher.dispatch(NavigationAction::CallingViewLaunched.into());
    pause(600).await;

    dispatcher.dispatch(LocalUserAction::CameraOnTriggered.into());
    pause(1500).await;

    dispatcher.dispatch(LocalUserAction::CameraSwitchTriggered.into());
    dispatcher.dispatch(LocalUserAction::MicrophoneOffTriggered.into());
    pause(1500).await;

    dispatcher.dispatch(NavigationAction::EndCallConfirmationShown.into());
    dispatcher.dispatch(NavigationAction::EndCallConfirmationHidden.into());
    dispatcher.dispatch(CallingAction::CallEndRequested.into());
}

fn render(view_model: &CallingViewModel) {
    let names: Vec<&str> = view_model
        .participant_grid
        .cells
        .iter()
        .map(|cell| cell.display_name.as_str())
        .collect();

    println!(
        "[{:>6}] call: {:<12} camera: {:<8} mic: {:<8} banner: {:<9} participants: {}",
        view_model.navigation_status.to_string(),
        view_model.calling_status.to_string(),
        format!("{:?}", view_model.control_bar.camera_button),
        format!("{:?}", view_model.control_bar.microphone_button),
        format!("{:?}", view_model.info_banner),
        names.join(", "),
    );
    if view_model.error_info.is_displayed {
        println!("         error: {}", view_model.error_info.title);
    }
}
