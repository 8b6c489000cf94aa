//! View models
//!
//! Every view-model implements [`ViewModel<AppState>`](composite_redux::ViewModel)
//! and is driven with [`composite_redux::bind_view_model`]. Intents are plain
//! methods taking a dispatcher.

pub mod calling_view_model;
pub mod control_bar_view_model;
pub mod error_info_view_model;
pub mod participant_grid_view_model;
pub mod setup_view_model;

pub use calling_view_model::{CallingViewModel, InfoBanner};
pub use control_bar_view_model::{ControlBarViewModel, ToggleButtonState};
pub use error_info_view_model::ErrorInfoViewModel;
pub use participant_grid_view_model::{ParticipantGridCell, ParticipantGridViewModel};
pub use setup_view_model::SetupViewModel;

/// Assign `value` to `field`, returning whether it was different
pub(crate) fn set<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}
