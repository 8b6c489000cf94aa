//! Value types shared between service, state and view-models

mod devices;
mod participant;

pub use devices::{AudioDeviceType, CameraDevice};
pub use participant::{ParticipantInfo, ParticipantStatus};
