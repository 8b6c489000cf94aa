//! Local user state: camera, microphone and audio route

use strum::Display;

use crate::domain_models::{AudioDeviceType, CameraDevice};
use crate::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CameraOperationalStatus {
    On,
    #[default]
    Off,
    Paused,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CameraDeviceSelectionStatus {
    #[default]
    Front,
    Back,
    Switching,
}

impl From<CameraDevice> for CameraDeviceSelectionStatus {
    fn from(device: CameraDevice) -> Self {
        match device {
            CameraDevice::Front => Self::Front,
            CameraDevice::Back => Self::Back,
        }
    }
}

/// Whether video goes to the preview only or into the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CameraTransmissionStatus {
    #[default]
    Local,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AudioOperationalStatus {
    On,
    #[default]
    Off,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AudioDeviceSelectionStatus {
    SpeakerSelected,
    SpeakerRequested,
    #[default]
    ReceiverSelected,
    ReceiverRequested,
    BluetoothSelected,
    BluetoothRequested,
    HeadphonesSelected,
    HeadphonesRequested,
}

impl AudioDeviceSelectionStatus {
    pub fn requested(device: AudioDeviceType) -> Self {
        match device {
            AudioDeviceType::Speaker => Self::SpeakerRequested,
            AudioDeviceType::Receiver => Self::ReceiverRequested,
            AudioDeviceType::Bluetooth => Self::BluetoothRequested,
            AudioDeviceType::Headphones => Self::HeadphonesRequested,
        }
    }

    pub fn selected(device: AudioDeviceType) -> Self {
        match device {
            AudioDeviceType::Speaker => Self::SpeakerSelected,
            AudioDeviceType::Receiver => Self::ReceiverSelected,
            AudioDeviceType::Bluetooth => Self::BluetoothSelected,
            AudioDeviceType::Headphones => Self::HeadphonesSelected,
        }
    }

    /// Device currently routed, `None` while a change is in flight
    pub fn selected_device(&self) -> Option<AudioDeviceType> {
        match self {
            Self::SpeakerSelected => Some(AudioDeviceType::Speaker),
            Self::ReceiverSelected => Some(AudioDeviceType::Receiver),
            Self::BluetoothSelected => Some(AudioDeviceType::Bluetooth),
            Self::HeadphonesSelected => Some(AudioDeviceType::Headphones),
            Self::SpeakerRequested
            | Self::ReceiverRequested
            | Self::BluetoothRequested
            | Self::HeadphonesRequested => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraState {
    pub operation: CameraOperationalStatus,
    pub device: CameraDeviceSelectionStatus,
    pub transmission: CameraTransmissionStatus,
    pub error: Option<ServiceError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioState {
    pub operation: AudioOperationalStatus,
    pub device: AudioDeviceSelectionStatus,
    pub error: Option<ServiceError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalUserState {
    pub camera: CameraState,
    pub audio: AudioState,
    pub display_name: Option<String>,
    pub local_video_stream_identifier: Option<String>,
}
