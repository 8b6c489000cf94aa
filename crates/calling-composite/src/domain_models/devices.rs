use strum::Display;

/// Physical camera of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CameraDevice {
    #[default]
    Front,
    Back,
}

/// Audio route the call can be played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AudioDeviceType {
    Receiver,
    Speaker,
    Bluetooth,
    Headphones,
}
