#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionAction {
    AudioPermissionRequested,
    AudioPermissionGranted,
    AudioPermissionDenied,
    AudioPermissionNotAsked,
    CameraPermissionRequested,
    CameraPermissionGranted,
    CameraPermissionDenied,
    CameraPermissionNotAsked,
}
