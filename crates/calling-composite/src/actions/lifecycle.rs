/// Host application lifecycle notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    ForegroundEntered,
    BackgroundEntered,
    WillTerminate,
}
