/// OS audio session notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSessionAction {
    AudioInterrupted,
    AudioInterruptEnded,
    AudioEngaged,
}
