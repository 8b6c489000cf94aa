//! Screen and overlay navigation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// The in-call screen was presented
    CallingViewLaunched,
    ParticipantsListShown,
    ParticipantsListHidden,
    AudioSelectionShown,
    AudioSelectionHidden,
    EndCallConfirmationShown,
    EndCallConfirmationHidden,
    MoreOptionsShown,
    MoreOptionsHidden,
}
