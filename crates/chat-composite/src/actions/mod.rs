//! Actions module

pub mod chat;
pub mod error;
pub mod lifecycle;
pub mod participants;
pub mod repository;

pub use chat::ChatAction;
pub use error::ErrorAction;
pub use lifecycle::LifecycleAction;
pub use participants::ParticipantsAction;
pub use repository::RepositoryAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Chat(ChatAction),
    Repository(RepositoryAction),
    Participants(ParticipantsAction),
    Lifecycle(LifecycleAction),
    Error(ErrorAction),
    /// Leave the composite; the store stops after reducing it
    CompositeExit,
}

impl composite_redux::Action for Action {
    fn is_terminal(&self) -> bool {
        matches!(self, Action::CompositeExit)
    }
}

impl From<ChatAction> for Action {
    fn from(action: ChatAction) -> Self {
        Action::Chat(action)
    }
}

impl From<RepositoryAction> for Action {
    fn from(action: RepositoryAction) -> Self {
        Action::Repository(action)
    }
}

impl From<ParticipantsAction> for Action {
    fn from(action: ParticipantsAction) -> Self {
        Action::Participants(action)
    }
}

impl From<LifecycleAction> for Action {
    fn from(action: LifecycleAction) -> Self {
        Action::Lifecycle(action)
    }
}

impl From<ErrorAction> for Action {
    fn from(action: ErrorAction) -> Self {
        Action::Error(action)
    }
}
