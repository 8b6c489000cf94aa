use composite_redux::ViewModel;

use crate::state::AppState;

use super::set;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingParticipantsViewModel {
    /// `None` while nobody is typing
    pub label: Option<String>,
}

impl TypingParticipantsViewModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewModel<AppState> for TypingParticipantsViewModel {
    fn update(&mut self, state: &AppState) -> bool {
        let names: Vec<&str> = state
            .participants
            .typing_participants()
            .into_iter()
            .map(|id| state.participants.display_name(id).unwrap_or(id))
            .collect();
        set(&mut self.label, typing_label(&names))
    }
}

/// Two names at most, the rest collapsed into a count
fn typing_label(names: &[&str]) -> Option<String> {
    let label = match names {
        [] => return None,
        [name] => format!("{name} is typing"),
        [first, second] => format!("{first} and {second} are typing"),
        [first, second, rest @ ..] => {
            let others = rest.len();
            let plural = if others == 1 { "" } else { "s" };
            format!("{first}, {second} and {others} other{plural} are typing")
        }
    };
    Some(label)
}
