use crate::preferences::communication::state::CommunicationPreference;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CommunicationIntent {
    Load { fields: Vec<CommunicationPreference> },
    Close,
    /// Escape. With unsaved changes the first press only asks for
    /// confirmation; a second press (or a clean dialog) closes.
    RequestClose,
    MoveUp,
    MoveDown,
    Toggle,
}

impl Intent for CommunicationIntent {}
