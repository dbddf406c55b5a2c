use crate::preferences::payment::SavedCard;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SavedCardsIntent {
    Load {
        cards: Vec<SavedCard>,
        preferred_token_id: Option<String>,
    },
    Close,
    MoveUp,
    MoveDown,
    /// A removal request for `token_id` was sent to the service.
    RemoveStarted { token_id: String },
    Removed { token_id: String },
    RemoveFailed,
}

impl Intent for SavedCardsIntent {}
