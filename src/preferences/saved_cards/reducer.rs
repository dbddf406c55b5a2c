use crate::preferences::saved_cards::intent::SavedCardsIntent;
use crate::preferences::saved_cards::state::SavedCardsState;
use crate::ui::mvi::Reducer;

pub struct SavedCardsReducer;

impl Reducer for SavedCardsReducer {
    type State = SavedCardsState;
    type Intent = SavedCardsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SavedCardsState::Visible {
            mut cards,
            mut preferred_token_id,
            mut selected,
            mut removing,
        } = state
        else {
            return match intent {
                SavedCardsIntent::Load {
                    cards,
                    preferred_token_id,
                } => SavedCardsState::Visible {
                    cards,
                    preferred_token_id,
                    selected: 0,
                    removing: None,
                },
                _ => SavedCardsState::Hidden,
            };
        };

        match intent {
            SavedCardsIntent::Load {
                cards: loaded,
                preferred_token_id: preferred,
            } => {
                cards = loaded;
                preferred_token_id = preferred;
                selected = 0;
                removing = None;
            }
            SavedCardsIntent::Close => return SavedCardsState::Hidden,
            SavedCardsIntent::MoveUp => {
                selected = match selected {
                    0 => cards.len().saturating_sub(1),
                    n => n - 1,
                };
            }
            SavedCardsIntent::MoveDown => {
                selected = if selected + 1 >= cards.len() {
                    0
                } else {
                    selected + 1
                };
            }
            SavedCardsIntent::RemoveStarted { token_id } => {
                if removing.is_none() && cards.iter().any(|c| c.token_id == token_id) {
                    removing = Some(token_id);
                }
            }
            SavedCardsIntent::Removed { token_id } => {
                cards.retain(|c| c.token_id != token_id);
                if preferred_token_id.as_deref() == Some(token_id.as_str()) {
                    preferred_token_id = None;
                }
                if removing.as_deref() == Some(token_id.as_str()) {
                    removing = None;
                }
                selected = selected.min(cards.len().saturating_sub(1));
            }
            SavedCardsIntent::RemoveFailed => removing = None,
        }

        SavedCardsState::Visible {
            cards,
            preferred_token_id,
            selected,
            removing,
        }
    }
}
