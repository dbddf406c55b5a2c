use crate::preferences::payment::SavedCard;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SavedCardsState {
    #[default]
    Hidden,
    Visible {
        cards: Vec<SavedCard>,
        /// Token of the card the payment preference points at.
        preferred_token_id: Option<String>,
        selected: usize,
        /// Token of the card whose removal is in flight. One at a time.
        removing: Option<String>,
    },
}

impl UiState for SavedCardsState {}

impl SavedCardsState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn cards(&self) -> &[SavedCard] {
        match self {
            Self::Visible { cards, .. } => cards,
            Self::Hidden => &[],
        }
    }

    pub fn selected_card(&self) -> Option<&SavedCard> {
        match self {
            Self::Visible {
                cards, selected, ..
            } => cards.get(*selected),
            Self::Hidden => None,
        }
    }

    pub fn is_preferred(&self, card: &SavedCard) -> bool {
        matches!(
            self,
            Self::Visible { preferred_token_id: Some(token), .. } if *token == card.token_id
        )
    }

    pub fn removing(&self) -> Option<&str> {
        match self {
            Self::Visible { removing, .. } => removing.as_deref(),
            Self::Hidden => None,
        }
    }
}
