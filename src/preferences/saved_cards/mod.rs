//! Saved cards list: browse tokenised cards, edit one as the preferred
//! card, or remove it.

mod intent;
mod reducer;
mod state;

pub use intent::SavedCardsIntent;
pub use reducer::SavedCardsReducer;
pub use state::SavedCardsState;
