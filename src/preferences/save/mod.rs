//! Lifecycle of one "save preference" request as seen by the UI.

mod intent;
mod reducer;
mod state;

pub use intent::SaveIntent;
pub use reducer::SaveReducer;
pub use state::SaveState;
