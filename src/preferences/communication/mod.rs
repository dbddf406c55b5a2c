//! Communication preferences dialog: a list of opt-in toggles.

mod intent;
mod reducer;
mod state;

pub use intent::CommunicationIntent;
pub use reducer::CommunicationReducer;
pub use state::{
    default_communication_preferences, CommunicationDialogState, CommunicationPreference,
    CommunicationTopic,
};
