/// Marker trait for intents.
///
/// An intent is either a user command (arrow key, "load more", toggle) or a
/// system event (timer tick, service response) addressed to one component.
pub trait Intent: Send + 'static {}
