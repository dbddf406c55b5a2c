/// Marker trait for component state.
///
/// `Default` is the state a component is in before it is mounted.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
