use super::intent::Intent;
use super::state::UiState;

/// Transforms a component's state in response to an intent.
///
/// Reducers are pure: `(State, Intent) -> State`. Side effects such as
/// scheduling timers or calling services belong to the owner of the state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
