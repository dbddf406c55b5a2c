use crate::preferences::save::intent::SaveIntent;
use crate::preferences::save::state::SaveState;
use crate::ui::mvi::Reducer;

pub struct SaveReducer;

impl Reducer for SaveReducer {
    type State = SaveState;
    type Intent = SaveIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (busy @ SaveState::Saving { .. }, SaveIntent::Submit) => busy,
            (_, SaveIntent::Submit) => SaveState::Saving { attempt: 1 },

            (SaveState::Saving { .. }, SaveIntent::Succeeded) => SaveState::Saved,

            (SaveState::Saving { attempt }, SaveIntent::Failed { message, retryable }) => {
                SaveState::Failed {
                    error: message,
                    retryable,
                    attempt,
                }
            }

            (
                SaveState::Failed {
                    retryable: true,
                    attempt,
                    ..
                },
                SaveIntent::Retry,
            ) => SaveState::Saving {
                attempt: attempt.saturating_add(1),
            },

            (_, SaveIntent::Dismiss) => SaveState::Idle,

            // Late responses and retries of non-retryable failures.
            (other, _) => other,
        }
    }
}
