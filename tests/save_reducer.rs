//! Save request lifecycle: submit, success, failure and retry.

use storefront::preferences::save::{SaveIntent, SaveReducer, SaveState};
use storefront::ui::mvi::Reducer;

fn failed(retryable: bool) -> SaveIntent {
    SaveIntent::Failed {
        message: "Account service unavailable: offline".to_string(),
        retryable,
    }
}

#[test]
fn submit_then_success() {
    let state = SaveReducer::reduce(SaveState::Idle, SaveIntent::Submit);
    assert_eq!(state, SaveState::Saving { attempt: 1 });
    assert!(state.is_busy());

    let state = SaveReducer::reduce(state, SaveIntent::Succeeded);
    assert_eq!(state, SaveState::Saved);
}

#[test]
fn submit_while_saving_is_ignored() {
    let saving = SaveState::Saving { attempt: 1 };
    assert_eq!(SaveReducer::reduce(saving.clone(), SaveIntent::Submit), saving);
}

#[test]
fn retryable_failure_can_be_retried() {
    let state = SaveReducer::reduce(SaveState::Saving { attempt: 1 }, failed(true));
    assert!(state.can_retry());
    assert_eq!(
        state.error_message(),
        Some("Account service unavailable: offline")
    );

    let state = SaveReducer::reduce(state, SaveIntent::Retry);
    assert_eq!(state, SaveState::Saving { attempt: 2 });
}

#[test]
fn permanent_failure_ignores_retry() {
    let state = SaveReducer::reduce(SaveState::Saving { attempt: 1 }, failed(false));
    assert!(!state.can_retry());
    assert_eq!(SaveReducer::reduce(state.clone(), SaveIntent::Retry), state);
}

#[test]
fn stale_results_do_not_change_idle_state() {
    assert_eq!(
        SaveReducer::reduce(SaveState::Idle, SaveIntent::Succeeded),
        SaveState::Idle
    );
    assert_eq!(SaveReducer::reduce(SaveState::Idle, failed(true)), SaveState::Idle);
}

#[test]
fn dismiss_resets_to_idle() {
    let state = SaveReducer::reduce(SaveState::Saving { attempt: 1 }, failed(true));
    assert_eq!(SaveReducer::reduce(state, SaveIntent::Dismiss), SaveState::Idle);
}
