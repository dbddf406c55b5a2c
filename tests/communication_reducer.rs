//! Communication preferences dialog.

use storefront::preferences::communication::{
    default_communication_preferences, CommunicationDialogState, CommunicationIntent,
    CommunicationReducer,
};
use storefront::ui::mvi::Reducer;

fn loaded() -> CommunicationDialogState {
    CommunicationReducer::reduce(
        CommunicationDialogState::Hidden,
        CommunicationIntent::Load {
            fields: default_communication_preferences(),
        },
    )
}

fn focused(state: &CommunicationDialogState) -> usize {
    match state {
        CommunicationDialogState::Visible { focused, .. } => *focused,
        CommunicationDialogState::Hidden => panic!("dialog should be visible"),
    }
}

#[test]
fn load_opens_clean_dialog() {
    let state = loaded();
    assert!(state.is_visible());
    assert!(!state.is_dirty());
    assert_eq!(state.fields().len(), default_communication_preferences().len());
    assert_eq!(focused(&state), 0);
}

#[test]
fn toggle_flips_focused_field_and_marks_dirty() {
    let before = loaded().fields()[1].enabled;
    let state = CommunicationReducer::reduce(loaded(), CommunicationIntent::MoveDown);
    let state = CommunicationReducer::reduce(state, CommunicationIntent::Toggle);
    assert!(state.is_dirty());
    assert_eq!(state.fields()[1].enabled, !before);
}

#[test]
fn focus_wraps_in_both_directions() {
    let last = default_communication_preferences().len() - 1;
    let state = CommunicationReducer::reduce(loaded(), CommunicationIntent::MoveUp);
    assert_eq!(focused(&state), last);
    let state = CommunicationReducer::reduce(state, CommunicationIntent::MoveDown);
    assert_eq!(focused(&state), 0);
}

#[test]
fn clean_dialog_closes_on_first_escape() {
    let state = CommunicationReducer::reduce(loaded(), CommunicationIntent::RequestClose);
    assert!(!state.is_visible());
}

#[test]
fn dirty_dialog_asks_before_discarding() {
    let state = CommunicationReducer::reduce(loaded(), CommunicationIntent::Toggle);
    let state = CommunicationReducer::reduce(state, CommunicationIntent::RequestClose);
    assert!(matches!(
        state,
        CommunicationDialogState::Visible {
            confirm_discard: true,
            ..
        }
    ));

    let state = CommunicationReducer::reduce(state, CommunicationIntent::RequestClose);
    assert!(!state.is_visible());
}

#[test]
fn moving_cancels_discard_confirmation() {
    let state = CommunicationReducer::reduce(loaded(), CommunicationIntent::Toggle);
    let state = CommunicationReducer::reduce(state, CommunicationIntent::RequestClose);
    let state = CommunicationReducer::reduce(state, CommunicationIntent::MoveDown);
    assert!(matches!(
        state,
        CommunicationDialogState::Visible {
            confirm_discard: false,
            ..
        }
    ));
    assert!(state.is_dirty());
}

#[test]
fn toggling_back_to_loaded_value_is_clean() {
    let state = CommunicationReducer::reduce(loaded(), CommunicationIntent::Toggle);
    assert!(state.is_dirty());
    let state = CommunicationReducer::reduce(state, CommunicationIntent::Toggle);
    assert!(!state.is_dirty());

    let state = CommunicationReducer::reduce(state, CommunicationIntent::RequestClose);
    assert!(!state.is_visible());
}
