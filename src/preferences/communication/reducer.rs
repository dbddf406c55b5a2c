use crate::preferences::communication::intent::CommunicationIntent;
use crate::preferences::communication::state::CommunicationDialogState;
use crate::ui::mvi::Reducer;

pub struct CommunicationReducer;

impl Reducer for CommunicationReducer {
    type State = CommunicationDialogState;
    type Intent = CommunicationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommunicationIntent::Load { fields } => CommunicationDialogState::Visible {
                loaded: fields.clone(),
                fields,
                focused: 0,
                confirm_discard: false,
            },
            CommunicationIntent::Close => CommunicationDialogState::Hidden,
            CommunicationIntent::RequestClose => {
                let ask = state.is_dirty()
                    && matches!(
                        state,
                        CommunicationDialogState::Visible {
                            confirm_discard: false,
                            ..
                        }
                    );
                match state {
                    CommunicationDialogState::Visible {
                        fields,
                        loaded,
                        focused,
                        ..
                    } if ask => CommunicationDialogState::Visible {
                        fields,
                        loaded,
                        focused,
                        confirm_discard: true,
                    },
                    _ => CommunicationDialogState::Hidden,
                }
            }
            CommunicationIntent::MoveUp => move_focus(state, |focused, len| {
                if focused == 0 {
                    len.saturating_sub(1)
                } else {
                    focused - 1
                }
            }),
            CommunicationIntent::MoveDown => move_focus(state, |focused, len| {
                if focused + 1 >= len {
                    0
                } else {
                    focused + 1
                }
            }),
            CommunicationIntent::Toggle => match state {
                CommunicationDialogState::Visible {
                    mut fields,
                    loaded,
                    focused,
                    ..
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.enabled = !field.enabled;
                    }
                    CommunicationDialogState::Visible {
                        fields,
                        loaded,
                        focused,
                        confirm_discard: false,
                    }
                }
                hidden => hidden,
            },
        }
    }
}

/// Moves focus and drops any pending discard confirmation.
fn move_focus(
    state: CommunicationDialogState,
    step: impl FnOnce(usize, usize) -> usize,
) -> CommunicationDialogState {
    match state {
        CommunicationDialogState::Visible {
            fields,
            loaded,
            focused,
            ..
        } => CommunicationDialogState::Visible {
            focused: step(focused, fields.len()),
            fields,
            loaded,
            confirm_discard: false,
        },
        hidden => hidden,
    }
}
