use crate::preferences::payment::PaymentMethod;
use crate::preferences::payment_form::intent::PaymentFormIntent;
use crate::preferences::payment_form::state::{PaymentForm, PaymentFormField, PaymentFormState};
use crate::ui::mvi::Reducer;

const MAX_NICKNAME_LEN: usize = 50;

pub struct PaymentFormReducer;

impl Reducer for PaymentFormReducer {
    type State = PaymentFormState;
    type Intent = PaymentFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaymentFormIntent::Open {
                preference,
                cards,
                addresses,
                editing_card,
            } => {
                let preference = preference.unwrap_or_default();
                let mut form = PaymentForm {
                    method: preference.preferred_method,
                    card_token_id: preference.preferred_card_token_id,
                    address_id: preference.preferred_address_id,
                    nickname: preference.nickname.unwrap_or_default(),
                    cards,
                    addresses,
                    editing_card: None,
                    focused: PaymentFormField::Method,
                };
                if let Some(card) = editing_card {
                    form.method = PaymentMethod::Card;
                    form.card_token_id = Some(card.token_id.clone());
                    form.editing_card = Some(card.token_id);
                }
                PaymentFormState::Editing(form)
            }
            PaymentFormIntent::Close => PaymentFormState::Hidden,
            other => match state {
                PaymentFormState::Editing(mut form) => {
                    edit(&mut form, other);
                    PaymentFormState::Editing(form)
                }
                hidden => hidden,
            },
        }
    }
}

fn edit(form: &mut PaymentForm, intent: PaymentFormIntent) {
    match intent {
        PaymentFormIntent::FocusNext => move_focus(form, 1),
        PaymentFormIntent::FocusPrevious => move_focus(form, -1),
        PaymentFormIntent::SelectMethod(method) => select_method(form, method),
        PaymentFormIntent::SelectCard(token) => {
            form.card_token_id = token.filter(|t| form.cards.iter().any(|c| &c.token_id == t));
        }
        PaymentFormIntent::SelectAddress(id) => {
            form.address_id = id.filter(|id| form.addresses.iter().any(|a| a.id == *id));
        }
        PaymentFormIntent::Cycle { forward } => match form.focused {
            PaymentFormField::Method => {
                let method = if forward {
                    form.method.next()
                } else {
                    form.method.previous()
                };
                select_method(form, method);
            }
            PaymentFormField::Card => {
                let options: Vec<Option<String>> = std::iter::once(None)
                    .chain(form.cards.iter().map(|c| Some(c.token_id.clone())))
                    .collect();
                form.card_token_id = cycle(&options, &form.card_token_id, forward);
            }
            PaymentFormField::Address => {
                let options: Vec<Option<u64>> = std::iter::once(None)
                    .chain(form.addresses.iter().map(|a| Some(a.id)))
                    .collect();
                form.address_id = cycle(&options, &form.address_id, forward);
            }
            PaymentFormField::Nickname => {}
        },
        PaymentFormIntent::Type(ch) => {
            if form.focused == PaymentFormField::Nickname
                && !ch.is_control()
                && form.nickname.chars().count() < MAX_NICKNAME_LEN
            {
                form.nickname.push(ch);
            }
        }
        PaymentFormIntent::Backspace => {
            if form.focused == PaymentFormField::Nickname {
                form.nickname.pop();
            }
        }
        PaymentFormIntent::Open { .. } | PaymentFormIntent::Close => {}
    }
}

fn select_method(form: &mut PaymentForm, method: PaymentMethod) {
    form.method = method;
    if method != PaymentMethod::Card {
        form.card_token_id = None;
    } else if form.card_token_id.is_none() {
        form.card_token_id = form.cards.first().map(|c| c.token_id.clone());
    }
    if !form.focusable_fields().contains(&form.focused) {
        form.focused = PaymentFormField::Method;
    }
}

fn move_focus(form: &mut PaymentForm, step: isize) {
    let fields = form.focusable_fields();
    let current = fields.iter().position(|f| *f == form.focused).unwrap_or(0) as isize;
    let len = fields.len() as isize;
    form.focused = fields[(current + step).rem_euclid(len) as usize];
}

fn cycle<T: Clone + PartialEq>(options: &[T], current: &T, forward: bool) -> T {
    let position = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if forward {
        (position + 1) % options.len()
    } else {
        (position + options.len() - 1) % options.len()
    };
    options[next].clone()
}
