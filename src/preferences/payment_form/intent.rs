use crate::preferences::payment::{Address, PaymentMethod, PaymentPreference, SavedCard};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PaymentFormIntent {
    Open {
        preference: Option<PaymentPreference>,
        cards: Vec<SavedCard>,
        addresses: Vec<Address>,
        editing_card: Option<SavedCard>,
    },
    Close,
    FocusNext,
    FocusPrevious,
    SelectMethod(PaymentMethod),
    SelectCard(Option<String>),
    SelectAddress(Option<u64>),
    /// Left/Right on the focused picker.
    Cycle { forward: bool },
    Type(char),
    Backspace,
}

impl Intent for PaymentFormIntent {}
