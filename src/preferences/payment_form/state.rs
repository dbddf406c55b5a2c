use crate::preferences::payment::{Address, PaymentMethod, PaymentPreference, SavedCard};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFormField {
    #[default]
    Method,
    Card,
    Address,
    Nickname,
}

/// Field values of an open payment preference form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_token_id: Option<String>,
    pub address_id: Option<u64>,
    pub nickname: String,
    pub cards: Vec<SavedCard>,
    pub addresses: Vec<Address>,
    /// Token of the card opened through "edit", if any.
    pub editing_card: Option<String>,
    pub focused: PaymentFormField,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PaymentFormState {
    #[default]
    Hidden,
    Editing(PaymentForm),
}

impl UiState for PaymentFormState {}

impl PaymentFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn form(&self) -> Option<&PaymentForm> {
        match self {
            Self::Editing(form) => Some(form),
            Self::Hidden => None,
        }
    }
}

impl PaymentForm {
    pub fn title(&self) -> &'static str {
        if self.editing_card.is_some() {
            "Edit Payment Preference"
        } else {
            "Set Payment Preference"
        }
    }

    /// Fields the cursor can land on; the card picker only exists for cards.
    pub fn focusable_fields(&self) -> Vec<PaymentFormField> {
        let mut fields = vec![PaymentFormField::Method];
        if self.method == PaymentMethod::Card {
            fields.push(PaymentFormField::Card);
        }
        fields.push(PaymentFormField::Address);
        fields.push(PaymentFormField::Nickname);
        fields
    }

    pub fn selected_card(&self) -> Option<&SavedCard> {
        let token = self.card_token_id.as_deref()?;
        self.cards.iter().find(|c| c.token_id == token)
    }

    pub fn selected_address(&self) -> Option<&Address> {
        let id = self.address_id?;
        self.addresses.iter().find(|a| a.id == id)
    }

    /// The record handed to the account service on submit.
    pub fn submission(&self) -> PaymentPreference {
        let nickname = self.nickname.trim();
        PaymentPreference {
            preferred_method: self.method,
            preferred_address_id: self.address_id,
            preferred_card_token_id: match self.method {
                PaymentMethod::Card => self.card_token_id.clone(),
                _ => None,
            },
            nickname: (!nickname.is_empty()).then(|| nickname.to_string()),
        }
    }
}
