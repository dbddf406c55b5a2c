use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationTopic {
    PromotionalEmails,
    OrderUpdates,
    PersonalizedAds,
    Newsletter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationPreference {
    pub topic: CommunicationTopic,
    pub label: String,
    pub description: String,
    pub enabled: bool,
}

/// Preferences a new account starts with.
pub fn default_communication_preferences() -> Vec<CommunicationPreference> {
    let entry = |topic, label: &str, description: &str, enabled| CommunicationPreference {
        topic,
        label: label.to_string(),
        description: description.to_string(),
        enabled,
    };
    vec![
        entry(
            CommunicationTopic::PromotionalEmails,
            "Promotional emails",
            "Deals, offers and new arrivals",
            true,
        ),
        entry(
            CommunicationTopic::OrderUpdates,
            "Order updates",
            "Shipping and delivery notifications",
            true,
        ),
        entry(
            CommunicationTopic::PersonalizedAds,
            "Personalized ads",
            "Ads based on your browsing and purchases",
            true,
        ),
        entry(
            CommunicationTopic::Newsletter,
            "Newsletter",
            "Monthly design ideas and guides",
            false,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CommunicationDialogState {
    #[default]
    Hidden,
    Visible {
        fields: Vec<CommunicationPreference>,
        /// Values as loaded from the service.
        loaded: Vec<CommunicationPreference>,
        focused: usize,
        /// When true, next close discards changes. Set on first close when dirty.
        confirm_discard: bool,
    },
}

impl UiState for CommunicationDialogState {}

impl CommunicationDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether any toggle differs from the loaded values.
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Visible { fields, loaded, .. } => fields != loaded,
            Self::Hidden => false,
        }
    }

    pub fn fields(&self) -> &[CommunicationPreference] {
        match self {
            Self::Visible { fields, .. } => fields,
            Self::Hidden => &[],
        }
    }
}
