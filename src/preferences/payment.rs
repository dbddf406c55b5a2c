//! Payment preference records exchanged with the account service.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Netbanking,
    Upi,
    Wallet,
    Cod,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Card,
        PaymentMethod::Netbanking,
        PaymentMethod::Upi,
        PaymentMethod::Wallet,
        PaymentMethod::Cod,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Netbanking => "Net Banking",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Wallet => "Digital Wallet",
            PaymentMethod::Cod => "Cash on Delivery",
        }
    }

    /// Next method in display order, wrapping around.
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let position = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(position + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The customer's preferred way to pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentPreference {
    pub preferred_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_address_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_card_token_id: Option<String>,
    #[serde(
        default,
        rename = "payment_nickname",
        skip_serializing_if = "Option::is_none"
    )]
    pub nickname: Option<String>,
}

impl PaymentPreference {
    /// Body of the update request. A non-card method sends an explicit
    /// `null` card token so the stored one is cleared.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({ "preferred_method": self.preferred_method });
        if let Some(nickname) = &self.nickname {
            payload["payment_nickname"] = json!(nickname);
        }
        if let Some(address_id) = self.preferred_address_id {
            payload["preferred_address_id"] = json!(address_id);
        }
        match (&self.preferred_method, &self.preferred_card_token_id) {
            (PaymentMethod::Card, Some(token)) => payload["preferred_card_token_id"] = json!(token),
            (PaymentMethod::Card, None) => {}
            _ => payload["preferred_card_token_id"] = Value::Null,
        }
        payload
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CardDetails {
    #[serde(default)]
    pub last4: String,
    #[serde(default)]
    pub network: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub issuer: String,
}

/// A tokenised card saved at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    pub token_id: String,
    pub method: String,
    pub card: CardDetails,
}

impl SavedCard {
    /// "HDFC Visa ending in 4242", degrading when issuer or network is unknown.
    pub fn display_name(&self) -> String {
        let CardDetails {
            last4,
            network,
            issuer,
            ..
        } = &self.card;
        match (issuer.is_empty(), network.is_empty()) {
            (false, false) => format!("{} {} ending in {}", issuer, network, last4),
            (_, false) => format!("{} ending in {}", network, last4),
            _ => format!("Card ending in {}", last4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub full_name: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} - {}, {}, {} {}",
            self.full_name, self.street_address, self.city, self.state, self.postal_code
        );
        if self.is_default {
            line.push_str(" (Default)");
        }
        line
    }
}
