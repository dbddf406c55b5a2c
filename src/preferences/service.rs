//! Account-service collaborator for preference reads and writes.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::preferences::communication::{default_communication_preferences, CommunicationPreference};
use crate::preferences::payment::{Address, CardDetails, PaymentMethod, PaymentPreference, SavedCard};

/// Failures reported by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Account service unavailable: {0}")]
    Unavailable(String),

    #[error("Account service did not answer within {millis} ms")]
    Timeout { millis: u64 },

    #[error("Request rejected: {reason}")]
    Rejected { reason: String },
}

impl ServiceError {
    /// Transient failures the customer may retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
    }
}

/// Operations the account settings pages need from the backend.
#[async_trait]
pub trait PreferenceService: Send + Sync {
    async fn payment_preference(&self) -> Result<Option<PaymentPreference>, ServiceError>;

    /// Stores `preference` and returns the stored record.
    async fn save_payment_preference(
        &self,
        preference: PaymentPreference,
    ) -> Result<PaymentPreference, ServiceError>;

    async fn saved_cards(&self) -> Result<Vec<SavedCard>, ServiceError>;

    async fn addresses(&self) -> Result<Vec<Address>, ServiceError>;

    /// Removes a saved card. A preference pointing at it loses its card token.
    async fn remove_saved_card(&self, token_id: &str) -> Result<(), ServiceError>;

    async fn communication_preferences(
        &self,
    ) -> Result<Vec<CommunicationPreference>, ServiceError>;

    async fn save_communication_preferences(
        &self,
        preferences: Vec<CommunicationPreference>,
    ) -> Result<(), ServiceError>;
}

/// Runs a save with an upper bound on how long the UI waits for it.
pub async fn save_with_timeout(
    service: Arc<dyn PreferenceService>,
    preference: PaymentPreference,
    limit: Duration,
) -> Result<PaymentPreference, ServiceError> {
    match tokio::time::timeout(limit, service.save_payment_preference(preference)).await {
        Ok(result) => result,
        Err(_) => Err(timeout_error(limit)),
    }
}

fn timeout_error(limit: Duration) -> ServiceError {
    ServiceError::Timeout {
        millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
    }
}

struct Store {
    preference: Option<PaymentPreference>,
    cards: Vec<SavedCard>,
    addresses: Vec<Address>,
    communication: Vec<CommunicationPreference>,
    failures: VecDeque<ServiceError>,
}

/// In-process stand-in for the account service.
///
/// Enforces the same contract as the real service (unknown cards and
/// addresses are rejected) and can be told to fail upcoming calls.
pub struct InMemoryPreferenceService {
    store: Mutex<Store>,
    latency: Duration,
}

impl InMemoryPreferenceService {
    pub fn new(cards: Vec<SavedCard>, addresses: Vec<Address>) -> Self {
        Self {
            store: Mutex::new(Store {
                preference: None,
                cards,
                addresses,
                communication: default_communication_preferences(),
                failures: VecDeque::new(),
            }),
            latency: Duration::ZERO,
        }
    }

    /// Service pre-populated with a demo account.
    pub fn seeded() -> Self {
        Self::new(demo_cards(), demo_addresses())
    }

    /// Delay every call by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes the next call fail with `error`. Queued failures are consumed
    /// in order, one per call.
    pub fn fail_next(&self, error: ServiceError) {
        self.store.lock().failures.push_back(error);
    }

    async fn enter(&self) -> Result<(), ServiceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.store.lock().failures.pop_front() {
            Some(error) => {
                tracing::warn!(%error, "Injected account service failure");
                Err(error)
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PreferenceService for InMemoryPreferenceService {
    async fn payment_preference(&self) -> Result<Option<PaymentPreference>, ServiceError> {
        self.enter().await?;
        Ok(self.store.lock().preference.clone())
    }

    async fn save_payment_preference(
        &self,
        mut preference: PaymentPreference,
    ) -> Result<PaymentPreference, ServiceError> {
        self.enter().await?;
        let mut store = self.store.lock();

        if preference.preferred_method != PaymentMethod::Card {
            preference.preferred_card_token_id = None;
        }
        if let Some(token) = &preference.preferred_card_token_id {
            if !store.cards.iter().any(|c| &c.token_id == token) {
                return Err(ServiceError::Rejected {
                    reason: format!("unknown card token '{}'", token),
                });
            }
        }
        if let Some(id) = preference.preferred_address_id {
            if !store.addresses.iter().any(|a| a.id == id) {
                return Err(ServiceError::Rejected {
                    reason: format!("unknown address {}", id),
                });
            }
        }

        tracing::info!(
            method = ?preference.preferred_method,
            address = ?preference.preferred_address_id,
            "Payment preference saved"
        );
        store.preference = Some(preference.clone());
        Ok(preference)
    }

    async fn saved_cards(&self) -> Result<Vec<SavedCard>, ServiceError> {
        self.enter().await?;
        Ok(self.store.lock().cards.clone())
    }

    async fn addresses(&self) -> Result<Vec<Address>, ServiceError> {
        self.enter().await?;
        Ok(self.store.lock().addresses.clone())
    }

    async fn remove_saved_card(&self, token_id: &str) -> Result<(), ServiceError> {
        self.enter().await?;
        let mut store = self.store.lock();
        let before = store.cards.len();
        store.cards.retain(|c| c.token_id != token_id);
        if store.cards.len() == before {
            return Err(ServiceError::Rejected {
                reason: format!("unknown card token '{}'", token_id),
            });
        }
        if let Some(preference) = store.preference.as_mut() {
            if preference.preferred_card_token_id.as_deref() == Some(token_id) {
                preference.preferred_card_token_id = None;
            }
        }
        tracing::info!(token_id, "Saved card removed");
        Ok(())
    }

    async fn communication_preferences(
        &self,
    ) -> Result<Vec<CommunicationPreference>, ServiceError> {
        self.enter().await?;
        Ok(self.store.lock().communication.clone())
    }

    async fn save_communication_preferences(
        &self,
        preferences: Vec<CommunicationPreference>,
    ) -> Result<(), ServiceError> {
        self.enter().await?;
        let enabled = preferences.iter().filter(|p| p.enabled).count();
        self.store.lock().communication = preferences;
        tracing::info!(enabled, "Communication preferences saved");
        Ok(())
    }
}

fn demo_cards() -> Vec<SavedCard> {
    vec![
        SavedCard {
            token_id: "token_visa_4242".to_string(),
            method: "card".to_string(),
            card: CardDetails {
                last4: "4242".to_string(),
                network: "Visa".to_string(),
                kind: "credit".to_string(),
                issuer: "HDFC".to_string(),
            },
        },
        SavedCard {
            token_id: "token_rupay_1881".to_string(),
            method: "card".to_string(),
            card: CardDetails {
                last4: "1881".to_string(),
                network: "RuPay".to_string(),
                kind: "debit".to_string(),
                issuer: String::new(),
            },
        },
    ]
}

fn demo_addresses() -> Vec<Address> {
    vec![
        Address {
            id: 1,
            kind: "home".to_string(),
            full_name: "Asha Verma".to_string(),
            phone: "9876543210".to_string(),
            street_address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: "560001".to_string(),
            country: "India".to_string(),
            is_default: true,
        },
        Address {
            id: 2,
            kind: "work".to_string(),
            full_name: "Asha Verma".to_string(),
            phone: "9876543210".to_string(),
            street_address: "4th Floor, Tech Park".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            postal_code: "411001".to_string(),
            country: "India".to_string(),
            is_default: false,
        },
    ]
}
