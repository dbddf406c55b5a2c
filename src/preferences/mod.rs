//! Account settings: payment preference, communication preferences, and
//! the service they are saved through.

pub mod communication;
pub mod payment;
pub mod payment_form;
pub mod save;
pub mod saved_cards;
pub mod service;

pub use payment::{Address, CardDetails, PaymentMethod, PaymentPreference, SavedCard};
pub use service::{save_with_timeout, InMemoryPreferenceService, PreferenceService, ServiceError};
