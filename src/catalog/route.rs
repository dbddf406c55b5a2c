use serde::{Deserialize, Serialize};

/// A page the storefront can send the customer to.
///
/// Routing itself happens elsewhere; components only declare where a
/// call-to-action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    BestDeals,
    Trending,
    Contact,
    PaymentPreferences,
    CommunicationPreferences,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::BestDeals => "/best-deals",
            Route::Trending => "/trending",
            Route::Contact => "/contact",
            Route::PaymentPreferences => "/account/payment-preferences",
            Route::CommunicationPreferences => "/account/communication-preferences",
        }
    }
}
