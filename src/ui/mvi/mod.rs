//! Model-View-Intent primitives shared by the storefront components.
//!
//! Every stateful component (carousel, communication preferences, payment
//! form, save flow) keeps its state as a plain value and changes it only by
//! running an intent through its reducer:
//!
//! ```text
//! key / timer / service result ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
