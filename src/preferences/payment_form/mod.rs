mod intent;
mod reducer;
mod state;

pub use intent::PaymentFormIntent;
pub use reducer::PaymentFormReducer;
pub use state::{PaymentForm, PaymentFormField, PaymentFormState};
