use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SaveIntent {
    /// User submitted the form.
    Submit,
    /// Service accepted the record.
    Succeeded,
    /// Service reported a failure.
    Failed { message: String, retryable: bool },
    /// User asked to try again after a retryable failure.
    Retry,
    /// Clear the outcome (form closed or message acknowledged).
    Dismiss,
}

impl Intent for SaveIntent {}
