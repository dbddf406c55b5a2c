use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SaveState {
    #[default]
    Idle,

    /// Request in flight.
    Saving {
        /// 1-based attempt number.
        attempt: u8,
    },

    Saved,

    Failed {
        error: String,
        /// Whether the service said trying again may succeed.
        retryable: bool,
        attempt: u8,
    },
}

impl UiState for SaveState {}

impl SaveState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Saving { .. })
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Failed { retryable: true, .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn attempt(&self) -> Option<u8> {
        match self {
            Self::Saving { attempt } | Self::Failed { attempt, .. } => Some(*attempt),
            _ => None,
        }
    }
}
