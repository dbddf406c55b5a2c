//! Errors raised by the carousel and listing components.

use thiserror::Error;

/// A component was constructed with parameters it cannot run with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("carousel '{carousel}' has no slides")]
    EmptySlides { carousel: String },

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("auto-advance interval for '{carousel}' must be greater than zero")]
    ZeroInterval { carousel: String },
}

/// A navigation command named a slide that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("slide {index} is out of range (carousel has {len} slides)")]
    InvalidNavigationTarget { index: usize, len: usize },
}
