use crate::error::NavigationError;
use crate::ui::mvi::UiState;

/// Index of the active slide, bounded by the slide count.
///
/// A mounted carousel always has `len > 0` and `index < len`. The default
/// value (`len == 0`) is the unmounted state; every transition on it is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl UiState for CarouselState {}

impl CarouselState {
    /// Mounted state at slide 0. `None` when there are no slides.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn advanced(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub(crate) fn retreated(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub(crate) fn jumped(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// Validates a jump target against the slide count.
    pub fn check_target(&self, index: usize) -> Result<(), NavigationError> {
        if index < self.len {
            Ok(())
        } else {
            Err(NavigationError::InvalidNavigationTarget {
                index,
                len: self.len,
            })
        }
    }
}
