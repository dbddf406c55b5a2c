use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Auto-advance timer fired.
    Tick,
    /// "Next" arrow.
    Advance,
    /// "Previous" arrow.
    Retreat,
    /// Indicator dot. Out-of-range targets leave the state unchanged.
    JumpTo { index: usize },
}

impl Intent for CarouselIntent {}
