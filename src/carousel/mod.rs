//! Rotating carousel: a fixed slide sequence, an active index that moves on
//! a timer or on command, and a timer that is cancelled on teardown.

mod intent;
mod reducer;
mod state;
mod timer;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::CarouselState;
pub use timer::AutoAdvance;

use std::time::Duration;

use tokio::runtime::Handle;

use crate::catalog::Slide;
use crate::config::ManualNavigation;
use crate::error::{ConfigurationError, NavigationError};
use crate::ui::mvi::Reducer;

/// A mounted carousel.
///
/// The timer never touches the state directly. It runs `on_tick` with its
/// current epoch (usually a channel send to the UI loop), and the UI loop
/// calls [`Carousel::on_timer_tick`], which ignores ticks once the carousel
/// has been torn down or when the timer was restarted after the tick was
/// emitted.
pub struct Carousel {
    name: String,
    slides: Vec<Slide>,
    state: CarouselState,
    interval: Duration,
    manual_navigation: ManualNavigation,
    timer: Option<AutoAdvance>,
    torn_down: bool,
}

impl Carousel {
    pub fn new(
        name: impl Into<String>,
        slides: Vec<Slide>,
        interval: Duration,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if interval.is_zero() {
            return Err(ConfigurationError::ZeroInterval { carousel: name });
        }
        let Some(state) = CarouselState::new(slides.len()) else {
            return Err(ConfigurationError::EmptySlides { carousel: name });
        };

        Ok(Self {
            name,
            slides,
            state,
            interval,
            manual_navigation: ManualNavigation::default(),
            timer: None,
            torn_down: false,
        })
    }

    pub fn with_manual_navigation(mut self, policy: ManualNavigation) -> Self {
        self.manual_navigation = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.index()
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.state.index()]
    }

    pub fn advance(&mut self) {
        self.dispatch(CarouselIntent::Advance);
        self.after_manual_navigation();
    }

    pub fn retreat(&mut self) {
        self.dispatch(CarouselIntent::Retreat);
        self.after_manual_navigation();
    }

    /// Moves to slide `index`. Out-of-range targets are rejected and the
    /// active slide does not change.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if let Err(err) = self.state.check_target(index) {
            tracing::warn!(carousel = %self.name, index, len = self.len(), "Rejected jump");
            return Err(err);
        }
        self.dispatch(CarouselIntent::JumpTo { index });
        self.after_manual_navigation();
        Ok(())
    }

    /// Starts auto-advance. Returns `false` if it is already running or the
    /// carousel has been torn down.
    pub fn start<F>(&mut self, runtime: &Handle, on_tick: F) -> bool
    where
        F: Fn(u64) + Send + 'static,
    {
        if self.torn_down || self.timer.is_some() {
            return false;
        }
        self.timer = Some(AutoAdvance::spawn(runtime, self.interval, on_tick));
        tracing::debug!(
            carousel = %self.name,
            interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
            "Auto-advance started"
        );
        true
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Applies a timer tick delivered by the UI loop. Returns whether the
    /// slide changed. Ticks for a stopped or torn-down carousel are dropped,
    /// and so are ticks from an epoch that a restart has since superseded.
    pub fn on_timer_tick(&mut self, epoch: u64) -> bool {
        let Some(timer) = self.timer.as_ref().filter(|t| !t.is_cancelled()) else {
            tracing::trace!(carousel = %self.name, "Dropped tick for stopped carousel");
            return false;
        };
        if timer.epoch() != epoch {
            tracing::trace!(carousel = %self.name, epoch, current = timer.epoch(), "Dropped stale tick");
            return false;
        }
        self.dispatch(CarouselIntent::Tick);
        true
    }

    /// Releases the timer. Only the first call has an effect.
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        tracing::debug!(carousel = %self.name, "Carousel torn down");
        true
    }

    fn dispatch(&mut self, intent: CarouselIntent) {
        self.state = CarouselReducer::reduce(self.state, intent);
    }

    fn after_manual_navigation(&mut self) {
        if self.manual_navigation == ManualNavigation::RestartTimer {
            if let Some(timer) = &self.timer {
                timer.restart();
            }
        }
    }
}
