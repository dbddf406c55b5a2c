//! Repeating auto-advance timer owned by a carousel.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Scoped repeating timer.
///
/// The callback runs once per period on the runtime until the timer is
/// cancelled, and receives the timer's epoch. Every [`AutoAdvance::restart`]
/// starts a new epoch, so ticks emitted before a restart can be told apart.
/// Cancellation happens exactly once, either through
/// [`AutoAdvance::cancel`] or on drop; after it the callback never runs
/// again.
pub struct AutoAdvance {
    period: Duration,
    epoch: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
    restart: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    pub fn spawn<F>(runtime: &Handle, period: Duration, on_tick: F) -> Self
    where
        F: Fn(u64) + Send + 'static,
    {
        let epoch = Arc::new(AtomicU64::new(0));
        let cancelled = Arc::new(AtomicBool::new(false));
        let restart = Arc::new(Notify::new());
        let task = runtime.spawn(tick_loop(
            period,
            Arc::clone(&epoch),
            Arc::clone(&cancelled),
            Arc::clone(&restart),
            on_tick,
        ));

        Self {
            period,
            epoch,
            cancelled,
            restart,
            task: Some(task),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Pushes the next tick a full period into the future and starts a new
    /// epoch.
    pub fn restart(&self) {
        if !self.is_cancelled() {
            self.epoch.fetch_add(1, Ordering::SeqCst);
            self.restart.notify_one();
        }
    }

    /// Stops the timer. Returns `true` only for the call that actually
    /// cancelled it.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return false;
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
        true
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn tick_loop<F>(
    period: Duration,
    epoch: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
    restart: Arc<Notify>,
    on_tick: F,
) where
    F: Fn(u64) + Send + 'static,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = restart.notified() => ticker.reset(),
            _ = ticker.tick() => {
                // Flag is set before the abort lands; never fire past it.
                if cancelled.load(Ordering::SeqCst) {
                    break;
                }
                on_tick(epoch.load(Ordering::SeqCst));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl Fn(u64) + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move |_| {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let (count, on_tick) = counter();
        let _timer = AutoAdvance::spawn(&Handle::current(), Duration::from_millis(2000), on_tick);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(4002)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_reported_once() {
        let (_count, on_tick) = counter();
        let mut timer = AutoAdvance::spawn(&Handle::current(), Duration::from_millis(100), on_tick);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(timer.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_ticks() {
        let (count, on_tick) = counter();
        let timer = AutoAdvance::spawn(&Handle::current(), Duration::from_millis(100), on_tick);
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        drop(timer);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_defers_next_tick() {
        let (count, on_tick) = counter();
        let timer = AutoAdvance::spawn(&Handle::current(), Duration::from_millis(1000), on_tick);

        tokio::time::sleep(Duration::from_millis(900)).await;
        timer.restart();
        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_carry_the_current_epoch() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let timer = AutoAdvance::spawn(&Handle::current(), Duration::from_millis(100), move |epoch| {
            sink.lock().push(epoch);
        });

        tokio::time::sleep(Duration::from_millis(150)).await;
        timer.restart();
        assert_eq!(timer.epoch(), 1);
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(*seen.lock(), vec![0, 1]);
    }
}
