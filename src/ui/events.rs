use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::preferences::communication::CommunicationPreference;
use crate::preferences::{Address, PaymentPreference, SavedCard, ServiceError};
use crate::shutdown::ShutdownHandle;

/// Which carousel a timer tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    DealsBanner,
    TrendingHero,
}

/// Everything the payment preference form needs to open.
#[derive(Debug, Clone)]
pub struct PaymentFormData {
    pub preference: Option<PaymentPreference>,
    pub cards: Vec<SavedCard>,
    pub addresses: Vec<Address>,
    /// Card picked from the saved cards list, if the form edits one.
    pub editing_card: Option<SavedCard>,
}

#[derive(Debug, Clone)]
pub struct SavedCardsData {
    pub cards: Vec<SavedCard>,
    pub preferred_token_id: Option<String>,
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Auto-advance timer of a carousel fired during `epoch`.
    CarouselTick { id: CarouselId, epoch: u64 },
    PaymentFormLoaded(Result<PaymentFormData, ServiceError>),
    PaymentSaved(Result<PaymentPreference, ServiceError>),
    CommunicationLoaded(Result<Vec<CommunicationPreference>, ServiceError>),
    CommunicationSaved(Result<(), ServiceError>),
    SavedCardsLoaded(Result<SavedCardsData, ServiceError>),
    CardRemoved {
        token_id: String,
        result: Result<(), ServiceError>,
    },
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawns the input thread: terminal events plus a redraw tick every
    /// `tick_rate`, until `shutdown` is signalled.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        break;
                    }

                    // Short poll timeout so the shutdown flag is seen promptly
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                let _ = event_tx.send(AppEvent::Key(key));
                            }
                            Ok(Event::Resize(cols, rows)) => {
                                let _ = event_tx.send(AppEvent::Resize(cols, rows));
                            }
                            Ok(_) => {}
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
                tracing::debug!("Input thread stopped");
            });
        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to spawn input thread");
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
