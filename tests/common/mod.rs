//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use storefront::config::{Config, ConfigStore};
use storefront::preferences::{InMemoryPreferenceService, PreferenceService};
use storefront::ui::app::App;
use storefront::ui::events::AppEvent;
use tempfile::TempDir;
use tokio::runtime::Handle;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// An app wired to the current runtime and an in-memory account service.
/// Must be called from inside a tokio runtime.
pub struct TestApp {
    pub app: App,
    pub events: Receiver<AppEvent>,
    pub service: Arc<InMemoryPreferenceService>,
}

pub fn make_app() -> TestApp {
    make_app_with(Config::default(), PathBuf::from("/nonexistent/config.toml"))
}

pub fn make_app_with(config: Config, path: PathBuf) -> TestApp {
    let (tx, rx) = mpsc::channel();
    let service = Arc::new(InMemoryPreferenceService::seeded());
    let shared: Arc<dyn PreferenceService> = service.clone();
    let app = App::new(ConfigStore::new(config, path), shared, Handle::current(), tx)
        .expect("default storefront must build");
    TestApp {
        app,
        events: rx,
        service,
    }
}

/// Waits (yielding to the runtime) until an event arrives on `rx`.
pub async fn next_event(rx: &Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if let Ok(event) = rx.try_recv() {
            return Some(event);
        }
        if tokio::time::Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
