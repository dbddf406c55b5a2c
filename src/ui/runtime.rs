use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::ConfigStore;
use crate::preferences::PreferenceService;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the storefront until the user quits or a shutdown signal arrives.
pub fn run(
    config: ConfigStore,
    runtime: Handle,
    service: Arc<dyn PreferenceService>,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let tick_rate = config.get().ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    spawn_signal_listener(&runtime, events.sender(), shutdown.clone());

    let mut app = App::new(config, service, runtime, events.sender()).map_err(io::Error::other)?;

    let (mut terminal, guard) = setup_terminal()?;
    app.start_carousels();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => dispatch_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Routes one event to the app.
pub fn dispatch_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => {}
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::CarouselTick { id, epoch } => app.on_carousel_tick(id, epoch),
        AppEvent::PaymentFormLoaded(loaded) => app.on_payment_form_loaded(loaded),
        AppEvent::PaymentSaved(result) => app.on_payment_saved(result),
        AppEvent::CommunicationLoaded(loaded) => app.on_communication_loaded(loaded),
        AppEvent::CommunicationSaved(result) => app.on_communication_saved(result),
        AppEvent::SavedCardsLoaded(loaded) => app.on_saved_cards_loaded(loaded),
        AppEvent::CardRemoved { token_id, result } => app.on_card_removed(token_id, result),
        AppEvent::Shutdown => app.request_quit(),
    }
}

fn spawn_signal_listener(runtime: &Handle, tx: Sender<AppEvent>, shutdown: ShutdownHandle) {
    runtime.spawn(async move {
        tokio::select! {
            _ = wait_for_signal() => {
                tracing::info!("Termination signal received");
                let _ = tx.send(AppEvent::Shutdown);
            }
            _ = shutdown.wait() => {}
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
