use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between reveal ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Channels between the background workers and the event loop.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Redraw ticks for the staggered reveal.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving side of `tick_tx`.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
}

impl Channels {
    /// Create all channels.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            tick_tx,
            tick_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// What: Spawn the tick worker.
///
/// Details:
/// - Ticks only ask for redraws; they never touch filter state.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking thread that reads terminal input.
///
/// Inputs:
/// - `event_tx`: Where events are forwarded
/// - `cancelled`: Exit flag checked between polls
///
/// Details:
/// - Polls with a 50ms timeout so the flag is honored promptly.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "[Runtime] transient input read error"),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "[Runtime] input poll error");
                }
            }
        }
    });
}
