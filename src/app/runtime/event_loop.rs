use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::background::Channels;

/// What: Decide whether a tick needs a redraw.
///
/// Inputs:
/// - `app`: Application state
/// - `now`: Tick time
/// - `was_pending`: Whether cards were still hidden at the previous tick
///
/// Output:
/// - `(redraw, pending)`; one extra redraw follows the last pending tick so
///   the final card appears.
pub fn handle_tick(app: &AppState, now: Instant, was_pending: bool) -> (bool, bool) {
    let pending = app.reveal_pending(now);
    (pending || was_pending, pending)
}

/// What: Run the event loop until an exit key.
///
/// Details:
/// - Each terminal event is handled to completion before the next one.
/// - Frames are drawn only after input or while a reveal is in progress.
pub async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    let mut dirty = true;
    let mut was_pending = true;
    loop {
        if dirty {
            if let Err(e) = terminal.draw(|f| ui(f, app)) {
                tracing::warn!(error = %e, "[Runtime] draw failed");
            }
            dirty = false;
        }
        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, app) {
                    break;
                }
                dirty = true;
                was_pending = true;
            }
            Some(()) = channels.tick_rx.recv() => {
                let (redraw, pending) = handle_tick(app, Instant::now(), was_pending);
                dirty = redraw;
                was_pending = pending;
            }
            else => break,
        }
    }
}
