use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod event_loop;

use background::{Channels, spawn_event_thread, spawn_tick_worker};
use event_loop::run_event_loop;

/// Boxed error result used at the runtime boundary.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the interactive gallery end-to-end.
///
/// Inputs:
/// - `app`: Session state built from the loaded page
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal failures.
///
/// Details:
/// - `FOLIO_TEST_HEADLESS=1` skips terminal setup and the event loop.
/// - The terminal is restored even when the loop ends with an error.
pub async fn run(mut app: AppState) -> Result<()> {
    let headless = std::env::var("FOLIO_TEST_HEADLESS").ok().as_deref() == Some("1");
    if headless {
        tracing::info!(
            records = app.gallery.records().len(),
            "[Runtime] headless session, skipping event loop"
        );
        return Ok(());
    }

    setup_terminal()?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(t) => t,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e.into());
        }
    };

    let mut channels = Channels::new();
    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    spawn_tick_worker(channels.tick_tx.clone());

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    restore_terminal()?;
    terminal.show_cursor()?;
    tracing::info!(
        category = app.gallery.state().category(),
        search = app.gallery.state().search_text(),
        "[Runtime] session ended"
    );
    Ok(())
}
