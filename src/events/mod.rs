//! Event handling layer for folio's TUI.
//!
//! Keys are routed overlay-first (lightbox, then menu), then through the
//! global shortcuts, then to the focused pane. Panes translate keys into
//! gallery intents via [`AppState`]; nothing here filters directly.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::state::{AppState, Focus};

mod filters;
mod gallery;
mod global;
mod mouse;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if app.lightbox.is_open() {
                return gallery::handle_lightbox_key(ke, app);
            }
            if app.menu.is_open() {
                return global::handle_menu_key(ke, app);
            }
            if let Some(exit) = global::handle_global_key(ke, app) {
                return exit;
            }
            match app.focus {
                Focus::Search => search::handle_search_key(ke, app),
                Focus::Filters => filters::handle_filters_key(ke, app),
                Focus::Chips => filters::handle_chips_key(ke, app),
                Focus::Gallery => gallery::handle_gallery_key(ke, app),
            }
            false
        }
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(m, app);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
