//! Global shortcuts and the navigation menu overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::gallery::input::{Shortcut, ShortcutOutcome, route_shortcut};
use crate::state::{AppState, Focus};

/// What: Handle keys that act regardless of the focused pane.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Output:
/// - `Some(exit)` when consumed; `None` to let the focused pane handle it.
///
/// Details:
/// - The search focus key only fires outside the search input; inside it the
///   character is typed.
/// - Escape inside the search input clears a non-empty search, else blurs to the grid.
/// - Ctrl+R resets from any pane; plain `r` only outside the search input.
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return Some(true);
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('r') {
        app.reset_filters();
        return Some(false);
    }
    match ke.code {
        KeyCode::Tab => {
            app.set_focus(app.focus.next());
            return Some(false);
        }
        KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return Some(false);
        }
        KeyCode::F(1) => {
            app.menu.toggle();
            return Some(false);
        }
        _ => {}
    }

    let target = app.focus_target();
    if app.settings.search_focus_key.matches(ke.code, ke.modifiers) {
        match route_shortcut(&mut app.gallery, Shortcut::FocusSearch, target) {
            ShortcutOutcome::FocusSearch => {
                app.set_focus(Focus::Search);
                app.caret_to_edge(true);
                return Some(false);
            }
            _ => return None,
        }
    }
    if ke.code == KeyCode::Esc {
        return match route_shortcut(&mut app.gallery, Shortcut::Escape, target) {
            ShortcutOutcome::ClearedSearch => {
                app.input.clear();
                app.caret = 0;
                app.sync_after_render(std::time::Instant::now());
                Some(false)
            }
            ShortcutOutcome::Blur => {
                app.set_focus(Focus::Gallery);
                Some(false)
            }
            _ => None,
        };
    }

    if app.focus == Focus::Search {
        return None;
    }
    match ke.code {
        KeyCode::Char('q') => Some(true),
        KeyCode::Char('?' | 'm') => {
            app.menu.toggle();
            Some(false)
        }
        KeyCode::Char('r') => {
            app.reset_filters();
            Some(false)
        }
        _ => None,
    }
}

/// What: Handle keys while the navigation menu is open.
///
/// Details:
/// - Escape closes regardless of focus; Enter follows the highlighted link.
pub(super) fn handle_menu_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    match ke.code {
        KeyCode::Esc => app.menu.escape(),
        KeyCode::F(1) | KeyCode::Char('?' | 'm') => {
            app.menu.toggle();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_menu_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_menu_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_menu_link(),
        _ => {}
    }
    false
}
