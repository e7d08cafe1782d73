//! Category buttons and active-filter chips.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// Handle a key while the category buttons have focus.
pub(super) fn handle_filters_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_filter_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_filter_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_filter_cursor(),
        _ => {}
    }
}

/// Handle a key while the chip row has focus.
pub(super) fn handle_chips_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_chip_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_chip_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ' | 'x') | KeyCode::Delete | KeyCode::Backspace => {
            app.remove_chip_at_cursor();
        }
        KeyCode::Char('c') => app.reset_filters(),
        _ => {}
    }
}
