//! Search input editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Focus};

/// Handle a key while the search input has focus.
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Char('u') if ctrl => app.clear_search(),
        KeyCode::Char('a') if ctrl => app.caret_to_edge(false),
        KeyCode::Char('e') if ctrl => app.caret_to_edge(true),
        KeyCode::Char(ch) if !ctrl => app.insert_char(ch),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete_forward(),
        KeyCode::Left => app.move_caret(-1),
        KeyCode::Right => app.move_caret(1),
        KeyCode::Home => app.caret_to_edge(false),
        KeyCode::End => app.caret_to_edge(true),
        KeyCode::Enter | KeyCode::Down => app.set_focus(Focus::Gallery),
        _ => {}
    }
}
