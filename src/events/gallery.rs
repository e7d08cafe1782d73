//! Project grid navigation and the lightbox.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;
use crate::widgets::{CarouselKey, LightboxKey};

/// Handle a key while the grid has focus.
pub(super) fn handle_gallery_key(ke: KeyEvent, app: &mut AppState) {
    let cols = isize::try_from(app.settings.grid_columns.max(1)).unwrap_or(1);
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-cols),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(cols),
        KeyCode::Home => app.selected = 0,
        KeyCode::End => app.move_selection(isize::MAX),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_lightbox(),
        _ => {}
    }
}

/// What: Handle a key while the lightbox is open.
///
/// Details:
/// - Escape/Left/Right drive the lightbox; `[`/`]` step the item's carousel.
/// - Every other key is swallowed so nothing behind the overlay reacts.
pub(super) fn handle_lightbox_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    let key = match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(LightboxKey::Escape),
        KeyCode::Left | KeyCode::Char('h') => Some(LightboxKey::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(LightboxKey::Right),
        KeyCode::Char('[') => {
            if let Some(c) = app.carousel.as_mut() {
                c.handle_key(CarouselKey::Left);
            }
            None
        }
        KeyCode::Char(']') => {
            if let Some(c) = app.carousel.as_mut() {
                c.handle_key(CarouselKey::Right);
            }
            None
        }
        _ => None,
    };
    if let Some(key) = key {
        app.lightbox_key(key);
    }
    false
}
