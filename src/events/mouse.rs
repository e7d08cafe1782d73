//! Mouse handling: horizontal drags in the lightbox swipe its carousel.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::state::AppState;

/// What: Handle a single mouse event.
///
/// Details:
/// - Only the open lightbox reacts; press/release columns are the swipe endpoints.
pub(super) fn handle_mouse_event(m: MouseEvent, app: &mut AppState) {
    if !app.lightbox.is_open() {
        return;
    }
    let Some(carousel) = app.carousel.as_mut() else {
        return;
    };
    let x = i32::from(m.column);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => carousel.pointer_down(x),
        MouseEventKind::Up(MouseButton::Left) => carousel.pointer_up(x),
        _ => {}
    }
}
