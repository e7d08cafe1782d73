//! Rendering for folio's TUI.
//!
//! Everything drawn here is read from [`AppState`] and the gallery's
//! [`crate::gallery::PageView`]; rendering never mutates filter state.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::{display_width, truncate_to_width};

mod filters;
mod footer;
mod grid;
mod overlays;
mod search;

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Session state
///
/// Details:
/// - Top to bottom: header, search bar, category buttons, chip row (only
///   while a filter is active), results count, grid, footer; then the menu
///   and lightbox overlays when open.
pub fn ui(f: &mut Frame, app: &AppState) {
    render_at(f, app, Instant::now());
}

/// Same as [`ui`] with an explicit clock, so reveal timing is deterministic.
pub fn render_at(f: &mut Frame, app: &AppState, now: Instant) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chips_h: u16 = if app.gallery.view().chips.visible { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(chips_h),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    search::render_search(f, app, chunks[1]);
    filters::render_filters(f, app, chunks[2]);
    if chips_h > 0 {
        filters::render_chips(f, app, chunks[3]);
    }
    filters::render_results_count(f, app, chunks[4]);
    grid::render_grid(f, app, chunks[5], now);
    footer::render_footer(f, app, chunks[6]);

    if app.menu.is_open() {
        overlays::render_menu(f, app, area);
    }
    if app.lightbox.is_open() {
        overlays::render_lightbox(f, app, area);
    }
}

/// Title on the left, menu toggle label on the right.
fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let toggle = format!("≡ {} (?)", app.menu.toggle_label());
    let room = usize::from(area.width).saturating_sub(display_width(&toggle) + 1);
    let title = truncate_to_width(&app.title, room);
    let gap = usize::from(area.width)
        .saturating_sub(display_width(&title) + display_width(&toggle));
    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(toggle, Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Rectangle of `pct_x` by `pct_y` percent centered in `area`.
pub(crate) fn centered_rect(pct_x: u16, pct_y: u16, area: Rect) -> Rect {
    let w = area.width.saturating_mul(pct_x.min(100)) / 100;
    let h = area.height.saturating_mul(pct_y.min(100)) / 100;
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}
