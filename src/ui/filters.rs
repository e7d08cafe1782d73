use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::gallery::category_label;
use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: Render the category buttons with their count badges.
///
/// Details:
/// - The button of the active category is filled; the cursor is underlined
///   while the row has focus.
/// - Badges appear only for categories the page declares a count slot for.
pub fn render_filters(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Filters;
    let view = app.gallery.view();
    let badges = app.gallery.badges();

    let mut spans: Vec<Span> = Vec::new();
    for (idx, value) in app.gallery.taxonomy().buttons().enumerate() {
        let active = view.active_category == value;
        let mut style = if active {
            Style::default()
                .fg(th.crust)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        if focused && idx == app.filter_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", category_label(value)), style));
        if let Some(n) = badges.get(value).filter(|_| app.controls.shows_badge(value)) {
            spans.push(Span::styled(format!("{n}"), Style::default().fg(th.green)));
        }
        spans.push(Span::raw("  "));
    }

    let block = Block::default()
        .title(Span::styled(
            "Categories",
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// What: Render the active-filter chips and the clear-all control.
pub fn render_chips(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Chips;
    let mut spans: Vec<Span> = Vec::new();
    for (idx, chip) in app.gallery.view().chips.chips.iter().enumerate() {
        let mut style = Style::default().fg(th.crust).bg(th.yellow);
        if focused && idx == app.chip_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ✕ ", chip.label), style));
        spans.push(Span::raw(" "));
    }
    if app.controls.has_clear_all {
        spans.push(Span::styled(
            " Clear all (c)",
            Style::default().fg(th.overlay2),
        ));
    }
    let mut block = Block::default()
        .title(Span::styled(
            "Active filters",
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    if focused && let Some(chip) = app.gallery.view().chips.chips.get(app.chip_cursor) {
        block = block.title(
            Line::from(Span::styled(
                format!(" Enter: {} ", chip.removal_label()),
                Style::default().fg(th.subtext1),
            ))
            .right_aligned(),
        );
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Results count line, e.g. "Showing 2 projects".
pub fn render_results_count(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = Line::from(Span::styled(
        app.gallery.view().results_text.clone(),
        Style::default().fg(th.subtext0),
    ));
    f.render_widget(Paragraph::new(line), area);
}
