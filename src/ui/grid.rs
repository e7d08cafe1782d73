use std::time::Instant;

use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::gallery::{GalleryLayout, ProjectRecord, category_label};
use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Rows of terminal cells per card, borders included.
const CARD_H: u16 = 7;

/// What: Render the project grid, or the no-results panel when nothing matches.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Session state
/// - `area`: Space below the results count
/// - `now`: Clock used for the staggered reveal
///
/// Details:
/// - Cards whose stagger delay has not elapsed are drawn as empty outlines.
/// - Rows scroll so the selected card stays on screen.
pub fn render_grid(f: &mut Frame, app: &AppState, area: Rect, now: Instant) {
    let view = app.gallery.view();
    if view.layout == GalleryLayout::Hidden {
        render_no_results(f, app, area);
        return;
    }
    let cols = app.settings.grid_columns.max(1);
    let card_w = area.width / cols;
    let rows_on_screen = usize::from((area.height / CARD_H).max(1));
    let cols_us = usize::from(cols);
    let selected_row = app.selected / cols_us;
    let first_row = selected_row.saturating_sub(rows_on_screen - 1);

    let visible = view.items.iter().filter(|i| i.visible);
    for (pos, (item, record)) in visible.zip(app.gallery.visible_records()).enumerate() {
        let row = pos / cols_us;
        if row < first_row || row >= first_row + rows_on_screen {
            continue;
        }
        let (Ok(r), Ok(c)) = (u16::try_from(row - first_row), u16::try_from(pos % cols_us)) else {
            continue;
        };
        let rect = Rect {
            x: area.x + c * card_w,
            y: area.y + r * CARD_H,
            width: card_w,
            height: CARD_H.min(area.height.saturating_sub(r * CARD_H)),
        };
        let selected = pos == app.selected;
        if app.is_revealed(item, now) {
            render_card(f, record, rect, selected && app.focus == Focus::Gallery);
        } else {
            render_placeholder(f, rect);
        }
    }
}

/// One project card: title in the border, category, description and tags.
fn render_card(f: &mut Frame, record: &ProjectRecord, rect: Rect, highlighted: bool) {
    let th = theme();
    let inner_w = usize::from(rect.width.saturating_sub(2));
    let mut lines = vec![Line::from(Span::styled(
        category_label(record.category()).to_string(),
        Style::default().fg(th.lavender),
    ))];
    if !record.description().is_empty() {
        lines.push(Line::from(Span::styled(
            record.description().to_string(),
            Style::default().fg(th.subtext0),
        )));
    }
    if !record.tags().is_empty() {
        let tags = record
            .tags()
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            truncate_to_width(&tags, inner_w),
            Style::default().fg(th.subtext1),
        )));
    }
    let border = if highlighted { th.sapphire } else { th.surface1 };
    let title_style = if highlighted {
        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.text).add_modifier(Modifier::BOLD)
    };
    let block = Block::default()
        .title(Span::styled(
            truncate_to_width(record.title(), inner_w),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(th.mantle))
            .block(block),
        rect,
    );
}

/// Empty outline for a card still waiting on its reveal delay.
fn render_placeholder(f: &mut Frame, rect: Rect) {
    let th = theme();
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
        rect,
    );
}

/// Centered no-results panel; the reset hint needs a reset control on the page.
fn render_no_results(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No projects found",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try a different search or category.",
            Style::default().fg(th.subtext0),
        )),
    ];
    if app.controls.has_reset {
        lines.push(Line::from(Span::styled(
            "Esc clears the search · Ctrl+R resets filters",
            Style::default().fg(th.overlay2),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(th.surface1)),
            ),
        area,
    );
}
