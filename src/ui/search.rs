use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::display_width;

/// Width of the "> " prompt before the input text.
const PROMPT_W: u16 = 2;

/// What: Render the search input with its clear marker and caret.
///
/// Details:
/// - The clear marker appears only while the search text is non-empty and the
///   page has a search clear control.
/// - The terminal cursor is placed at the caret only while search is focused.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let text_color = if focused { th.text } else { th.subtext0 };

    let mut spans = vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(app.input.clone(), Style::default().fg(text_color)),
    ];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(
            format!("press {} to search", app.settings.search_focus_key.label()),
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let mut block = Block::default()
        .title(Span::styled(
            if focused { "Search (focused)" } else { "Search" },
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    if app.controls.has_search_clear && app.gallery.view().search_clear_visible {
        block = block.title(
            Line::from(Span::styled(" ✕ Ctrl+U ", Style::default().fg(th.red))).right_aligned(),
        );
    }
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(th.base))
            .block(block),
        area,
    );

    if focused && area.width > 2 && area.height > 2 {
        let before: String = app.input.chars().take(app.caret).collect();
        let caret_cols = u16::try_from(display_width(&before)).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + PROMPT_W).saturating_add(caret_cols).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
