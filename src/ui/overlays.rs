use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::gallery::category_label;
use crate::state::{AppState, FOCUS_ORDER};
use crate::theme::{KeyChord, theme};

use super::centered_rect;

/// What: Render the lightbox over the selected project.
///
/// Details:
/// - Prev/next hints appear only when a neighbor exists.
/// - When the project has media, the carousel's caption and slide dots are shown.
pub fn render_lightbox(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let rect = centered_rect(70, 70, area);
    f.render_widget(Clear, rect);

    let Some(record) = app.gallery.visible_records().nth(app.lightbox.current()) else {
        return;
    };
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            category_label(record.category()).to_string(),
            Style::default().fg(th.lavender),
        )),
        Line::from(""),
    ];
    if !record.description().is_empty() {
        lines.push(Line::from(Span::styled(
            record.description().to_string(),
            Style::default().fg(th.text),
        )));
        lines.push(Line::from(""));
    }
    if !record.tags().is_empty() {
        lines.push(Line::from(Span::styled(
            record.tags().join(", "),
            Style::default().fg(th.subtext1),
        )));
        lines.push(Line::from(""));
    }
    if let Some(carousel) = app.carousel.as_ref() {
        let dots: String = (0..carousel.len())
            .map(|i| if i == carousel.index() { '●' } else { '○' })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(dots, Style::default().fg(th.sapphire)),
            Span::raw("  "),
            Span::styled(
                format!("{}/{}", carousel.index() + 1, carousel.len()),
                Style::default().fg(th.overlay2),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            carousel.caption().to_string(),
            Style::default().fg(th.subtext0).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }
    let mut nav: Vec<Span> = Vec::new();
    if app.lightbox.has_prev() {
        nav.push(Span::styled("‹ Prev (←)  ", Style::default().fg(th.text)));
    }
    if app.lightbox.has_next() {
        nav.push(Span::styled("Next (→) ›  ", Style::default().fg(th.text)));
    }
    if app.carousel.is_some() {
        nav.push(Span::styled("[ ] slides  ", Style::default().fg(th.overlay1)));
    }
    nav.push(Span::styled("Esc close", Style::default().fg(th.overlay1)));
    lines.push(Line::from(nav));

    let title = format!(
        " {} ({}/{}) ",
        record.title(),
        app.lightbox.current() + 1,
        app.gallery.view().visible_count
    );
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(th.mantle))
            .block(
                Block::default()
                    .title(Span::styled(
                        title,
                        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(th.mauve)),
            ),
        rect,
    );
}

/// What: Render the navigation menu with section links and key bindings.
pub fn render_menu(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let rect = centered_rect(50, 70, area);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Go to",
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    for (idx, focus) in FOCUS_ORDER.iter().enumerate() {
        let cursor = idx == app.menu_cursor;
        lines.push(Line::from(Span::styled(
            format!("{} {}", if cursor { "▶" } else { " " }, focus.label()),
            if cursor {
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.text)
            },
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Keys",
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    let fmt = |label: &str, key: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label:18}"),
                Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{key}]"), Style::default().fg(th.text)),
        ])
    };
    let focus_key: KeyChord = app.settings.search_focus_key;
    lines.push(fmt("Focus search", focus_key.label()));
    lines.push(fmt("Clear / leave search", "Esc".into()));
    lines.push(fmt("Next pane", "Tab".into()));
    lines.push(fmt("Select / open", "Enter".into()));
    lines.push(fmt("Reset filters", "Ctrl+R / r".into()));
    lines.push(fmt("Menu", "? / F1".into()));
    lines.push(fmt("Quit", "q".into()));

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.mantle))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", app.menu.toggle_label()),
                        Style::default().fg(th.overlay2),
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(th.lavender)),
            ),
        rect,
    );
}
