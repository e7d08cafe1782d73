use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: Render the section dots and, when enabled, the key hints.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans: Vec<Span> = Vec::new();
    if let Some(nav) = app.section_nav.as_ref() {
        for (id, active) in nav.dots() {
            let label = Focus::from_section(id).map(Focus::label).unwrap_or(id);
            spans.push(Span::styled(
                format!("{} {label}  ", if active { '●' } else { '○' }),
                Style::default().fg(if active { th.sapphire } else { th.overlay1 }),
            ));
        }
    }
    if app.settings.show_keybinds_footer {
        spans.push(Span::styled(
            format!(
                "│ Tab pane  {} search  Esc clear  ^R reset  ? menu  q quit",
                app.settings.search_focus_key.label()
            ),
            Style::default().fg(th.overlay1),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
