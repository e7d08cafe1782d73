//! Non-interactive output: the filtered gallery as text or JSON.

use crossterm::style::Stylize;
use serde::Serialize;

use crate::gallery::{CountBadges, PageView, category_label};
use crate::state::AppState;

/// One record as printed in JSON listings.
#[derive(Serialize)]
struct ListedRecord<'a> {
    id: usize,
    title: &'a str,
    category: &'a str,
    tags: &'a [String],
    description: &'a str,
    visible: bool,
}

/// JSON document printed by `--json`.
#[derive(Serialize)]
struct Listing<'a> {
    title: &'a str,
    category: &'a str,
    search: &'a str,
    view: &'a PageView,
    badges: &'a CountBadges,
    records: Vec<ListedRecord<'a>>,
}

/// What: Render the current view as human-readable text.
///
/// Inputs:
/// - `app`: Session after startup filters
/// - `color`: Whether to emit ANSI styling
///
/// Output:
/// - Header with the results count, category buttons with badges, chips,
///   then one line per visible project (or the no-results message).
/// - Buttons without a count slot on the page are printed bare.
#[must_use]
pub fn render_listing(app: &AppState, color: bool) -> String {
    let view = app.gallery.view();
    let paint = |s: String, f: fn(String) -> crossterm::style::StyledContent<String>| {
        if color { f(s).to_string() } else { s }
    };
    let mut out = String::new();
    out.push_str(&paint(
        format!("{} - {}", app.title, view.results_text),
        |s| s.bold(),
    ));
    out.push('\n');

    let buttons: Vec<String> = app
        .gallery
        .taxonomy()
        .buttons()
        .map(|v| {
            let label = match app.gallery.badges().get(v) {
                Some(n) if app.controls.shows_badge(v) => format!("{} ({n})", category_label(v)),
                _ => category_label(v).to_string(),
            };
            if v == view.active_category {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    out.push_str(&format!("Categories: {}\n", buttons.join("  ")));

    if view.chips.visible {
        let chips: Vec<&str> = view.chips.chips.iter().map(|c| c.label.as_str()).collect();
        out.push_str(&format!("Active filters: {}\n", chips.join(", ")));
    }
    out.push('\n');

    if view.no_results {
        out.push_str(&paint("No projects found".to_string(), |s| s.red()));
        out.push('\n');
        return out;
    }
    for (n, record) in app.gallery.visible_records().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} [{}]",
            n + 1,
            paint(record.title().to_string(), |s| s.bold()),
            category_label(record.category())
        ));
        if !record.description().is_empty() {
            out.push_str(&format!(" - {}", record.description()));
        }
        if !record.tags().is_empty() {
            let tags: Vec<String> = record.tags().iter().map(|t| format!("#{t}")).collect();
            out.push_str(&format!("  {}", tags.join(" ")));
        }
        out.push('\n');
    }
    out
}

/// What: Render the current view as pretty JSON.
///
/// Output:
/// - The page view, badges, filter state and every record with its visibility.
///
/// # Errors
/// - Propagates `serde_json` serialization failures.
pub fn render_json(app: &AppState) -> Result<String, serde_json::Error> {
    let state = app.gallery.state();
    let listing = Listing {
        title: &app.title,
        category: state.category(),
        search: state.search_text(),
        view: app.gallery.view(),
        badges: app.gallery.badges(),
        records: app
            .gallery
            .records()
            .iter()
            .map(|r| ListedRecord {
                id: r.id().0,
                title: r.title(),
                category: r.category(),
                tags: r.tags(),
                description: r.description(),
                visible: app.gallery.visibility().is_visible(r.id()),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&listing)
}
