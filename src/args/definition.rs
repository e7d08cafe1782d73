//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::gallery::Intent;
use crate::state::AppState;

/// folio - browse a portfolio's project gallery with category filters and live search
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Browse a portfolio's project gallery with category filters and live search", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Work page to load (HTML, or a JSON manifest ending in .json)
    pub page: PathBuf,

    /// Start with this category selected (e.g. ux-ui, web-dev)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Start with this search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print the filtered gallery and exit instead of opening the TUI
    #[arg(short, long)]
    pub list: bool,

    /// Print the filtered view as JSON and exit (implies --list)
    #[arg(long)]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Whether the run prints and exits instead of opening the TUI.
    #[must_use]
    pub const fn is_listing(&self) -> bool {
        self.list || self.json
    }
}

/// What: Apply `--category`/`--search` to a fresh session.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `app`: Session to filter
///
/// Output:
/// - `false` when `--category` named a value outside the category set.
///
/// Details:
/// - Goes through the same intents as the TUI; an unknown category leaves
///   the filter at "all".
pub fn apply_startup_filters(args: &Args, app: &mut AppState) -> bool {
    let mut ok = true;
    if let Some(category) = args.category.as_deref() {
        let value = category.trim().to_lowercase();
        if app.gallery.taxonomy().is_selectable(&value) {
            app.dispatch(Intent::SetCategory(value));
        } else {
            tracing::warn!(category = %category, "unknown category on command line");
            ok = false;
        }
    }
    if let Some(search) = args.search.as_deref() {
        app.input = search.to_string();
        app.caret_to_edge(true);
        app.dispatch(Intent::SetSearchText(search.to_string()));
    }
    ok
}
