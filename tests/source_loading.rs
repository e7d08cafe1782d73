//! End-to-end loading: work page on disk, session construction, startup
//! filters and the non-interactive listings.

use std::path::{Path, PathBuf};

use clap::Parser;

use folio::args::{Args, apply_startup_filters, render_json, render_listing};
use folio::gallery::{ExtractError, SourceError, load_page};
use folio::state::AppState;
use folio::theme::{Settings, parse_settings};

const WORK_PAGE: &str = r#"<!doctype html>
<html><head><title>Ada Lovelace | Work</title></head><body>
  <header><nav class="nav-menu"></nav></header>
  <input id="project-search" type="search"><button class="search-clear" hidden>x</button>
  <div class="filters">
    <button class="filter-btn active" data-filter="all">All <span class="filter-count" data-count="all"></span></button>
    <button class="filter-btn" data-filter="ux-ui">UX/UI <span class="filter-count" data-count="ux-ui"></span></button>
    <button class="filter-btn" data-filter="web-dev">Web Dev <span class="filter-count" data-count="web-dev"></span></button>
    <button class="filter-btn" data-filter="graphic">Graphic <span class="filter-count" data-count="graphic"></span></button>
  </div>
  <div class="active-filters" hidden>
    <div class="active-filters-tags"></div><button class="clear-all-filters">Clear all</button>
  </div>
  <p class="results-count"></p>
  <div class="projects-grid">
    <article class="project-card" data-category="ux-ui" data-tags="figma research">
      <img src="bank-1.png" alt="Dashboard" data-caption="Budget overview">
      <img src="bank-2.png" alt="Transfers">
      <h3 class="project-title">Bank App</h3>
      <p class="project-description">Mobile banking redesign</p>
    </article>
    <article class="project-card" data-category="web-dev" data-tags="react">
      <h3 class="project-title">Shop</h3>
      <p class="project-description">Storefront for a bakery</p>
    </article>
    <article class="project-card" data-category="graphic" data-tags="branding">
      <h3 class="project-title">Cafe Logo</h3>
    </article>
  </div>
  <div class="no-results" hidden><p>No projects found</p><button class="reset-filters-btn">Reset</button></div>
</body></html>"#;

/// Write `content` to `name` inside a fresh temp dir.
fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write page");
    (dir, path)
}

/// Load `path` and build a session with `settings`.
fn session(path: &Path, settings: Settings) -> AppState {
    let page = load_page(path).expect("load page");
    AppState::new(page, settings).expect("app state")
}

#[test]
/// What: A rendered work page becomes a session with its title and filter buttons
///
/// - Input: HTML page with three cards and three category buttons
/// - Output: Three records, taxonomy from the page buttons, media captured
fn html_page_builds_session() {
    let (_dir, path) = write_temp("work.html", WORK_PAGE);
    let app = session(&path, Settings::default());
    assert_eq!(app.title, "Ada Lovelace | Work");
    assert_eq!(app.gallery.records().len(), 3);
    assert_eq!(
        app.gallery.taxonomy().categories(),
        ["ux-ui", "web-dev", "graphic"]
    );
    let bank = &app.gallery.records()[0];
    assert_eq!(bank.tags(), ["figma", "research"]);
    assert_eq!(bank.media().len(), 2);
    assert_eq!(bank.media()[0].caption, "Budget overview");
    assert_eq!(app.gallery.badges().get("graphic"), Some(1));
    assert_eq!(app.gallery.view().results_text, "3 projects");
}

#[test]
/// What: Pages missing a required container fail closed with a named error
///
/// - Input: Work page without the results count paragraph
/// - Output: `SourceError::Extract` wrapping `MissingContainer`
fn missing_container_fails_closed() {
    let broken = WORK_PAGE.replace(r#"<p class="results-count"></p>"#, "");
    let (_dir, path) = write_temp("work.html", &broken);
    let err = load_page(&path).expect_err("must fail closed");
    match &err {
        SourceError::Extract {
            source: ExtractError::MissingContainer { selector, .. },
            ..
        } => assert_eq!(*selector, ".results-count"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("results count"));
}

#[test]
/// What: Pages without cards are rejected before anything else is checked
///
/// - Input: Work page with the grid emptied
/// - Output: `ExtractError::NoItems`
fn page_without_cards_is_rejected() {
    let start = WORK_PAGE.find("<article").expect("first card");
    let end = WORK_PAGE.rfind("</article>").expect("last card") + "</article>".len();
    let empty = format!("{}{}", &WORK_PAGE[..start], &WORK_PAGE[end..]);
    let (_dir, path) = write_temp("work.html", &empty);
    let err = load_page(&path).expect_err("no items");
    assert!(matches!(
        err,
        SourceError::Extract {
            source: ExtractError::NoItems,
            ..
        }
    ));
}

#[test]
/// What: Manifests with a title and list-form tags load like pages
///
/// - Input: `projects.json` with two entries
/// - Output: Title from the manifest, default taxonomy, list tags flattened
fn titled_manifest_loads() {
    let manifest = r#"{
        "title": "Studio",
        "projects": [
            {"category": "UX-UI", "tags": ["Figma", "Mobile"], "title": "Bank App"},
            {"category": "other", "tags": "zine print", "title": "Zine",
             "media": [{"alt": "Cover"}]}
        ]
    }"#;
    let (_dir, path) = write_temp("projects.json", manifest);
    let app = session(&path, Settings::default());
    assert_eq!(app.title, "Studio");
    assert_eq!(
        app.gallery.taxonomy().categories(),
        ["ux-ui", "web-dev", "graphic", "other"]
    );
    assert_eq!(app.gallery.records()[0].tags(), ["figma", "mobile"]);
    assert_eq!(app.gallery.records()[1].media()[0].alt, "Cover");
}

#[test]
/// What: Configured categories override the page's filter buttons
///
/// - Input: settings.conf text restricting categories to graphic and web-dev
/// - Output: Taxonomy follows settings; ux-ui becomes unselectable
fn settings_categories_override_page() {
    let mut settings = Settings::default();
    parse_settings("categories = Graphic, web-dev\nstagger_step_ms = 0\n", &mut settings);
    let (_dir, path) = write_temp("work.html", WORK_PAGE);
    let mut app = session(&path, settings);
    assert_eq!(app.gallery.taxonomy().categories(), ["graphic", "web-dev"]);
    let args = Args::try_parse_from(["folio", "work.html", "-c", "ux-ui"]).expect("args");
    assert!(!apply_startup_filters(&args, &mut app));
    assert_eq!(app.gallery.state().category(), "all");
}

#[test]
/// What: Startup filters feed the text listing
///
/// - Input: `--category web-dev --search STORE --list`
/// - Output: Filtered count, bracketed active button, chips and the single match
fn listing_reflects_startup_filters() {
    let (_dir, path) = write_temp("work.html", WORK_PAGE);
    let mut app = session(&path, Settings::default());
    let args = Args::try_parse_from(["folio", "work.html", "-c", "web-dev", "-s", "STORE", "-l"])
        .expect("args");
    assert!(apply_startup_filters(&args, &mut app));
    assert_eq!(app.input, "STORE");

    let text = render_listing(&app, false);
    assert!(text.starts_with("Ada Lovelace | Work - Showing 1 project\n"));
    assert!(text.contains("[Web Dev (1)]"));
    assert!(text.contains("Active filters: Web Dev, \"store\""));
    assert!(text.contains("1. Shop [Web Dev] - Storefront for a bakery  #react"));
    assert!(!text.contains("Bank App"));
}

#[test]
/// What: JSON listing exposes the view and per-record visibility
///
/// - Input: Search "logo"
/// - Output: Parsable JSON with one visible record and the filtered count text
fn json_listing_reports_visibility() {
    let (_dir, path) = write_temp("work.html", WORK_PAGE);
    let mut app = session(&path, Settings::default());
    let args = Args::try_parse_from(["folio", "work.html", "-s", "logo", "--json"]).expect("args");
    apply_startup_filters(&args, &mut app);

    let json = render_json(&app).expect("serialize");
    let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(v["search"], "logo");
    assert_eq!(v["category"], "all");
    assert_eq!(v["view"]["results_text"], "Showing 1 project");
    let visible: Vec<&str> = v["records"]
        .as_array()
        .expect("records")
        .iter()
        .filter(|r| r["visible"] == true)
        .filter_map(|r| r["title"].as_str())
        .collect();
    assert_eq!(visible, vec!["Cafe Logo"]);
}

#[test]
/// What: Buttons without a count slot on the page print without a badge
///
/// - Input: Work page whose "graphic" button lacks its count span
/// - Output: "Graphic" printed bare; other buttons keep their counts
fn listing_omits_undeclared_badges() {
    let page = WORK_PAGE.replace(
        r#"Graphic <span class="filter-count" data-count="graphic"></span>"#,
        "Graphic",
    );
    let (_dir, path) = write_temp("work.html", &page);
    let app = session(&path, Settings::default());
    let text = render_listing(&app, false);
    assert!(text.contains("Graphic\n"));
    assert!(!text.contains("Graphic ("));
    assert!(text.contains("Web Dev (1)"));
    assert!(text.contains("[All (3)]"));
}
