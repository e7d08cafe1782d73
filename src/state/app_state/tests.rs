use std::time::{Duration, Instant};

use super::*;
use crate::gallery::{ChipKind, Intent, ItemId, MediaItem, ProjectRecord};
use crate::widgets::LightboxKey;

/// Page titled "Work" holding `records` with every control available.
fn page(records: Vec<ProjectRecord>) -> ExtractedPage {
    ExtractedPage {
        title: Some("Work".into()),
        records,
        controls: PageControls::default(),
    }
}

/// Five-project session; the first project has two slides.
fn sample() -> AppState {
    let records = vec![
        ProjectRecord::new(ItemId(0), "ux-ui", "figma, research", "Bank App", "Mobile banking")
            .with_media(vec![
                MediaItem {
                    alt: "Home screen".into(),
                    caption: String::new(),
                },
                MediaItem {
                    alt: "Flow".into(),
                    caption: "User flow".into(),
                },
            ]),
        ProjectRecord::new(ItemId(1), "ux-ui", "", "Health Portal", "Patient dashboard"),
        ProjectRecord::new(ItemId(2), "web-dev", "react", "Shop", "Storefront"),
        ProjectRecord::new(ItemId(3), "graphic", "branding", "Cafe Logo", "Logo design"),
        ProjectRecord::new(ItemId(4), "other", "", "Zine", "Print zine"),
    ];
    AppState::new(page(records), Settings::default()).expect("app")
}

#[test]
/// What: Category source priority is settings, then page buttons, then defaults
///
/// - Input: Three combinations of settings/page controls
/// - Output: Matching taxonomy each time
fn taxonomy_resolution_order() {
    let mut settings = Settings::default();
    let mut controls = PageControls::default();
    assert_eq!(
        resolve_taxonomy(&settings, &controls).categories(),
        DEFAULT_CATEGORIES
    );

    controls.filter_buttons = vec!["all".into(), "Print".into(), "motion".into()];
    assert_eq!(
        resolve_taxonomy(&settings, &controls).categories(),
        ["print", "motion"]
    );

    settings.categories = Some(vec!["3d".into()]);
    assert_eq!(resolve_taxonomy(&settings, &controls).categories(), ["3d"]);
}

#[test]
/// What: An empty page refuses to build a session
///
/// - Input: No records
/// - Output: `ExtractError::NoItems`
fn empty_page_fails_closed() {
    let err = AppState::new(page(Vec::new()), Settings::default()).expect_err("no items");
    assert!(matches!(err, ExtractError::NoItems));
}

#[test]
/// What: Typing edits the raw input and filters on its normalized form
///
/// - Input: "LO" typed, caret moved, "g" inserted before "O", then backspace
/// - Output: Search text follows the edits; raw keeps case
fn typing_filters_through_gallery() {
    let mut app = sample();
    app.set_focus(Focus::Search);
    app.insert_char('L');
    app.insert_char('O');
    app.move_caret(-1);
    app.insert_char('g');
    assert_eq!(app.input, "LgO");
    assert_eq!(app.gallery.state().search_text(), "lgo");
    assert_eq!(app.gallery.view().visible_count, 0);

    app.caret_to_edge(true);
    app.backspace();
    app.backspace();
    app.insert_char('o');
    app.insert_char('g');
    app.insert_char('o');
    assert_eq!(app.gallery.state().search_text(), "logo");
    assert_eq!(app.gallery.view().visible_count, 1);

    app.caret_to_edge(false);
    app.delete_forward();
    assert_eq!(app.input, "ogo");
}

#[test]
/// What: Clearing and resetting empty the raw input and move focus to search
///
/// - Input: Category + search, then clear_search, then reset_filters
/// - Output: Input emptied; category survives clear; everything visible after reset
fn clear_and_reset_focus_search() {
    let mut app = sample();
    app.dispatch(Intent::SetCategory("ux-ui".into()));
    for ch in "bank".chars() {
        app.insert_char(ch);
    }
    app.set_focus(Focus::Gallery);
    app.clear_search();
    assert!(app.input.is_empty());
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.gallery.state().category(), "ux-ui");

    app.set_focus(Focus::Chips);
    app.reset_filters();
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.gallery.view().visible_count, 5);
    assert!(!app.gallery.view().chips.visible);
}

#[test]
/// What: Removing the chip under the cursor clears exactly that dimension
///
/// - Input: Category + search chips; cursor on the search chip
/// - Output: Search chip removed, category chip remains, cursor clamped
fn remove_chip_under_cursor() {
    let mut app = sample();
    app.dispatch(Intent::SetCategory("ux-ui".into()));
    app.dispatch(Intent::SetSearchText("portal".into()));
    app.set_focus(Focus::Chips);
    app.move_chip_cursor(1);
    app.remove_chip_at_cursor();
    let chips = &app.gallery.view().chips.chips;
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].kind, ChipKind::Category);
    assert_eq!(app.chip_cursor, 0);
    assert_eq!(app.focus, Focus::Chips);

    app.remove_chip_at_cursor();
    assert!(!app.gallery.state().is_active());
    assert_eq!(app.focus, Focus::Search);
}

#[test]
/// What: Filter cursor wraps and activates the button under it
///
/// - Input: Cursor moved back from "all", then forward twice
/// - Output: Wraps to the last category; activation selects "ux-ui"
fn filter_cursor_wraps_and_selects() {
    let mut app = sample();
    app.move_filter_cursor(-1);
    assert_eq!(app.filter_cursor, 4);
    app.move_filter_cursor(2);
    assert_eq!(app.filter_cursor, 1);
    app.activate_filter_cursor();
    assert_eq!(app.gallery.state().category(), "ux-ui");
    assert_eq!(app.gallery.view().visible_count, 2);
}

#[test]
/// What: Reveal timing follows stagger delays from the last render
///
/// - Input: Fresh session with 60 ms step
/// - Output: Nothing revealed at t0; first card at 60 ms; all by 300 ms
fn reveal_follows_stagger() {
    let app = sample();
    let t0 = app.reveal_started;
    let items = app.gallery.view().items.clone();
    assert!(!app.is_revealed(&items[0], t0));
    assert!(app.is_revealed(&items[0], t0 + Duration::from_millis(60)));
    assert!(!app.is_revealed(&items[1], t0 + Duration::from_millis(60)));
    assert!(app.reveal_pending(t0 + Duration::from_millis(299)));
    assert!(!app.reveal_pending(t0 + Duration::from_millis(300)));
}

#[test]
/// What: A re-render restarts the reveal clock and selection
///
/// - Input: Selection moved, then a category change
/// - Output: Selection back to 0, reveal clock moved forward
fn render_restarts_reveal() {
    let mut app = sample();
    app.move_selection(3);
    assert_eq!(app.selected, 3);
    let before = app.reveal_started;
    std::thread::sleep(Duration::from_millis(2));
    app.dispatch(Intent::SetCategory("other".into()));
    assert_eq!(app.selected, 0);
    assert!(app.reveal_started > before);
    assert!(Instant::now() >= app.reveal_started);
}

#[test]
/// What: Lightbox navigation clamps, carries the carousel and restores selection on close
///
/// - Input: Open on card 0, Right, Right past the end of a 2-item view, Escape
/// - Output: Carousel only for the card with media; selection ends on card 1
fn lightbox_round_trip() {
    let mut app = sample();
    app.dispatch(Intent::SetCategory("ux-ui".into()));
    app.open_lightbox();
    assert!(app.lightbox.is_open());
    let carousel = app.carousel.as_ref().expect("media carousel");
    assert_eq!(carousel.len(), 2);
    assert_eq!(carousel.caption(), "Home screen");

    assert!(app.lightbox_key(LightboxKey::Right));
    assert!(app.carousel.is_none());
    assert!(app.lightbox_key(LightboxKey::Right));
    assert_eq!(app.lightbox.current(), 1);

    assert!(app.lightbox_key(LightboxKey::Escape));
    assert!(!app.lightbox.is_open());
    assert_eq!(app.selected, 1);
    assert_eq!(app.focus, Focus::Gallery);
    assert!(!app.lightbox_key(LightboxKey::Left));
}

#[test]
/// What: Menu links close the menu and jump to their section; focus changes never render
///
/// - Input: Menu opened, cursor on "filters", activated
/// - Output: Menu closed, focus on Filters, footer dot follows, render count unchanged
fn menu_link_moves_focus_without_render() {
    let mut app = sample();
    let renders = app.gallery.renders();
    app.menu.toggle();
    app.move_menu_cursor(1);
    app.activate_menu_link();
    assert!(!app.menu.is_open());
    assert_eq!(app.focus, Focus::Filters);
    assert_eq!(
        app.section_nav.as_ref().and_then(|n| n.active()),
        Some("filters")
    );
    assert_eq!(app.gallery.renders(), renders);
}

#[test]
/// What: Whitespace-only input survives unrelated intents
///
/// - Input: "  " typed, then a category click; then the search chip removed
/// - Output: Input kept after the category change; emptied by the chip removal
fn whitespace_input_survives_category_change() {
    let mut app = sample();
    app.insert_char(' ');
    app.insert_char(' ');
    assert!(!app.gallery.state().has_search());
    app.dispatch(Intent::SetCategory("graphic".into()));
    assert_eq!(app.input, "  ");
    assert_eq!(app.caret, 2);

    for ch in "logo".chars() {
        app.insert_char(ch);
    }
    assert!(app.gallery.state().has_search());
    app.dispatch(Intent::RemoveChip(ChipKind::Search));
    assert!(app.input.is_empty());
    assert_eq!(app.caret, 0);
}
