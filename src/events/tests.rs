use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::handle_event;
use crate::gallery::{ExtractedPage, ItemId, MediaItem, PageControls, ProjectRecord};
use crate::state::{AppState, Focus};
use crate::theme::Settings;

/// Five-project session; the first project has three slides.
fn app() -> AppState {
    let media = |n: usize| {
        (0..n)
            .map(|i| MediaItem {
                alt: format!("shot {i}"),
                caption: String::new(),
            })
            .collect::<Vec<_>>()
    };
    let records = vec![
        ProjectRecord::new(ItemId(0), "ux-ui", "figma", "Bank App", "Mobile banking")
            .with_media(media(3)),
        ProjectRecord::new(ItemId(1), "ux-ui", "", "Health Portal", ""),
        ProjectRecord::new(ItemId(2), "web-dev", "", "Shop", ""),
        ProjectRecord::new(ItemId(3), "graphic", "branding", "Cafe Logo", "Logo design"),
        ProjectRecord::new(ItemId(4), "other", "", "Zine", ""),
    ];
    let page = ExtractedPage {
        title: None,
        records,
        controls: PageControls::default(),
    };
    AppState::new(page, Settings::default()).expect("app")
}

/// Plain key press event.
fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Press each character of `s` in turn.
fn type_str(app: &mut AppState, s: &str) {
    for ch in s.chars() {
        handle_event(key(KeyCode::Char(ch)), app);
    }
}

#[test]
/// What: "/" focuses search from the grid and is typed once inside it
///
/// - Input: "/" twice, then "x"
/// - Output: Focus Search; input "/x" (second slash typed)
fn slash_focuses_then_types() {
    let mut app = app();
    assert_eq!(app.focus, Focus::Gallery);
    handle_event(key(KeyCode::Char('/')), &mut app);
    assert_eq!(app.focus, Focus::Search);
    assert!(app.input.is_empty());
    type_str(&mut app, "/x");
    assert_eq!(app.input, "/x");
}

#[test]
/// What: Escape clears a non-empty search first, then blurs
///
/// - Input: "/" "logo" Esc Esc
/// - Output: First Esc empties search (focus kept), second moves focus to grid
fn escape_clears_then_blurs() {
    let mut app = app();
    handle_event(key(KeyCode::Char('/')), &mut app);
    type_str(&mut app, "logo");
    assert_eq!(app.gallery.view().visible_count, 1);

    handle_event(key(KeyCode::Esc), &mut app);
    assert_eq!(app.focus, Focus::Search);
    assert!(app.input.is_empty());
    assert_eq!(app.gallery.view().visible_count, 5);

    let renders = app.gallery.renders();
    handle_event(key(KeyCode::Esc), &mut app);
    assert_eq!(app.focus, Focus::Gallery);
    assert_eq!(app.gallery.renders(), renders);
}

#[test]
/// What: Tab cycles panes; Enter on a filter button selects it
///
/// - Input: Tab (Search), Tab (Filters), Right, Enter
/// - Output: Category "ux-ui" with 2 visible and an active chip
fn tab_and_filter_button() {
    let mut app = app();
    handle_event(key(KeyCode::Tab), &mut app);
    assert_eq!(app.focus, Focus::Search);
    handle_event(key(KeyCode::Tab), &mut app);
    assert_eq!(app.focus, Focus::Filters);
    handle_event(key(KeyCode::Right), &mut app);
    handle_event(key(KeyCode::Enter), &mut app);
    assert_eq!(app.gallery.state().category(), "ux-ui");
    assert_eq!(app.gallery.view().visible_count, 2);
    assert_eq!(app.gallery.view().chips.chips[0].label, "UX/UI");
}

#[test]
/// What: "q" quits outside text input but is typed inside it; Ctrl+C always quits
///
/// - Input: q in grid, q in search, Ctrl+C in search
/// - Output: true, false (typed), true
fn quit_keys() {
    let mut app = app();
    assert!(handle_event(key(KeyCode::Char('q')), &mut app));
    app.set_focus(Focus::Search);
    assert!(!handle_event(key(KeyCode::Char('q')), &mut app));
    assert_eq!(app.input, "q");
    let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(handle_event(ctrl_c, &mut app));
}

#[test]
/// What: Key releases are ignored
///
/// - Input: Release event for "q"
/// - Output: No exit
fn release_is_ignored() {
    let mut app = app();
    let mut ke = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
    ke.kind = KeyEventKind::Release;
    assert!(!handle_event(CEvent::Key(ke), &mut app));
}

#[test]
/// What: Lightbox swallows keys, steps its carousel and swipes with the mouse
///
/// - Input: Enter, "]", drag 50 columns left, "q", Esc
/// - Output: Carousel at slide 2 after key + swipe; "q" closes instead of quitting
fn lightbox_keys_and_swipe() {
    let mut app = app();
    handle_event(key(KeyCode::Enter), &mut app);
    assert!(app.lightbox.is_open());
    handle_event(key(KeyCode::Char(']')), &mut app);
    assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(1));

    let mouse = |kind, column| {
        CEvent::Mouse(MouseEvent {
            kind,
            column,
            row: 5,
            modifiers: KeyModifiers::empty(),
        })
    };
    handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 60), &mut app);
    handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 10), &mut app);
    assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(2));

    assert!(!handle_event(key(KeyCode::Char('q')), &mut app));
    assert!(!app.lightbox.is_open());
    assert_eq!(app.focus, Focus::Gallery);
}

#[test]
/// What: Menu overlay captures navigation and Escape closes it
///
/// - Input: "?" then Down, Down, Enter; "?" then Esc
/// - Output: Focus jumps to Chips; menu closed both times
fn menu_overlay_navigation() {
    let mut app = app();
    handle_event(key(KeyCode::Char('?')), &mut app);
    assert!(app.menu.is_open());
    handle_event(key(KeyCode::Down), &mut app);
    handle_event(key(KeyCode::Down), &mut app);
    handle_event(key(KeyCode::Enter), &mut app);
    assert!(!app.menu.is_open());
    assert_eq!(app.focus, Focus::Chips);

    handle_event(key(KeyCode::Char('?')), &mut app);
    handle_event(key(KeyCode::Esc), &mut app);
    assert!(!app.menu.is_open());
}

#[test]
/// What: "r" resets both filters from the chip row and focuses search
///
/// - Input: Category + search active, focus Chips, "r"
/// - Output: No active filter, focus Search, all visible
fn reset_key() {
    let mut app = app();
    app.dispatch(crate::gallery::Intent::SetCategory("graphic".into()));
    app.dispatch(crate::gallery::Intent::SetSearchText("logo".into()));
    app.set_focus(Focus::Chips);
    handle_event(key(KeyCode::Char('r')), &mut app);
    assert!(!app.gallery.state().is_active());
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.gallery.view().visible_count, 5);
}

#[test]
/// What: Ctrl+R resets from inside the search input instead of typing
///
/// - Input: Category + search active, focus Search, Ctrl+R
/// - Output: No active filter, empty input, all visible
fn ctrl_r_resets_from_search() {
    let mut app = app();
    app.dispatch(crate::gallery::Intent::SetCategory("graphic".into()));
    app.set_focus(Focus::Search);
    for ch in "logo".chars() {
        handle_event(key(KeyCode::Char(ch)), &mut app);
    }
    handle_event(key(KeyCode::Char('r')), &mut app);
    assert_eq!(app.input, "logor");
    handle_event(
        CEvent::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
        &mut app,
    );
    assert!(!app.gallery.state().is_active());
    assert!(app.input.is_empty());
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.gallery.view().visible_count, 5);
}
