//! Central [`AppState`] owned by the event loop.

use std::time::{Duration, Instant};

use crate::gallery::{
    DEFAULT_CATEGORIES, ExtractError, ExtractedPage, Gallery, PageControls, Taxonomy,
};
use crate::state::types::{FOCUS_ORDER, Focus};
use crate::theme::Settings;
use crate::widgets::{Carousel, Lightbox, NavMenu, SectionNav};

mod methods;
#[cfg(test)]
mod tests;

/// Interactive session state.
///
/// The [`Gallery`] owns all filter semantics; the rest is presentation state
/// that never feeds back into filtering.
#[derive(Debug)]
pub struct AppState {
    /// Filtering engine and derived view.
    pub gallery: Gallery,
    /// Page title shown in the header.
    pub title: String,
    /// Optional controls found on the source page.
    pub controls: PageControls,
    /// Settings in effect for this session.
    pub settings: Settings,
    /// Focused pane.
    pub focus: Focus,
    /// Raw search input as typed (the gallery keeps the normalized form).
    pub input: String,
    /// Caret position in `input`, in characters.
    pub caret: usize,
    /// Highlighted filter button.
    pub filter_cursor: usize,
    /// Highlighted chip.
    pub chip_cursor: usize,
    /// Selected card, as a position among visible items.
    pub selected: usize,
    /// Full-size viewer over the visible items.
    pub lightbox: Lightbox,
    /// Slides of the item shown in the lightbox, when it has media.
    pub carousel: Option<Carousel>,
    /// Navigation menu overlay.
    pub menu: NavMenu,
    /// Highlighted link in the open menu.
    pub menu_cursor: usize,
    /// Footer section dots following the focused pane.
    pub section_nav: Option<SectionNav>,
    /// When the latest gallery render happened; stagger delays count from here.
    pub reveal_started: Instant,
    /// Gallery render counter seen at `reveal_started`.
    pub(crate) seen_renders: u64,
}

/// What: Choose the closed category set for this session.
///
/// Inputs:
/// - `settings`: User settings (`categories` wins when set)
/// - `controls`: Controls found on the page (filter button values are next)
///
/// Output:
/// - The configured set, else the page's buttons, else the default four.
#[must_use]
pub fn resolve_taxonomy(settings: &Settings, controls: &PageControls) -> Taxonomy {
    if let Some(cats) = settings.categories.as_ref() {
        let configured = Taxonomy::new(cats);
        if !configured.is_empty() {
            return configured;
        }
    }
    let from_page = Taxonomy::new(&controls.filter_buttons);
    if from_page.is_empty() {
        Taxonomy::new(DEFAULT_CATEGORIES)
    } else {
        from_page
    }
}

impl AppState {
    /// What: Build the session over an extracted page.
    ///
    /// Inputs:
    /// - `page`: Extraction output
    /// - `settings`: Settings in effect
    ///
    /// Output:
    /// - `Err(ExtractError::NoItems)` when the page has no gallery items.
    pub fn new(page: ExtractedPage, settings: Settings) -> Result<Self, ExtractError> {
        let taxonomy = resolve_taxonomy(&settings, &page.controls);
        let gallery = Gallery::new(
            page.records,
            taxonomy,
            Duration::from_millis(settings.stagger_step_ms),
        )?;
        let seen_renders = gallery.renders();
        let mut app = Self {
            gallery,
            title: page.title.unwrap_or_else(|| "Work".to_string()),
            controls: page.controls,
            settings,
            focus: Focus::Gallery,
            input: String::new(),
            caret: 0,
            filter_cursor: 0,
            chip_cursor: 0,
            selected: 0,
            lightbox: Lightbox::default(),
            carousel: None,
            menu: NavMenu::default(),
            menu_cursor: 0,
            section_nav: SectionNav::new(FOCUS_ORDER.map(Focus::section_id)),
            reveal_started: Instant::now(),
            seen_renders,
        };
        app.set_focus(Focus::Gallery);
        Ok(app)
    }
}
