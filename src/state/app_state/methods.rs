use std::time::Instant;

use crate::gallery::input::FocusTarget;
use crate::gallery::{ChipKind, Intent, ItemView, ProjectRecord};
use crate::state::types::{FOCUS_ORDER, Focus};
use crate::widgets::{Carousel, LightboxKey};

use super::AppState;

impl AppState {
    /// What: Apply an intent to the gallery and resync presentation state.
    ///
    /// Inputs:
    /// - `intent`: Typed user intent
    ///
    /// Output:
    /// - `true` when the gallery re-rendered.
    ///
    /// Details:
    /// - Restarts the reveal clock on every render.
    /// - Cursors are clamped to the new view; the raw input is emptied only by
    ///   intents that clear the search (clear, search chip removal, reset).
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let clears = matches!(
            intent,
            Intent::ClearSearch | Intent::RemoveChip(ChipKind::Search) | Intent::Reset
        );
        let ran = self.gallery.dispatch(intent);
        if clears {
            self.input.clear();
            self.caret = 0;
        }
        self.sync_after_render(Instant::now());
        ran
    }

    /// Restart the reveal clock after a render and clamp cursors to the new view.
    pub(crate) fn sync_after_render(&mut self, now: Instant) {
        if self.gallery.renders() != self.seen_renders {
            self.seen_renders = self.gallery.renders();
            self.reveal_started = now;
            self.selected = 0;
        }
        let visible = self.gallery.view().visible_count;
        self.selected = self.selected.min(visible.saturating_sub(1));
        let chips = self.gallery.view().chips.chips.len();
        self.chip_cursor = self.chip_cursor.min(chips.saturating_sub(1));
    }

    /// Move focus; never touches the gallery.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if let Some(nav) = self.section_nav.as_mut() {
            nav.observe(focus.section_id());
        }
    }

    /// How the focused pane classifies for shortcut routing.
    #[must_use]
    pub fn focus_target(&self) -> FocusTarget {
        if self.focus == Focus::Search {
            FocusTarget::SearchInput
        } else {
            FocusTarget::Elsewhere
        }
    }

    /// Reset both filters and put the caret in the search input.
    pub fn reset_filters(&mut self) {
        self.dispatch(Intent::Reset);
        self.filter_cursor = 0;
        self.set_focus(Focus::Search);
    }

    /// Clear the search text and put the caret in the search input.
    pub fn clear_search(&mut self) {
        self.dispatch(Intent::ClearSearch);
        self.set_focus(Focus::Search);
    }

    /// Select the category under the filter cursor.
    pub fn activate_filter_cursor(&mut self) {
        let value = self
            .gallery
            .taxonomy()
            .buttons()
            .nth(self.filter_cursor)
            .map(str::to_string);
        if let Some(value) = value {
            self.dispatch(Intent::SetCategory(value));
        }
    }

    /// Move the filter cursor by `delta`, wrapping over the buttons.
    pub fn move_filter_cursor(&mut self, delta: isize) {
        let len = self.gallery.taxonomy().buttons().count();
        self.filter_cursor = wrap_index(self.filter_cursor, delta, len);
    }

    /// Move the chip cursor by `delta`, wrapping over the chips.
    pub fn move_chip_cursor(&mut self, delta: isize) {
        let len = self.gallery.view().chips.chips.len();
        self.chip_cursor = wrap_index(self.chip_cursor, delta, len);
    }

    /// Remove the chip under the chip cursor.
    pub fn remove_chip_at_cursor(&mut self) {
        let kind: Option<ChipKind> = self
            .gallery
            .view()
            .chips
            .chips
            .get(self.chip_cursor)
            .map(|c| c.kind);
        if let Some(kind) = kind {
            self.dispatch(Intent::RemoveChip(kind));
            if kind == ChipKind::Category {
                self.filter_cursor = 0;
            }
            if self.gallery.view().chips.chips.is_empty() {
                self.set_focus(Focus::Search);
            }
        }
    }

    /// Send the raw input to the gallery as the search text.
    fn push_search(&mut self) {
        let raw = self.input.clone();
        self.dispatch(Intent::SetSearchText(raw));
    }

    /// Byte offset of the `char_idx`-th character, or the input length.
    fn byte_at(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(b, _)| b)
    }

    /// Insert `ch` at the caret and re-filter.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_at(self.caret);
        self.input.insert(at, ch);
        self.caret += 1;
        self.push_search();
    }

    /// Delete the character before the caret.
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_at(self.caret - 1);
        self.input.remove(at);
        self.caret -= 1;
        self.push_search();
    }

    /// Delete the character under the caret.
    pub fn delete_forward(&mut self) {
        if self.caret >= self.input.chars().count() {
            return;
        }
        let at = self.byte_at(self.caret);
        self.input.remove(at);
        self.push_search();
    }

    /// Move the caret by `delta` characters, clamped to the input.
    pub fn move_caret(&mut self, delta: isize) {
        let len = self.input.chars().count();
        self.caret = self.caret.saturating_add_signed(delta).min(len);
    }

    /// Caret to the start (`false`) or end (`true`) of the input.
    pub fn caret_to_edge(&mut self, end: bool) {
        self.caret = if end { self.input.chars().count() } else { 0 };
    }

    /// Visible records in document order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&ProjectRecord> {
        self.gallery.visible_records().collect()
    }

    /// The selected card's record.
    #[must_use]
    pub fn selected_record(&self) -> Option<&ProjectRecord> {
        self.gallery.visible_records().nth(self.selected)
    }

    /// Move the card selection by `delta`, clamped to the visible items.
    pub fn move_selection(&mut self, delta: isize) {
        let visible = self.gallery.view().visible_count;
        if visible == 0 {
            return;
        }
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(visible - 1);
    }

    /// What: Whether a card has finished its staggered reveal at `now`.
    ///
    /// Inputs:
    /// - `item`: Presentation state of the card
    /// - `now`: Current time
    ///
    /// Output:
    /// - `false` for hidden items and for visible ones still waiting on their delay.
    #[must_use]
    pub fn is_revealed(&self, item: &ItemView, now: Instant) -> bool {
        item.stagger
            .is_some_and(|delay| now.saturating_duration_since(self.reveal_started) >= delay)
    }

    /// Whether any visible card is still waiting to appear.
    #[must_use]
    pub fn reveal_pending(&self, now: Instant) -> bool {
        self.gallery
            .view()
            .items
            .iter()
            .any(|i| i.visible && !self.is_revealed(i, now))
    }

    /// Carousel over the selected project's media; captions fall back to alt text.
    fn rebuild_carousel(&mut self) {
        self.carousel = self.selected_record().and_then(|r| {
            if r.media().is_empty() {
                return None;
            }
            Carousel::new(
                r.media()
                    .iter()
                    .map(|m| {
                        if m.caption.is_empty() {
                            m.alt.clone()
                        } else {
                            m.caption.clone()
                        }
                    })
                    .collect(),
            )
        });
    }

    /// Open the lightbox on the selected card.
    pub fn open_lightbox(&mut self) {
        let visible = self.gallery.view().visible_count;
        self.lightbox.open(self.selected, visible);
        if self.lightbox.is_open() {
            self.rebuild_carousel();
            tracing::debug!(index = self.selected, "lightbox opened");
        }
    }

    /// What: Route a key to the open lightbox.
    ///
    /// Inputs:
    /// - `key`: Lightbox key
    ///
    /// Output:
    /// - `true` when consumed.
    ///
    /// Details:
    /// - Closing returns the selection (and focus) to the item last shown.
    pub fn lightbox_key(&mut self, key: LightboxKey) -> bool {
        if !self.lightbox.handle_key(key) {
            return false;
        }
        self.selected = self.lightbox.current();
        if self.lightbox.is_open() {
            self.rebuild_carousel();
        } else {
            self.carousel = None;
            self.set_focus(Focus::Gallery);
        }
        true
    }

    /// Activate the highlighted menu link: close the menu and jump to its section.
    pub fn activate_menu_link(&mut self) {
        let target = FOCUS_ORDER
            .get(self.menu_cursor)
            .map(|f| f.section_id())
            .and_then(|id| self.section_nav.as_ref().and_then(|n| n.target(id)))
            .and_then(Focus::from_section);
        self.menu.link_activated();
        if let Some(focus) = target {
            self.set_focus(focus);
        }
    }

    /// Move the menu cursor by `delta`, wrapping over the links.
    pub fn move_menu_cursor(&mut self, delta: isize) {
        self.menu_cursor = wrap_index(self.menu_cursor, delta, FOCUS_ORDER.len());
    }
}

/// `current + delta` wrapped into `0..len`.
fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i = isize::try_from(len).unwrap_or(isize::MAX);
    let cur = isize::try_from(current).unwrap_or(0);
    usize::try_from((cur + delta).rem_euclid(len_i)).unwrap_or(0)
}
