//! View synchronizer: turns a [`VisibilityResult`] into per-item presentation
//! state and the aggregate gallery view (count text, empty state, layout).

use std::time::Duration;

use serde::Serialize;

use super::chips::ChipBar;
use super::filter::FilterState;
use super::matcher::VisibilityResult;
use super::record::{ALL, ItemId};

/// Default increment between successive reveal delays.
pub const DEFAULT_STAGGER_STEP: Duration = Duration::from_millis(60);

/// Layout mode of the gallery container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryLayout {
    /// Results exist and are laid out as a grid.
    Grid,
    /// No results; the container is not displayed.
    Hidden,
}

/// Presentation state of one gallery item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Handle of the item.
    pub id: ItemId,
    /// Whether the item is shown.
    pub visible: bool,
    /// Reveal delay for visible items, relative to the latest render.
    #[serde(serialize_with = "serialize_millis")]
    pub stagger: Option<Duration>,
}

/// Everything the core writes back into the page on one render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Per-item state in document order.
    pub items: Vec<ItemView>,
    /// Number of visible items.
    pub visible_count: usize,
    /// Set when nothing matches.
    pub no_results: bool,
    /// Layout of the gallery container.
    pub layout: GalleryLayout,
    /// Results count line, e.g. "Showing 3 projects".
    pub results_text: String,
    /// Active-filter chips.
    pub chips: ChipBar,
    /// Category whose filter button is marked active.
    pub active_category: String,
    /// Whether the clear-search control is shown.
    pub search_clear_visible: bool,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            visible_count: 0,
            no_results: true,
            layout: GalleryLayout::Hidden,
            results_text: results_text(0, false),
            chips: ChipBar::default(),
            active_category: ALL.to_string(),
            search_clear_visible: false,
        }
    }
}

impl PageView {
    /// What: Apply a visibility result to every item and recompute aggregates.
    ///
    /// Inputs:
    /// - `result`: Fresh evaluation of all records
    /// - `state`: Filter state the result was computed from
    /// - `step`: Stagger increment
    ///
    /// Output:
    /// - Mutates the view in place; prior item state is overwritten, so
    ///   applying the same result twice yields the same view.
    ///
    /// Details:
    /// - The n-th visible item (counting from zero among visible items only)
    ///   gets a delay of `(n + 1) * step`; hidden items get none.
    pub fn sync(&mut self, result: &VisibilityResult, state: &FilterState, step: Duration) {
        self.items.clear();
        let mut position: u32 = 0;
        for (id, visible) in result.iter() {
            let stagger = if visible {
                position = position.saturating_add(1);
                Some(step.saturating_mul(position))
            } else {
                None
            };
            self.items.push(ItemView {
                id,
                visible,
                stagger,
            });
        }
        self.visible_count = result.visible_count();
        self.no_results = self.visible_count == 0;
        self.layout = if self.no_results {
            GalleryLayout::Hidden
        } else {
            GalleryLayout::Grid
        };
        self.results_text = results_text(self.visible_count, state.is_active());
        self.active_category = state.category().to_string();
        self.search_clear_visible = state.has_search();
    }

    /// Visible item handles in document order.
    pub fn visible_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().filter(|i| i.visible).map(|i| i.id)
    }
}

/// What: Format the results count line.
///
/// Inputs:
/// - `count`: Number of visible projects
/// - `filtered`: Whether any filter dimension is active
///
/// Output:
/// - `"{count} project(s)"`, prefixed with `"Showing "` when filtered.
#[must_use]
pub fn results_text(count: usize, filtered: bool) -> String {
    let noun = if count == 1 { "project" } else { "projects" };
    if filtered {
        format!("Showing {count} {noun}")
    } else {
        format!("{count} {noun}")
    }
}

/// Serialize a stagger delay as whole milliseconds.
#[allow(clippy::ref_option)]
fn serialize_millis<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(d) => serializer.serialize_some(&u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::record::{ProjectRecord, Taxonomy};

    fn records() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::new(ItemId(0), "ux-ui", "", "Alpha", ""),
            ProjectRecord::new(ItemId(1), "graphic", "", "Beta", ""),
            ProjectRecord::new(ItemId(2), "ux-ui", "", "Gamma", ""),
        ]
    }

    #[test]
    /// What: Stagger delays follow visible position, not document position
    ///
    /// - Input: Category "ux-ui" hides the middle record
    /// - Output: Items 0 and 2 get 60ms and 120ms; item 1 none
    fn sync_staggers_by_visible_position() {
        let mut state = FilterState::default();
        state.apply_category("ux-ui", &Taxonomy::default());
        let result = VisibilityResult::evaluate(&records(), &state);
        let mut view = PageView::default();
        view.sync(&result, &state, DEFAULT_STAGGER_STEP);
        assert_eq!(view.items[0].stagger, Some(Duration::from_millis(60)));
        assert_eq!(view.items[1].stagger, None);
        assert!(!view.items[1].visible);
        assert_eq!(view.items[2].stagger, Some(Duration::from_millis(120)));
        assert_eq!(view.results_text, "Showing 2 projects");
        assert_eq!(view.layout, GalleryLayout::Grid);
    }

    #[test]
    /// What: Re-applying the same result does not accumulate state
    ///
    /// - Input: Same result synced twice
    /// - Output: Identical views
    fn sync_is_idempotent() {
        let state = FilterState::default();
        let result = VisibilityResult::evaluate(&records(), &state);
        let mut view = PageView::default();
        view.sync(&result, &state, DEFAULT_STAGGER_STEP);
        let first = view.clone();
        view.sync(&result, &state, DEFAULT_STAGGER_STEP);
        assert_eq!(first, view);
        assert_eq!(view.results_text, "3 projects");
    }

    #[test]
    /// What: Empty result sets the no-results flag and hides the grid
    ///
    /// - Input: Search that matches nothing
    /// - Output: no_results, Hidden layout, "Showing 0 projects"
    fn sync_empty_result() {
        let mut state = FilterState::default();
        state.apply_search("zzz");
        let result = VisibilityResult::evaluate(&records(), &state);
        let mut view = PageView::default();
        view.sync(&result, &state, DEFAULT_STAGGER_STEP);
        assert!(view.no_results);
        assert_eq!(view.layout, GalleryLayout::Hidden);
        assert_eq!(view.results_text, "Showing 0 projects");
        assert!(view.search_clear_visible);
        assert_eq!(view.visible_ids().count(), 0);
    }

    #[test]
    /// What: Singular noun for exactly one project
    ///
    /// - Input: Counts 0, 1 and 2 with and without filters
    /// - Output: Correct pluralization and prefix
    fn results_text_pluralization() {
        assert_eq!(results_text(1, false), "1 project");
        assert_eq!(results_text(1, true), "Showing 1 project");
        assert_eq!(results_text(0, false), "0 projects");
        assert_eq!(results_text(2, true), "Showing 2 projects");
    }
}
