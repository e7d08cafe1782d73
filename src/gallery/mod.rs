//! Gallery filtering engine: category filter plus free-text search over a
//! static record set, and the derived view (visibility, stagger, counts, chips).
//!
//! Data flows one way per update:
//! intent → [`FilterState`] → [`VisibilityResult`] → [`PageView`] → [`ChipBar`].
//! The [`Gallery`] controller owns the records, the state and the view; every
//! accepted intent recomputes the full view synchronously.

use std::time::Duration;

mod chips;
mod extract;
mod filter;
pub mod input;
mod matcher;
mod record;
mod source;
mod view;

pub use chips::{Chip, ChipBar, CountBadges};
pub use extract::{
    ExtractError, ExtractedPage, ITEM_SELECTOR, PageControls, REQUIRED_CONTAINERS, extract_html,
    extract_manifest,
};
pub use filter::{ChipKind, FilterState, Intent, normalize_search};
pub use matcher::{VisibilityResult, matches};
pub use record::{
    ALL, DEFAULT_CATEGORIES, ItemId, MediaItem, ProjectRecord, Taxonomy, category_label,
    parse_tags,
};
pub use source::{SourceError, load_page};
pub use view::{DEFAULT_STAGGER_STEP, GalleryLayout, ItemView, PageView, results_text};

/// Page-scoped controller owning the records, the filter state and the view.
#[derive(Clone, Debug)]
pub struct Gallery {
    records: Vec<ProjectRecord>,
    taxonomy: Taxonomy,
    state: FilterState,
    badges: CountBadges,
    result: VisibilityResult,
    view: PageView,
    stagger_step: Duration,
    renders: u64,
}

impl Gallery {
    /// What: Build the controller and perform the initial render.
    ///
    /// Inputs:
    /// - `records`: Extracted records in document order
    /// - `taxonomy`: Closed category set for filters and badges
    /// - `stagger_step`: Increment between reveal delays
    ///
    /// Output:
    /// - `Err(ExtractError::NoItems)` for an empty record set; nothing is wired.
    ///
    /// Details:
    /// - Count badges are tallied here once and never recomputed.
    pub fn new(
        records: Vec<ProjectRecord>,
        taxonomy: Taxonomy,
        stagger_step: Duration,
    ) -> Result<Self, ExtractError> {
        if records.is_empty() {
            return Err(ExtractError::NoItems);
        }
        let badges = CountBadges::tally(&records, &taxonomy);
        let mut gallery = Self {
            records,
            taxonomy,
            state: FilterState::default(),
            badges,
            result: VisibilityResult::default(),
            view: PageView::default(),
            stagger_step,
            renders: 0,
        };
        gallery.render();
        tracing::debug!(
            records = gallery.records.len(),
            categories = gallery.taxonomy.categories().len(),
            "gallery initialized"
        );
        Ok(gallery)
    }

    /// What: Apply one intent and, when it changes anything, run the pipeline once.
    ///
    /// Inputs:
    /// - `intent`: Typed user intent
    ///
    /// Output:
    /// - `true` when the pipeline ran.
    ///
    /// Details:
    /// - Unchanged search text and out-of-set categories are no-ops.
    /// - Category selection re-renders even when the value is unchanged, which
    ///   restarts the stagger sequence.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let run = match &intent {
            Intent::SetCategory(value) => {
                let accepted = self.state.apply_category(value, &self.taxonomy);
                if !accepted {
                    tracing::debug!(category = %value, "ignoring unknown category");
                }
                accepted
            }
            Intent::SetSearchText(raw) => self.state.apply_search(raw),
            Intent::ClearSearch => {
                self.state.clear_dimension(ChipKind::Search);
                true
            }
            Intent::RemoveChip(kind) => {
                self.state.clear_dimension(*kind);
                true
            }
            Intent::Reset => {
                self.state.clear();
                true
            }
        };
        if run {
            self.render();
            tracing::debug!(
                ?intent,
                visible = self.view.visible_count,
                "gallery re-rendered"
            );
        }
        run
    }

    /// Normalize and store search text; see [`Gallery::dispatch`].
    pub fn set_search_text(&mut self, raw: &str) -> bool {
        self.dispatch(Intent::SetSearchText(raw.to_string()))
    }

    /// Select a category; see [`Gallery::dispatch`].
    pub fn set_category(&mut self, value: &str) -> bool {
        self.dispatch(Intent::SetCategory(value.to_string()))
    }

    /// Clear both dimensions with a single render.
    pub fn reset_all(&mut self) {
        self.dispatch(Intent::Reset);
    }

    /// Reset exactly the dimension summarized by a chip.
    pub fn remove_chip(&mut self, kind: ChipKind) {
        self.dispatch(Intent::RemoveChip(kind));
    }

    /// The clear-search control.
    pub fn clear_search(&mut self) {
        self.dispatch(Intent::ClearSearch);
    }

    /// Run the pipeline once: visibility, view sync, chips.
    fn render(&mut self) {
        self.result = VisibilityResult::evaluate(&self.records, &self.state);
        self.view.sync(&self.result, &self.state, self.stagger_step);
        self.view.chips = ChipBar::build(&self.state);
        self.renders += 1;
    }

    /// All records in document order.
    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Record behind `id`.
    #[must_use]
    pub fn record(&self, id: ItemId) -> Option<&ProjectRecord> {
        self.records.get(id.0).filter(|r| r.id() == id)
    }

    /// Visible records in document order.
    pub fn visible_records(&self) -> impl Iterator<Item = &ProjectRecord> + '_ {
        self.view.visible_ids().filter_map(|id| self.record(id))
    }

    /// The closed category set.
    #[must_use]
    pub const fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Current filter state.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Latest visibility result.
    #[must_use]
    pub const fn visibility(&self) -> &VisibilityResult {
        &self.result
    }

    /// Latest rendered view.
    #[must_use]
    pub const fn view(&self) -> &PageView {
        &self.view
    }

    /// Static per-category totals.
    #[must_use]
    pub const fn badges(&self) -> &CountBadges {
        &self.badges
    }

    /// Number of pipeline runs so far, including the initial render.
    #[must_use]
    pub const fn renders(&self) -> u64 {
        self.renders
    }

    /// Increment between reveal delays.
    #[must_use]
    pub const fn stagger_step(&self) -> Duration {
        self.stagger_step
    }
}
