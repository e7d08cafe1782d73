//! Visibility matcher: per-record category and substring test, and the
//! document-order visibility result it produces.

use serde::Serialize;

use super::filter::FilterState;
use super::record::{ALL, ItemId, ProjectRecord};

/// What: Decide whether one record is visible under the given filter state.
///
/// Inputs:
/// - `record`: Extracted gallery record
/// - `state`: Current filter state
///
/// Output:
/// - `true` when both the category check and the search check pass.
///
/// Details:
/// - Category passes for `"all"` or an exact (normalized) category match.
/// - Search passes when empty or a plain substring of the record haystack.
#[must_use]
pub fn matches(record: &ProjectRecord, state: &FilterState) -> bool {
    let category_ok = state.category() == ALL || record.category() == state.category();
    let search_ok = !state.has_search() || record.haystack().contains(state.search_text());
    category_ok && search_ok
}

/// Per-record visibility for one filter state, plus the visible total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityResult {
    entries: Vec<(ItemId, bool)>,
    visible_count: usize,
}

impl VisibilityResult {
    /// What: Evaluate every record against `state`.
    ///
    /// Inputs:
    /// - `records`: Full static record set in document order
    /// - `state`: Current filter state
    ///
    /// Output:
    /// - Full mapping; there is no incremental path.
    #[must_use]
    pub fn evaluate(records: &[ProjectRecord], state: &FilterState) -> Self {
        let entries: Vec<(ItemId, bool)> = records
            .iter()
            .map(|r| (r.id(), matches(r, state)))
            .collect();
        let visible_count = entries.iter().filter(|(_, v)| *v).count();
        Self {
            entries,
            visible_count,
        }
    }

    /// Number of visible records.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Whether `id` is visible; unknown ids are not.
    #[must_use]
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.entries.iter().any(|(i, v)| *i == id && *v)
    }

    /// `(id, visible)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, bool)> + '_ {
        self.entries.iter().copied()
    }
}
