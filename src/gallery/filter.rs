//! Filter state: the two active filter dimensions and the intents that mutate them.

use serde::Serialize;

use super::record::{ALL, Taxonomy};

/// Which filter dimension a chip summarizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipKind {
    /// The selected category.
    Category,
    /// The search text.
    Search,
}

/// Typed user intent fed into the gallery pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Select a category filter (`"all"` or a known category).
    SetCategory(String),
    /// Replace the search text with raw input (normalized on apply).
    SetSearchText(String),
    /// The "clear search" control.
    ClearSearch,
    /// Remove one active-filter chip, resetting its dimension.
    RemoveChip(ChipKind),
    /// Reset both dimensions at once.
    Reset,
}

/// The active category and normalized search text.
///
/// `category` is always `"all"` or a member of the taxonomy the state was
/// mutated against; `search` is always trimmed and lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterState {
    category: String,
    search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Selected category value or `"all"`.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Normalized search text; empty when no search is active.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Whether a category other than `"all"` is selected.
    #[must_use]
    pub fn has_category(&self) -> bool {
        self.category != ALL
    }

    /// Whether a search is active.
    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Whether either dimension narrows the result set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.has_category() || self.has_search()
    }

    /// Store normalized search text. Returns `false` when nothing changed.
    pub(crate) fn apply_search(&mut self, raw: &str) -> bool {
        let normalized = normalize_search(raw);
        if normalized == self.search {
            return false;
        }
        self.search = normalized;
        true
    }

    /// Select `value` when the taxonomy allows it. Returns `false` on rejection.
    pub(crate) fn apply_category(&mut self, value: &str, taxonomy: &Taxonomy) -> bool {
        let value = value.trim().to_lowercase();
        if !taxonomy.is_selectable(&value) {
            return false;
        }
        self.category = value;
        true
    }

    /// Return both dimensions to their inactive values.
    pub(crate) fn clear(&mut self) {
        self.category = ALL.to_string();
        self.search.clear();
    }

    /// Return one dimension to its inactive value.
    pub(crate) fn clear_dimension(&mut self, kind: ChipKind) {
        match kind {
            ChipKind::Category => self.category = ALL.to_string(),
            ChipKind::Search => self.search.clear(),
        }
    }
}

/// What: Normalize raw search input.
///
/// Inputs:
/// - `raw`: Text as typed
///
/// Output:
/// - Trimmed, lowercased text.
#[must_use]
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}
