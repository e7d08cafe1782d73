//! Active-filter chips and static per-category count badges.

use serde::Serialize;

use super::filter::{ChipKind, FilterState};
use super::record::{ProjectRecord, Taxonomy, category_label};

/// A removable token summarizing one active filter dimension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chip {
    /// Dimension this chip resets when removed.
    pub kind: ChipKind,
    /// Display text: the category label, or the quoted search text.
    pub label: String,
}

impl Chip {
    /// Accessible name of the chip's remove control.
    #[must_use]
    pub fn removal_label(&self) -> String {
        format!("Remove filter: {}", self.label)
    }
}

/// The active-filter chip list and the visibility of its container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChipBar {
    /// Chips in display order (category first, then search).
    pub chips: Vec<Chip>,
    /// Whether the chip container is shown.
    pub visible: bool,
}

impl ChipBar {
    /// What: Rebuild the chip list from scratch.
    ///
    /// Inputs:
    /// - `state`: Current filter state
    ///
    /// Output:
    /// - Chip bar with zero, one or two chips; hidden when no filter is active.
    #[must_use]
    pub fn build(state: &FilterState) -> Self {
        let mut chips = Vec::with_capacity(2);
        if state.has_category() {
            chips.push(Chip {
                kind: ChipKind::Category,
                label: category_label(state.category()).to_string(),
            });
        }
        if state.has_search() {
            chips.push(Chip {
                kind: ChipKind::Search,
                label: format!("\"{}\"", state.search_text()),
            });
        }
        Self {
            visible: !chips.is_empty(),
            chips,
        }
    }
}

/// Record totals per category over the whole unfiltered set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountBadges {
    counts: Vec<(String, usize)>,
}

impl CountBadges {
    /// What: Count records per taxonomy category.
    ///
    /// Inputs:
    /// - `records`: The full record set
    /// - `taxonomy`: Closed category set
    ///
    /// Output:
    /// - `"all"` holds the total record count; each category holds its own
    ///   count. Categories outside the taxonomy are not tallied individually.
    #[must_use]
    pub fn tally(records: &[ProjectRecord], taxonomy: &Taxonomy) -> Self {
        let mut counts: Vec<(String, usize)> = taxonomy
            .buttons()
            .map(|c| (c.to_string(), 0))
            .collect();
        if let Some(all) = counts.first_mut() {
            all.1 = records.len();
        }
        for record in records {
            if let Some(slot) = counts
                .iter_mut()
                .skip(1)
                .find(|(c, _)| c == record.category())
            {
                slot.1 += 1;
            } else {
                tracing::debug!(
                    category = %record.category(),
                    title = %record.title(),
                    "category outside taxonomy; not counted"
                );
            }
        }
        Self { counts }
    }

    /// Count for `value` (`"all"` or a category); `None` for unknown values.
    #[must_use]
    pub fn get(&self, value: &str) -> Option<usize> {
        self.counts.iter().find(|(c, _)| c == value).map(|(_, n)| *n)
    }

    /// `(value, count)` pairs in button order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(c, n)| (c.as_str(), *n))
    }
}
