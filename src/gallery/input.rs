//! Keyboard shortcut routing for the gallery search input.
//!
//! Shortcuts only move focus or go through the regular intents; a focus
//! change on its own never re-renders the gallery.

use super::Gallery;

/// Where keyboard focus currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// The gallery search input.
    SearchInput,
    /// Some other text input.
    OtherTextInput,
    /// Anything that is not a text input.
    Elsewhere,
}

/// Shortcut keys the gallery reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// The designated "focus search" key (default `/`).
    FocusSearch,
    /// Escape.
    Escape,
}

/// What the caller should do after a shortcut was routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Not handled; let the key through.
    Ignored,
    /// Move focus into the search input and swallow the key.
    FocusSearch,
    /// The search was cleared and re-rendered; empty the input box.
    ClearedSearch,
    /// Move focus out of the search input; nothing was cleared.
    Blur,
}

/// What: Route a shortcut key given the current focus.
///
/// Inputs:
/// - `gallery`: Controller to mutate when the search is cleared
/// - `shortcut`: Key pressed
/// - `focus`: Current focus target
///
/// Output:
/// - The action the caller applies to its focus/input state.
///
/// Details:
/// - The focus key only acts outside text inputs.
/// - Escape in the search input clears a non-empty search, otherwise blurs.
pub fn route_shortcut(
    gallery: &mut Gallery,
    shortcut: Shortcut,
    focus: FocusTarget,
) -> ShortcutOutcome {
    match (shortcut, focus) {
        (Shortcut::FocusSearch, FocusTarget::Elsewhere) => ShortcutOutcome::FocusSearch,
        (Shortcut::Escape, FocusTarget::SearchInput) => {
            if gallery.state().has_search() {
                gallery.clear_search();
                ShortcutOutcome::ClearedSearch
            } else {
                ShortcutOutcome::Blur
            }
        }
        _ => ShortcutOutcome::Ignored,
    }
}
