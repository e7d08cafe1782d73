//! Interactive session state: the gallery controller plus everything the
//! terminal UI layers on top (focus, search input, cursors, overlays).

pub mod app_state;
pub mod types;

pub use app_state::{AppState, resolve_taxonomy};
pub use types::{FOCUS_ORDER, Focus};
