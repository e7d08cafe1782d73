//! Command-line argument parsing and the non-interactive listing mode.

pub mod definition;
pub mod list;
pub mod utils;

pub use definition::{Args, apply_startup_filters};
pub use list::{render_json, render_listing};
pub use utils::determine_log_level;
