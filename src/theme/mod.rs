//! Palette and user settings for folio.
//!
//! Both are read from plain `key = value` files under the config directory
//! (`theme.conf`, `settings.conf`); anything missing falls back to defaults.

/// Config value parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading and caching.
mod settings;
/// Theme store.
mod store;
/// Theme and settings types.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::{parse_theme, theme};
pub use types::{KeyChord, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// Process-wide mutex serializing tests that touch `HOME`/`XDG_CONFIG_HOME`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
