use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

use tracing::{debug, warn};

use super::parsing::{parse_bool, parse_key_chord, parse_list, strip_inline_comment};
use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::util::config::{skip_comment_or_empty, split_key_value};

/// Largest accepted grid width; wider values are clamped.
const MAX_GRID_COLUMNS: u16 = 8;
/// Largest accepted stagger increment in milliseconds.
const MAX_STAGGER_STEP_MS: u64 = 2_000;

/// Last parsed settings and the mtime they were read at.
struct SettingsCache {
    /// Normalized settings from the last read.
    settings: Settings,
    /// Modification time of the file that produced `settings`.
    mtime: Option<SystemTime>,
    /// Whether a read has happened yet.
    initialized: bool,
}

/// Process-wide settings cache.
static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Apply `settings.conf` content onto `settings`.
///
/// Inputs:
/// - `content`: File text, `key = value` per line
/// - `settings`: Values to override in place
///
/// Output:
/// - None; unknown keys and unparsable values are logged and skipped.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces count as `_`.
/// - Lines starting with `#`, `//` or `;` are comments, as are trailing `# ...` tails.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for (lineno, line) in content.lines().enumerate() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, raw_val)) = split_key_value(line) else {
            continue;
        };
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "categories" | "filter_categories" => {
                let list: Vec<String> = parse_list(val)
                    .into_iter()
                    .map(|c| c.to_lowercase())
                    .collect();
                settings.categories = if list.is_empty() { None } else { Some(list) };
            }
            "stagger_step_ms" | "stagger_ms" => match val.parse::<u64>() {
                Ok(v) => settings.stagger_step_ms = v,
                Err(_) => warn!(line = lineno + 1, value = val, "[Config] invalid stagger_step_ms"),
            },
            "grid_columns" | "columns" => match val.parse::<u16>() {
                Ok(v) => settings.grid_columns = v,
                Err(_) => warn!(line = lineno + 1, value = val, "[Config] invalid grid_columns"),
            },
            "search_focus_key" | "keybind_search_focus" => {
                if let Some(chord) = parse_key_chord(val) {
                    settings.search_focus_key = chord;
                } else {
                    warn!(line = lineno + 1, value = val, "[Config] invalid search_focus_key");
                }
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                settings.show_keybinds_footer = parse_bool(val);
            }
            _ => debug!(line = lineno + 1, key = %key, "[Config] unknown settings key"),
        }
    }
}

/// What: Clamp parsed values into their usable ranges.
///
/// Details:
/// - `grid_columns` is kept in `1..=8`; `stagger_step_ms` is capped at 2000.
fn normalize(settings: &mut Settings) {
    settings.grid_columns = settings.grid_columns.clamp(1, MAX_GRID_COLUMNS);
    settings.stagger_step_ms = settings.stagger_step_ms.min(MAX_STAGGER_STEP_MS);
    if let Some(cats) = settings.categories.as_mut() {
        let mut seen = std::collections::HashSet::new();
        cats.retain(|c| seen.insert(c.clone()));
    }
}

/// What: Read and normalize settings from a specific file.
///
/// Inputs:
/// - `path`: Location of a `settings.conf`
///
/// Output:
/// - Parsed settings; defaults when the file is unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "[Config] settings.conf unreadable, using defaults"
        ),
    }
    normalize(&mut out);
    out
}

/// What: Current user settings, re-read only when `settings.conf` changed on disk.
///
/// Output:
/// - `Settings::default()` when no config file exists.
#[must_use]
pub fn settings() -> Settings {
    let mut cache = SETTINGS_CACHE
        .get_or_init(|| {
            Mutex::new(SettingsCache {
                settings: Settings::default(),
                mtime: None,
                initialized: false,
            })
        })
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let path = resolve_settings_config_path();
    let mtime = path
        .as_ref()
        .and_then(|p| fs::metadata(p).and_then(|m| m.modified()).ok());
    if cache.initialized && cache.mtime == mtime {
        return cache.settings.clone();
    }

    let out = path.as_deref().map_or_else(
        || {
            debug!("[Config] no settings.conf found, using defaults");
            Settings::default()
        },
        load_settings_from,
    );
    cache.mtime = mtime;
    cache.settings = out.clone();
    cache.initialized = true;
    out
}
