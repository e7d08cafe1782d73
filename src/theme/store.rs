use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use ratatui::style::Color;

use super::parsing::{canonical_for_key, parse_color_value};
use super::paths::resolve_theme_config_path;
use super::types::Theme;
use crate::util::config::{skip_comment_or_empty, split_key_value};

/// Theme loaded once per process.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Apply `theme.conf` overrides onto the default palette.
///
/// Inputs:
/// - `content`: File text, `key = color` per line
///
/// Output:
/// - The resulting theme and one message per rejected line.
///
/// Details:
/// - Keys missing from the file keep their default color.
pub fn parse_theme(content: &str) -> (Theme, Vec<String>) {
    let mut theme = Theme::default();
    let mut errors = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((norm, raw_val)) = split_key_value(line) else {
            errors.push(format!("line {}: expected key = value", lineno + 1));
            continue;
        };
        let raw_key = line.split_once('=').map_or("", |(k, _)| k);
        let Some(slot) = canonical_for_key(&norm) else {
            errors.push(format!("line {}: unknown key '{}'", lineno + 1, raw_key.trim()));
            continue;
        };
        let Some(color) = parse_color_value(raw_val) else {
            errors.push(format!(
                "line {}: invalid color for '{}'",
                lineno + 1,
                raw_key.trim()
            ));
            continue;
        };
        set_slot(&mut theme, slot, color);
    }
    (theme, errors)
}

/// Assign `color` to the palette slot named `slot`.
fn set_slot(theme: &mut Theme, slot: &str, color: Color) {
    let target = match slot {
        "base" => &mut theme.base,
        "mantle" => &mut theme.mantle,
        "crust" => &mut theme.crust,
        "surface1" => &mut theme.surface1,
        "surface2" => &mut theme.surface2,
        "overlay1" => &mut theme.overlay1,
        "overlay2" => &mut theme.overlay2,
        "text" => &mut theme.text,
        "subtext0" => &mut theme.subtext0,
        "subtext1" => &mut theme.subtext1,
        "sapphire" => &mut theme.sapphire,
        "mauve" => &mut theme.mauve,
        "green" => &mut theme.green,
        "yellow" => &mut theme.yellow,
        "red" => &mut theme.red,
        "lavender" => &mut theme.lavender,
        _ => return,
    };
    *target = color;
}

/// Defaults overlaid with the overrides in `path`; parse errors are logged.
fn load_theme_from_file(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (theme, errors) = parse_theme(&content);
            for e in &errors {
                tracing::warn!(path = %path.display(), "theme.conf {e}");
            }
            tracing::info!(path = %path.display(), rejected = errors.len(), "loaded theme configuration");
            theme
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "theme.conf unreadable, using default palette");
            Theme::default()
        }
    }
}

/// Return the application's palette, loading `theme.conf` on first use.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        resolve_theme_config_path().map_or_else(Theme::default, |p| load_theme_from_file(&p))
    })
}
