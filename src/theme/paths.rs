use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the config base.
const APP_DIR: &str = "folio";

/// Candidate locations for `file`, in priority order: `$HOME/.config/folio`, then `$XDG_CONFIG_HOME/folio`.
fn candidates(file: &str) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(h) = env::var("HOME") {
        out.push(Path::new(&h).join(".config").join(APP_DIR).join(file));
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        out.push(Path::new(&xdg).join(APP_DIR).join(file));
    }
    out
}

/// First existing `theme.conf`.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    candidates("theme.conf").into_iter().find(|p| p.is_file())
}

/// First existing `settings.conf`.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    candidates("settings.conf").into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from `var`, or `$HOME` joined with `home_default`.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Folio's config directory, created if missing.
///
/// Output:
/// - `$HOME/.config/folio` when HOME is usable, otherwise `$XDG_CONFIG_HOME/folio`.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under the config dir (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
