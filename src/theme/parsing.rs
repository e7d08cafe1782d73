use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// What: Parse one key token ("F5", "Esc", "/", "s") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Key token from a config value
///
/// Output:
/// - `Some(KeyCode)` when recognized; single characters are lowercased.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" | "ESCAPE" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        "SLASH" => Some(KeyCode::Char('/')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a chord such as "Ctrl+F" or "/" into a [`KeyChord`].
///
/// Inputs:
/// - `chord`: Modifiers and a key joined by `+`
///
/// Output:
/// - `None` when no key token is present or it is unknown.
///
/// Details:
/// - A trailing "+" after a modifier is read as the plus key itself ("Ctrl++").
pub(crate) fn parse_key_chord(chord: &str) -> Option<KeyChord> {
    let chord = chord.trim();
    if chord == "+" {
        return Some(KeyChord {
            code: KeyCode::Char('+'),
            mods: KeyModifiers::empty(),
        });
    }
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<&str> = chord.strip_suffix("++").map(|_| "+");
    let head = if key_part.is_some() {
        &chord[..chord.len() - 2]
    } else {
        chord
    };
    for part in head.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            _ => key_part = Some(p),
        }
    }
    if key_part.is_some_and(|k| k.eq_ignore_ascii_case("tab")) && mods.contains(KeyModifiers::SHIFT)
    {
        return Some(KeyChord {
            code: KeyCode::BackTab,
            mods: KeyModifiers::empty(),
        });
    }
    let code = parse_key_identifier(key_part?)?;
    Some(KeyChord { code, mods })
}

/// What: Parse a color literal into a [`Color`].
///
/// Inputs:
/// - `s`: `#RRGGBB`, `RRGGBB` or `R,G,B`, optionally followed by a comment
///
/// Output:
/// - `None` when the literal is malformed or a channel exceeds 255.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let channels: Vec<u8> = t
        .split(',')
        .map(|v| v.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match channels.as_slice() {
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        _ => None,
    }
}

/// Boolean config values: true/1/yes/on.
pub(crate) fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Comma-separated list; blank entries dropped, entries trimmed.
pub(crate) fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// What: Map a normalized theme key (or one of its aliases) to its palette slot.
///
/// Inputs:
/// - `norm`: Lowercased key with `.`/`-`/space replaced by `_`
///
/// Output:
/// - Canonical slot name, or `None` for unknown keys.
pub(crate) fn canonical_for_key(norm: &str) -> Option<&'static str> {
    match norm {
        "base" | "background" => Some("base"),
        "mantle" | "panel_background" => Some("mantle"),
        "crust" => Some("crust"),
        "surface1" | "card_background" => Some("surface1"),
        "surface2" | "card_hidden" => Some("surface2"),
        "overlay1" | "border" => Some("overlay1"),
        "overlay2" | "border_focused" => Some("overlay2"),
        "text" | "text_primary" => Some("text"),
        "subtext0" | "text_secondary" => Some("subtext0"),
        "subtext1" | "text_caption" => Some("subtext1"),
        "sapphire" | "accent_focus" => Some("sapphire"),
        "mauve" | "accent_heading" => Some("mauve"),
        "green" | "badge" => Some("green"),
        "yellow" | "chip" => Some("yellow"),
        "red" | "no_results" => Some("red"),
        "lavender" | "active_filter" => Some("lavender"),
        _ => None,
    }
}

/// What: Drop a trailing `// ...` or `# ...` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Trimmed value; a leading `#` (hex color) is kept.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    let hash = if let Some(rest) = s.strip_prefix('#') {
        rest.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    };
    if let Some(i) = hash {
        s = &s[..i];
    }
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Key tokens and chords map onto crossterm codes and modifiers
    ///
    /// - Input: "F5", "Esc", "/", "Ctrl+F", "Shift+Tab", "Ctrl++"
    /// - Output: Matching `KeyCode`/`KeyModifiers`
    fn key_identifier_and_chord() {
        assert_eq!(parse_key_identifier("F5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key_identifier("esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key_identifier("/"), Some(KeyCode::Char('/')));
        assert_eq!(parse_key_identifier("nope"), None);

        let kc = parse_key_chord("Ctrl+F").expect("chord");
        assert_eq!(kc.code, KeyCode::Char('f'));
        assert!(kc.mods.contains(KeyModifiers::CONTROL));

        let bt = parse_key_chord("Shift+Tab").expect("chord");
        assert_eq!(bt.code, KeyCode::BackTab);
        assert!(bt.mods.is_empty());

        let plus = parse_key_chord("Ctrl++").expect("chord");
        assert_eq!(plus.code, KeyCode::Char('+'));
        assert!(plus.mods.contains(KeyModifiers::CONTROL));

        assert!(parse_key_chord("Ctrl+").is_none());
    }

    #[test]
    /// What: Color literals in hex and decimal form
    ///
    /// - Input: "#ff0000", "255,0,10", "300,0,0", "" and a commented value
    /// - Output: Rgb for valid literals, None otherwise
    fn color_literals() {
        assert_eq!(parse_color_value("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color_value("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color_value("255,0,10"), Some(Color::Rgb(255, 0, 10)));
        assert_eq!(
            parse_color_value("#112233 // card"),
            Some(Color::Rgb(0x11, 0x22, 0x33))
        );
        assert!(parse_color_value("300,0,0").is_none());
        assert!(parse_color_value("").is_none());
        assert_eq!(canonical_for_key("active_filter"), Some("lavender"));
        assert_eq!(canonical_for_key("unknown"), None);
    }

    #[test]
    /// What: Inline comments are stripped without eating a hex color's leading '#'
    ///
    /// - Input: Values with `//` and `#` tails
    /// - Output: Clean values
    fn strip_inline_comment_variants() {
        assert_eq!(strip_inline_comment("#abcdef"), "#abcdef");
        assert_eq!(strip_inline_comment("60 // ms"), "60");
        assert_eq!(strip_inline_comment("#ff00ff # tail"), "#ff00ff");
        assert_eq!(strip_inline_comment("ux, web # picked"), "ux, web");
    }

    #[test]
    /// What: Bool and list helpers
    ///
    /// - Input: Assorted truthy/falsy strings and a sparse list
    /// - Output: Expected flags and trimmed entries
    fn bool_and_list() {
        assert!(parse_bool("Yes"));
        assert!(parse_bool(" on "));
        assert!(!parse_bool("off"));
        assert_eq!(parse_list(" ux , ,web,"), vec!["ux", "web"]);
    }
}
