use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Color palette for every folio widget.
///
/// Slot names follow the Catppuccin scheme; `theme.conf` may also use the
/// role aliases noted on each field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Screen background (`background`).
    pub base: Color,
    /// Card and overlay fill (`panel_background`).
    pub mantle: Color,
    /// Text on chips.
    pub crust: Color,
    /// Card and panel borders (`card_background`).
    pub surface1: Color,
    /// Outlines of cards still waiting to appear (`card_hidden`).
    pub surface2: Color,
    /// Unfocused pane titles and hints (`border`).
    pub overlay1: Color,
    /// Secondary hints and slide counters (`border_focused`).
    pub overlay2: Color,
    /// Body text (`text_primary`).
    pub text: Color,
    /// Descriptions and search placeholder (`text_secondary`).
    pub subtext0: Color,
    /// Tags and captions (`text_caption`).
    pub subtext1: Color,
    /// Focused pane and selected card (`accent_focus`).
    pub sapphire: Color,
    /// Page title and overlay borders (`accent_heading`).
    pub mauve: Color,
    /// Count badges (`badge`).
    pub green: Color,
    /// Active filter chips (`chip`).
    pub yellow: Color,
    /// No-results message (`no_results`).
    pub red: Color,
    /// Active category button and card category line (`active_filter`).
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Closed category set; `None` defers to the page's filter buttons.
    pub categories: Option<Vec<String>>,
    /// Increment between successive card reveal delays, in milliseconds.
    pub stagger_step_ms: u64,
    /// Number of card columns in the gallery grid.
    pub grid_columns: u16,
    /// Key that moves focus into the search input.
    pub search_focus_key: KeyChord,
    /// Whether the keybinds footer is shown.
    pub show_keybinds_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: None,
            stagger_step_ms: 60,
            grid_columns: 3,
            search_focus_key: KeyChord {
                code: KeyCode::Char('/'),
                mods: KeyModifiers::empty(),
            },
            show_keybinds_footer: true,
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Modifier set that must be held.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Return a short display label such as "Ctrl+R", "F1", "/".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }

    /// Whether a key event with `code`/`mods` triggers this chord.
    ///
    /// Shift is ignored for character keys, since terminals report it
    /// inconsistently for symbols such as `/` and `?`.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        if let (KeyCode::Char(a), KeyCode::Char(b)) = (self.code, code) {
            return a.eq_ignore_ascii_case(&b)
                && self.mods.difference(KeyModifiers::SHIFT) == mods.difference(KeyModifiers::SHIFT);
        }
        self.code == code && self.mods == mods
    }
}
