//! Small shared helpers: config line parsing, display-width text fitting and
//! timestamps.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod config;

/// What: Cut `s` so it occupies at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Available columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…`.
///
/// Details:
/// - Widths come from `unicode-width`, so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Display width of `s` in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// What: Format the current local time for log lines.
///
/// Output:
/// - `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn now_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Truncation respects display width
    ///
    /// - Input: ASCII and wide CJK strings at several widths
    /// - Output: Fits unchanged or ends in an ellipsis within budget
    fn truncate_by_columns() {
        assert_eq!(truncate_to_width("Bank App", 20), "Bank App");
        assert_eq!(truncate_to_width("Bank App", 5), "Bank…");
        assert_eq!(truncate_to_width("Bank App", 0), "");
        let wide = truncate_to_width("日本語テキスト", 7);
        assert!(display_width(&wide) <= 7);
        assert!(wide.ends_with('…'));
    }

    #[test]
    /// What: Timestamp has the fixed log layout
    ///
    /// - Input: Current time
    /// - Output: 19 characters with a space between date and time
    fn timestamp_shape() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(ts.as_bytes()[10], b' ');
    }
}
