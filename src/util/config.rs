//! Line-level helpers shared by the `key = value` config readers.

/// What: Check if a config line carries no setting.
///
/// Inputs:
/// - `line`: Raw line
///
/// Output:
/// - `true` for blank lines and lines starting with `#`, `//` or `;`.
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a `key = value` line.
///
/// Inputs:
/// - `line`: Line containing at least one `=`
///
/// Output:
/// - Normalized key (lowercase, `.`/`-`/space as `_`) and the untrimmed raw value;
///   `None` when there is no `=`.
pub fn split_key_value(line: &str) -> Option<(String, &str)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, raw_val))
}
