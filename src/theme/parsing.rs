//! Small value parsers shared by the settings reader.

/// What: Strip an inline `#` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Trimmed text before the first `#` that starts a comment.
///
/// Details:
/// - A `#` only starts a comment at the beginning or after whitespace, so values such as
///   `C#` survive.
pub fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// Parse a boolean setting; accepts true/1/yes/on (case-insensitive).
pub fn parse_bool(s: &str) -> bool {
    let lv = s.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}
