//! Common utility functions shared across the codebase.

/// Checks if the text is empty or contains only whitespace.
///
/// # Examples
///
/// ```
/// use nestcomment::utils::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t "));
/// assert!(!is_blank("  x"));
/// ```
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Splits a line into its leading whitespace and the remainder.
///
/// # Examples
///
/// ```
/// use nestcomment::utils::split_indent;
///
/// assert_eq!(split_indent("    let x;"), ("    ", "let x;"));
/// assert_eq!(split_indent("\tfoo "), ("\t", "foo "));
/// assert_eq!(split_indent("bar"), ("", "bar"));
/// ```
pub fn split_indent(line: &str) -> (&str, &str) {
    let content = line.trim_start();
    line.split_at(line.len() - content.len())
}

/// Removes `marker` from the start of `text`, preferring its padded form.
///
/// `"/* "` is removed whole when present; otherwise the bare token `"/*"` is
/// removed. Returns `None` when neither is present.
pub fn strip_open<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.strip_prefix(marker)
        .or_else(|| text.strip_prefix(marker.trim()))
}

/// Removes `marker` from the end of `text`, preferring its padded form.
pub fn strip_close<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.strip_suffix(marker)
        .or_else(|| text.strip_suffix(marker.trim()))
}
