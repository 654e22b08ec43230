use thiserror::Error;

/// Conditions reported at the boundary of a toggle request.
///
/// Classification and the toggle engines themselves never fail; everything here
/// is detected before any edit is computed, so an error always means zero edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The language identifier is not in the supported set.
    #[error("nested comments are not supported for language `{0}`")]
    UnsupportedLanguage(String),

    /// The selection reaches past the last line of the document.
    #[error("selection line {line} is outside the document ({line_count} lines)")]
    SelectionOutOfRange { line: usize, line_count: usize },
}
