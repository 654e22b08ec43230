//! Toggle entry point.
//!
//! Validates a request, picks the engine and returns the edits that move the
//! selection one step through its comment cycle.

use std::fmt;
use std::ops::Range;

use tracing::debug;

use super::block::{BlockTransition, toggle_block};
use super::error::ToggleError;
use super::line::{LineDecision, toggle_lines};
use super::registry::{LanguageId, StyleRegistry};
use super::selection::Selection;

/// How a multi-line selection is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleMode {
    /// Single-line selections per line, multi-line selections as one block.
    #[default]
    Auto,
    /// Every selected line on its own, whatever the span.
    PerLine,
}

/// Engine that produced a [`ToggleResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Line,
    Block,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Line(LineDecision),
    Block(BlockTransition),
    /// Nothing to toggle (every selected line is blank).
    Unchanged,
}

impl Transition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line(decision) => decision.as_str(),
            Self::Block(transition) => transition.as_str(),
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replacement of the document lines in `lines` by `text`.
///
/// `text` may contain `\n`, in which case the range is replaced by several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub lines: Range<usize>,
    pub text: String,
}

impl LineEdit {
    /// Replace a single line.
    pub fn line(index: usize, text: String) -> Self {
        Self {
            lines: index..index + 1,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    pub language: LanguageId,
    pub engine: Engine,
    pub transition: Transition,
    /// Ordered by line, non-overlapping.
    pub edits: Vec<LineEdit>,
}

impl ToggleResult {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply the edits to `lines`, returning the new document lines.
    pub fn apply<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut out: Vec<String> = lines.iter().map(|line| line.as_ref().to_string()).collect();
        for edit in self.edits.iter().rev() {
            let replacement = edit.text.split('\n').map(str::to_string);
            out.splice(edit.lines.clone(), replacement);
        }
        out
    }
}

/// Toggle comments on `selection` of a document in language `language_id`.
///
/// The selection is expected to cover whole lines; callers expand carets first.
pub fn toggle<S: AsRef<str>>(
    lines: &[S],
    selection: Selection,
    language_id: &str,
    mode: ToggleMode,
) -> Result<ToggleResult, ToggleError> {
    let language = StyleRegistry::global().resolve(language_id)?;
    toggle_language(lines, selection, language, mode)
}

/// [`toggle`] with an already resolved language.
pub fn toggle_language<S: AsRef<str>>(
    lines: &[S],
    selection: Selection,
    language: LanguageId,
    mode: ToggleMode,
) -> Result<ToggleResult, ToggleError> {
    let span = selection.line_span();
    let line_count = lines.len();
    if *span.end() >= line_count {
        return Err(ToggleError::SelectionOutOfRange {
            line: *span.end(),
            line_count,
        });
    }

    let text: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
    let family_of = |index: usize| language.family_at(&text[..], index);

    let engine = if mode == ToggleMode::PerLine || selection.is_single_line() {
        Engine::Line
    } else {
        Engine::Block
    };

    let (transition, edits) = match engine {
        Engine::Line => {
            let result = toggle_lines(&text, span.clone(), family_of);
            (Transition::Line(result.decision), result.edits)
        }
        Engine::Block => {
            let result = toggle_block(&text, span.clone(), family_of);
            let transition = result
                .transition
                .map(Transition::Block)
                .unwrap_or(Transition::Unchanged);
            (transition, result.edits)
        }
    };
    let transition = if edits.is_empty() {
        Transition::Unchanged
    } else {
        transition
    };

    debug!(
        language = language.as_str(),
        %engine,
        %transition,
        first = *span.start(),
        last = *span.end(),
        edits = edits.len(),
        "toggled selection"
    );

    Ok(ToggleResult {
        language,
        engine,
        transition,
        edits,
    })
}
