//! Per-line toggling.
//!
//! Every selected line is commented on its own. The selection as a whole first
//! decides whether all lines move together (strip or nest) or each line advances
//! one step from wherever it currently is.

use std::ops::RangeInclusive;

use tracing::trace;

use super::classify::{LineState, classify_in};
use super::registry::CommentFamily;
use super::toggle::LineEdit;
use crate::utils::{is_blank, split_indent};

/// Group decision over the non-blank selected lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineDecision {
    /// Every line is level 2: remove the outer marker pair everywhere.
    StripOuter,
    /// Every line is level 1: nest a second marker everywhere.
    AddNested,
    /// Mixed or uncommented: each line advances by its own level.
    PerLine,
}

impl LineDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StripOuter => "strip-outer",
            Self::AddNested => "add-nested",
            Self::PerLine => "per-line",
        }
    }
}

/// Rewrite applied to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAction {
    AddSimple,
    AddNested,
    StripOuter,
}

struct SelectedLine<'a> {
    index: usize,
    text: &'a str,
    family: CommentFamily,
    state: LineState,
}

/// Outcome of a per-line toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToggle {
    pub decision: LineDecision,
    pub edits: Vec<LineEdit>,
}

/// Toggle the lines in `span`, each commented with the family `family_of` picks
/// for its index.
///
/// Blank lines take no part in the decision and are never rewritten. Lines whose
/// text does not change produce no edit.
pub fn toggle_lines<F>(lines: &[&str], span: RangeInclusive<usize>, family_of: F) -> LineToggle
where
    F: Fn(usize) -> CommentFamily,
{
    let selected: Vec<SelectedLine> = span
        .filter(|&index| !is_blank(lines[index]))
        .map(|index| {
            let text = lines[index];
            let family = family_of(index);
            let state = classify_in(family, text);
            trace!(line = index, %family, kind = %state.kind, level = state.level, "classified");
            SelectedLine {
                index,
                text,
                family,
                state,
            }
        })
        .collect();

    let decision = decide(&selected);

    let edits = selected
        .iter()
        .filter_map(|line| {
            let action = match decision {
                LineDecision::StripOuter => LineAction::StripOuter,
                LineDecision::AddNested => LineAction::AddNested,
                LineDecision::PerLine => match line.state.level {
                    0 => LineAction::AddSimple,
                    1 => LineAction::AddNested,
                    _ => LineAction::StripOuter,
                },
            };
            let rewritten = apply(action, line);
            (rewritten != line.text).then(|| LineEdit::line(line.index, rewritten))
        })
        .collect();

    LineToggle { decision, edits }
}

fn decide(selected: &[SelectedLine]) -> LineDecision {
    let any_commented = selected.iter().any(|line| line.state.is_commented());
    let all_level1 = selected.iter().all(|line| line.state.level == 1);
    let all_level2 = selected.iter().all(|line| line.state.level == 2);

    if all_level2 && any_commented {
        LineDecision::StripOuter
    } else if all_level1 && any_commented {
        LineDecision::AddNested
    } else {
        LineDecision::PerLine
    }
}

fn apply(action: LineAction, line: &SelectedLine) -> String {
    match action {
        LineAction::AddSimple => add_simple(line.family, line.text),
        LineAction::AddNested => {
            let kind = line.state.kind;
            match (kind.nested(line.family), kind.split(line.text)) {
                (Some(nested), Some((indent, content))) => nested.wrap(indent, content),
                _ => line.text.to_string(),
            }
        }
        LineAction::StripOuter => match line.state.kind.split(line.text) {
            Some((indent, content)) => format!("{}{}", indent, content),
            None => line.text.to_string(),
        },
    }
}

/// Comment a line with the family's simple marker, keeping its indentation.
pub fn add_simple(family: CommentFamily, text: &str) -> String {
    let (indent, content) = split_indent(text);
    match family.line_marker() {
        Some(prefix) => format!("{}{}{}", indent, prefix, content),
        None => {
            let marker = family.block_marker();
            format!("{}{}{}{}", indent, marker.open, content, marker.close)
        }
    }
}
