//! Whole-span toggling.
//!
//! A multi-line selection is treated as one unit: markers go at the start of its
//! first line and the end of its last line, interior lines are left alone.
//! Two-state families flip between wrapped and unwrapped. The markup family
//! cycles none -> simple -> nested -> none, translating inner markup comments so
//! the nested block stays a single well-formed comment.

use std::ops::RangeInclusive;

use super::registry::{CommentFamily, MarkerPair, Protocol};
use super::toggle::LineEdit;
use super::translate::MarkerTranslator;
use crate::utils::{is_blank, split_indent, strip_close, strip_open};

/// Rewrite performed on a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTransition {
    /// Two-state: unwrapped -> wrapped.
    Wrap,
    /// Two-state: wrapped -> unwrapped.
    Unwrap,
    /// Three-state: none -> simple.
    AddBlock,
    /// Three-state: simple -> nested.
    AddNestedBlock,
    /// Three-state: nested -> none.
    StripAll,
}

impl BlockTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Unwrap => "unwrap",
            Self::AddBlock => "add-block",
            Self::AddNestedBlock => "add-nested-block",
            Self::StripAll => "strip-all",
        }
    }
}

/// Comment state of a block under the three-state protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    None,
    Simple,
    Nested,
}

/// Outcome of a block toggle. `transition` is `None` for an all-blank span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockToggle {
    pub family: Option<CommentFamily>,
    pub transition: Option<BlockTransition>,
    pub edits: Vec<LineEdit>,
}

/// Toggle `span` as a single block.
///
/// Leading and trailing blank lines are not part of the block. The family is the
/// one governing the block's first line.
pub fn toggle_block<F>(lines: &[&str], span: RangeInclusive<usize>, family_of: F) -> BlockToggle
where
    F: Fn(usize) -> CommentFamily,
{
    let Some(first) = span.clone().find(|&i| !is_blank(lines[i])) else {
        return BlockToggle {
            family: None,
            transition: None,
            edits: Vec::new(),
        };
    };
    let last = span.rev().find(|&i| !is_blank(lines[i])).unwrap_or(first);

    let family = family_of(first);
    let block = &lines[first..=last];
    let text = block.join("\n");

    let (rewritten, transition) = match family.protocol() {
        Protocol::TwoState => toggle_two_state(family, &text),
        Protocol::ThreeState => toggle_three_state(family, &text),
    };

    BlockToggle {
        family: Some(family),
        transition: Some(transition),
        edits: diff_edits(first, block, &rewritten),
    }
}

/// Flip a block between unwrapped and wrapped in the family's block marker.
pub fn toggle_two_state(family: CommentFamily, text: &str) -> (String, BlockTransition) {
    let marker = family.block_marker();
    if is_bounded(text, marker.open_token(), marker.close_token())
        && let Some(inner) = unwrap(text, marker.open, marker.close, marker.is_own_line())
    {
        return (inner, BlockTransition::Unwrap);
    }
    (wrap(text, marker), BlockTransition::Wrap)
}

/// Advance a block one step through none -> simple -> nested -> none.
pub fn toggle_three_state(family: CommentFamily, text: &str) -> (String, BlockTransition) {
    let outer = family.block_marker();
    let inner = family.nested_marker();
    let nested_open = format!("{}{}", outer.open, inner.open);
    let nested_close = format!("{}{}", inner.close, outer.close);
    let translator = MarkerTranslator {
        outer_open: outer.open_token(),
        outer_close: outer.close_token(),
        inner_open: inner.open_token(),
        inner_close: inner.close_token(),
    };

    match block_state(family, text) {
        BlockState::Nested => {
            if let Some(interior) = unwrap(text, &nested_open, &nested_close, false) {
                return (translator.translate_inward(&interior), BlockTransition::StripAll);
            }
        }
        BlockState::Simple => {
            if let Some(interior) = strip_parts(text, outer.open, outer.close) {
                let (indent, body) = interior;
                let translated = translator.translate_outward(body);
                let rewritten = format!("{}{}{}{}", indent, nested_open, translated, nested_close);
                return (rewritten, BlockTransition::AddNestedBlock);
            }
        }
        BlockState::None => {}
    }

    (wrap(text, outer), BlockTransition::AddBlock)
}

/// Three-state classification of a block, nested checked first.
pub fn block_state(family: CommentFamily, text: &str) -> BlockState {
    let outer = family.block_marker();
    let inner = family.nested_marker();
    let nested_open = format!("{}{}", outer.open, inner.open);
    let nested_close = format!("{}{}", inner.close, outer.close);

    if is_bounded(text, nested_open.trim(), nested_close.trim()) {
        BlockState::Nested
    } else if is_bounded(text, outer.open_token(), outer.close_token()) {
        BlockState::Simple
    } else {
        BlockState::None
    }
}

/// Trimmed first line starts with `open` and trimmed last line ends with `close`.
///
/// On a single line both tokens must fit without overlapping.
fn is_bounded(text: &str, open: &str, close: &str) -> bool {
    let first = text.split('\n').next().unwrap_or_default().trim();
    let last = text.rsplit('\n').next().unwrap_or_default().trim();

    if !first.starts_with(open) || !last.ends_with(close) {
        return false;
    }
    text.contains('\n') || first.len() >= open.len() + close.len()
}

fn wrap(text: &str, marker: MarkerPair) -> String {
    if marker.is_own_line() {
        return format!("{}{}{}", marker.open, text, marker.close);
    }
    let (indent, body) = split_indent(text);
    format!("{}{}{}{}", indent, marker.open, body, marker.close)
}

/// Remove one open marker after the first line's indentation and one close
/// marker from the end of the last line.
fn strip_parts<'a>(text: &'a str, open: &str, close: &str) -> Option<(&'a str, &'a str)> {
    let (indent, body) = split_indent(text);
    let body = strip_open(body, open)?;
    let body = strip_close(body.trim_end(), close)?;
    Some((indent, body))
}

fn unwrap(text: &str, open: &str, close: &str, own_line: bool) -> Option<String> {
    let (indent, body) = strip_parts(text, open, close)?;
    if own_line {
        Some(body.to_string())
    } else {
        Some(format!("{}{}", indent, body))
    }
}

/// Minimal edits turning `old` (starting at document line `first`) into `new_text`.
///
/// Same line count: one edit per changed line. Otherwise one edit for the span.
fn diff_edits(first: usize, old: &[&str], new_text: &str) -> Vec<LineEdit> {
    let new_lines: Vec<&str> = new_text.split('\n').collect();
    if new_lines.len() != old.len() {
        return vec![LineEdit {
            lines: first..first + old.len(),
            text: new_text.to_string(),
        }];
    }

    old.iter()
        .zip(new_lines)
        .enumerate()
        .filter(|(_, (before, after))| before != &after)
        .map(|(offset, (_, after))| LineEdit::line(first + offset, after.to_string()))
        .collect()
}
