//! Line comment classification.
//!
//! A line's comment state is derived purely from its trimmed text by walking an
//! ordered rule list. Nested shapes come before their simple counterparts, so the
//! first match is always the most specific one and no backtracking is needed.
//!
//! | order | kind | shape | level |
//! |---|---|---|---|
//! | 1 | `MarkupNested` | `<!-- /* … */ -->` | 2 |
//! | 2 | `SlashLineNested` | `// /* … */` | 2 |
//! | 3 | `SlashBlockNested` | `/* // … */` | 2 |
//! | 4 | `StyleNested` | `/* ! … ! */` | 2 |
//! | 5 | `HashNested` | `""" # … """` | 2 |
//! | 6 | `Markup` | `<!-- … -->` | 1 |
//! | 7 | `SlashLine` | `// …` | 1 |
//! | 8 | `SlashBlock` | `/* … */` | 1 |
//! | 9 | `HashLine` | `# …` | 1 |
//! | 10 | `HashBlock` | `""" … """` | 1 |
//! | – | `Uncommented` | anything else | 0 |

use std::fmt;

use super::registry::{CommentFamily, MarkerPair};
use crate::utils::{is_blank, split_indent, strip_close, strip_open};

/// Concrete marker shape of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    MarkupNested,
    SlashLineNested,
    SlashBlockNested,
    StyleNested,
    HashNested,
    Markup,
    SlashLine,
    SlashBlock,
    HashLine,
    HashBlock,
    Uncommented,
}

/// Rules in evaluation order.
const RULES: [LineKind; 10] = [
    LineKind::MarkupNested,
    LineKind::SlashLineNested,
    LineKind::SlashBlockNested,
    LineKind::StyleNested,
    LineKind::HashNested,
    LineKind::Markup,
    LineKind::SlashLine,
    LineKind::SlashBlock,
    LineKind::HashLine,
    LineKind::HashBlock,
];

impl LineKind {
    /// Full marker pair of this shape. Nested shapes use the compound pair.
    pub const fn markers(self) -> MarkerPair {
        match self {
            Self::MarkupNested => MarkerPair::new("<!-- /* ", " */ -->"),
            Self::SlashLineNested => MarkerPair::new("// /* ", " */"),
            Self::SlashBlockNested => MarkerPair::new("/* // ", " */"),
            Self::StyleNested => MarkerPair::new("/* ! ", " ! */"),
            Self::HashNested => MarkerPair::new("\"\"\" # ", " \"\"\""),
            Self::Markup => MarkerPair::new("<!-- ", " -->"),
            Self::SlashLine => MarkerPair::new("// ", ""),
            Self::SlashBlock => MarkerPair::new("/* ", " */"),
            Self::HashLine => MarkerPair::new("# ", ""),
            Self::HashBlock => MarkerPair::new("\"\"\" ", " \"\"\""),
            Self::Uncommented => MarkerPair::new("", ""),
        }
    }

    pub const fn level(self) -> u8 {
        match self {
            Self::MarkupNested
            | Self::SlashLineNested
            | Self::SlashBlockNested
            | Self::StyleNested
            | Self::HashNested => 2,
            Self::Markup | Self::SlashLine | Self::SlashBlock | Self::HashLine | Self::HashBlock => 1,
            Self::Uncommented => 0,
        }
    }

    /// Shapes built from `#` or `"""`, which are code outside hash families.
    pub const fn is_hash(self) -> bool {
        matches!(self, Self::HashNested | Self::HashLine | Self::HashBlock)
    }

    /// Level 2 shape reached by nesting a marker inside this one.
    ///
    /// Block comments in a style-block family nest as `/* ! … ! */`; everywhere
    /// else the shape alone decides.
    pub fn nested(self, family: CommentFamily) -> Option<LineKind> {
        match self {
            Self::Markup => Some(Self::MarkupNested),
            Self::SlashLine => Some(Self::SlashLineNested),
            Self::SlashBlock if family == CommentFamily::StyleBlock => Some(Self::StyleNested),
            Self::SlashBlock => Some(Self::SlashBlockNested),
            Self::HashLine | Self::HashBlock => Some(Self::HashNested),
            _ => None,
        }
    }

    /// Whether a trimmed, non-empty line has this shape.
    fn matches(self, trimmed: &str) -> bool {
        let markers = self.markers();
        let open = markers.open.trim_end();
        let close = markers.close.trim_start();

        if close.is_empty() {
            return trimmed.starts_with(open);
        }
        trimmed.len() >= open.len() + close.len()
            && trimmed.starts_with(open)
            && trimmed.ends_with(close)
    }

    /// Splits a line of this shape into its indentation and the wrapped content.
    ///
    /// The padded marker is removed when present, otherwise the bare token.
    /// Trailing whitespace after a closing marker is discarded.
    pub fn split<'a>(self, line: &'a str) -> Option<(&'a str, &'a str)> {
        if self == Self::Uncommented {
            return Some(split_indent(line));
        }

        let markers = self.markers();
        let (indent, rest) = split_indent(line);
        if markers.close.is_empty() {
            return strip_open(rest, markers.open).map(|content| (indent, content));
        }

        let content = strip_open(rest.trim_end(), markers.open)?;
        let content = strip_close(content, markers.close)?;
        Some((indent, content))
    }

    /// Builds a line of this shape around `content`.
    pub fn wrap(self, indent: &str, content: &str) -> String {
        let markers = self.markers();
        format!("{}{}{}{}", indent, markers.open, content, markers.close)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarkupNested => "markup-nested",
            Self::SlashLineNested => "slash-line-nested",
            Self::SlashBlockNested => "slash-block-nested",
            Self::StyleNested => "style-nested",
            Self::HashNested => "hash-nested",
            Self::Markup => "markup",
            Self::SlashLine => "slash-line",
            Self::SlashBlock => "slash-block",
            Self::HashLine => "hash-line",
            Self::HashBlock => "hash-block",
            Self::Uncommented => "none",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comment state of one line. Recomputed from text on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineState {
    pub level: u8,
    pub kind: LineKind,
}

impl LineState {
    pub const UNCOMMENTED: LineState = LineState::of(LineKind::Uncommented);

    pub const fn of(kind: LineKind) -> Self {
        Self {
            level: kind.level(),
            kind,
        }
    }

    pub fn is_commented(&self) -> bool {
        self.level > 0
    }
}

/// Classify a line by its marker shape alone.
///
/// Total: blank lines and lines without a recognised shape are level 0.
pub fn classify(line: &str) -> LineState {
    if is_blank(line) {
        return LineState::UNCOMMENTED;
    }

    let trimmed = line.trim();
    RULES
        .iter()
        .find(|kind| kind.matches(trimmed))
        .map(|kind| LineState::of(*kind))
        .unwrap_or(LineState::UNCOMMENTED)
}

/// Classify a line as seen by `family`.
///
/// Hash shapes only count as comments in families that comment with `#`;
/// elsewhere `#include`, `#[derive]` or a `"""` string are ordinary code.
pub fn classify_in(family: CommentFamily, line: &str) -> LineState {
    let state = classify(line);
    if state.kind.is_hash() && !family.uses_hash_comments() {
        LineState::UNCOMMENTED
    } else {
        state
    }
}
