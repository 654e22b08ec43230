//! Region detection for composite (single-file component) documents.

use super::registry::CommentFamily;

/// Sub-language zone of a composite document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Script,
    Style,
    Markup,
}

impl RegionKind {
    /// Family that comments lines of this region.
    pub fn family(self) -> CommentFamily {
        match self {
            Self::Script => CommentFamily::CodeSlash,
            Self::Style => CommentFamily::StyleBlock,
            Self::Markup => CommentFamily::Markup,
        }
    }
}

const REGION_TAGS: [(&str, RegionKind); 3] = [
    ("<script", RegionKind::Script),
    ("<style", RegionKind::Style),
    ("<template", RegionKind::Markup),
];

/// Find the region governing `lines[index]`.
///
/// Walks from `index` back to the first line and returns the region of the
/// nearest line that opens a `<script`, `<style` or `<template` tag. Closing tags
/// are not region boundaries. Without any opening tag the line is markup. An
/// index past the end starts from the last line.
pub fn resolve_region<S: AsRef<str>>(lines: &[S], index: usize) -> RegionKind {
    if lines.is_empty() {
        return RegionKind::Markup;
    }

    let start = index.min(lines.len() - 1);
    lines[..=start]
        .iter()
        .rev()
        .find_map(|line| {
            let trimmed = line.as_ref().trim();
            REGION_TAGS
                .iter()
                .find(|(tag, _)| trimmed.starts_with(tag))
                .map(|(_, kind)| *kind)
        })
        .unwrap_or(RegionKind::Markup)
}
