use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{LanguageId, LineEdit, LineState, Syntax, ToggleResult};

// ============================================================
// Toggle Types (toggle_comment)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCommentParams {
    /// Document lines, without line terminators
    pub lines: Vec<String>,
    /// Language identifier, e.g. "typescript", "html", "vue" (see list_languages)
    pub language_id: String,
    /// Selection to toggle (default: the whole document)
    pub selection: Option<SelectionParams>,
    /// Toggle every selected line on its own instead of as one block (default: false)
    pub per_line: Option<bool>,
}

/// 1-based selection. Without columns the selection covers full lines.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionParams {
    pub start_line: usize,
    /// 1-based character column of the selection start
    pub start_column: Option<usize>,
    /// Last selected line (default: start_line)
    pub end_line: Option<usize>,
    /// 1-based character column of the selection end; column 1 excludes end_line
    pub end_column: Option<usize>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCommentResult {
    pub language_id: String,
    /// "line" or "block"
    pub engine: String,
    /// Rewrite performed, e.g. "per-line", "add-nested-block", "unchanged"
    pub transition: String,
    pub edits: Vec<EditItem>,
    /// Document lines after applying the edits
    pub lines: Vec<String>,
}

/// Replacement of lines `startLine..=endLine` (1-based) by `text`.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditItem {
    pub start_line: usize,
    pub end_line: usize,
    pub text: Vec<String>,
}

impl From<&LineEdit> for EditItem {
    fn from(edit: &LineEdit) -> Self {
        Self {
            start_line: edit.lines.start + 1,
            end_line: edit.lines.end,
            text: edit.text.split('\n').map(str::to_string).collect(),
        }
    }
}

impl ToggleCommentResult {
    pub fn new(result: &ToggleResult, lines: Vec<String>) -> Self {
        Self {
            language_id: result.language.as_str().to_string(),
            engine: result.engine.as_str().to_string(),
            transition: result.transition.as_str().to_string(),
            edits: result.edits.iter().map(EditItem::from).collect(),
            lines,
        }
    }
}

// ============================================================
// Classify Types (classify_lines)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyLinesParams {
    /// Lines to classify
    pub lines: Vec<String>,
    /// Language identifier; without it every comment shape is recognised
    pub language_id: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineStateItem {
    /// 1-based line number
    pub line: usize,
    /// Comment nesting level: 0, 1 or 2
    pub level: u8,
    /// Marker shape matched, e.g. "slash-line", "markup-nested", "none"
    pub kind: String,
}

impl LineStateItem {
    pub fn new(index: usize, state: LineState) -> Self {
        Self {
            line: index + 1,
            level: state.level,
            kind: state.kind.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyLinesResult {
    pub states: Vec<LineStateItem>,
}

// ============================================================
// Language Types (list_languages)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageItem {
    pub id: String,
    pub name: String,
    /// Comment family, or "composite" for documents with per-region families
    pub family: String,
    /// "two-state", "three-state", or "per-region"
    pub protocol: String,
}

impl From<LanguageId> for LanguageItem {
    fn from(language: LanguageId) -> Self {
        let (family, protocol) = match language.syntax() {
            Syntax::Fixed(family) => (family.as_str(), family.protocol().as_str()),
            Syntax::Composite => ("composite", "per-region"),
        };
        Self {
            id: language.as_str().to_string(),
            name: language.display_name().to_string(),
            family: family.to_string(),
            protocol: protocol.to_string(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResult {
    pub languages: Vec<LanguageItem>,
}
