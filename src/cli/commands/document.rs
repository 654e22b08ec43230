//! Reading and writing source files as line buffers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::ToggleResult;

/// A file split into lines, remembering how to write it back unchanged.
///
/// Every line keeps its own terminator, so mixed LF/CRLF files survive a
/// rewrite except where lines are inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    /// Never empty: an empty file is a single empty line.
    pub lines: Vec<String>,
    /// Terminator after each line; empty for a last line without one.
    endings: Vec<&'static str>,
    /// Terminator for inserted lines: the first one found in the file.
    newline: &'static str,
}

impl SourceDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {:?}", path))?;
        Ok(Self::parse(path, &content))
    }

    /// Split `content` into lines and their terminators.
    pub fn parse(path: &Path, content: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();

        for piece in content.split_inclusive('\n') {
            let (line, ending) = if let Some(line) = piece.strip_suffix("\r\n") {
                (line, "\r\n")
            } else if let Some(line) = piece.strip_suffix('\n') {
                (line, "\n")
            } else {
                (piece, "")
            };
            lines.push(line.to_string());
            endings.push(ending);
        }
        if lines.is_empty() {
            lines.push(String::new());
            endings.push("");
        }

        let newline = endings
            .iter()
            .copied()
            .find(|ending| !ending.is_empty())
            .unwrap_or("\n");

        Self {
            path: path.to_path_buf(),
            lines,
            endings,
            newline,
        }
    }

    /// Apply toggle edits in place.
    ///
    /// Lines of a replaced range keep the range's terminators: inner lines take
    /// the first line's, the last line takes the range's last.
    pub fn apply(&mut self, result: &ToggleResult) {
        for edit in result.edits.iter().rev() {
            let replacement: Vec<String> = edit.text.split('\n').map(str::to_string).collect();
            let inner = match self.endings[edit.lines.start] {
                "" => self.newline,
                ending => ending,
            };
            let mut endings = vec![inner; replacement.len()];
            if let Some(last) = endings.last_mut() {
                *last = self.endings[edit.lines.end - 1];
            }

            self.lines.splice(edit.lines.clone(), replacement);
            self.endings.splice(edit.lines.clone(), endings);
        }
    }

    /// Render the lines with their original terminators.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .zip(&self.endings)
            .map(|(line, ending)| format!("{}{}", line, ending))
            .collect()
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.render())
            .with_context(|| format!("Failed to write source file: {:?}", self.path))
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
