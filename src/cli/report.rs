//! Report formatting and printing utilities.
//!
//! Separate from the core so nestcomment can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{LineState, ToggleResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the edits of a toggle as a `-`/`+` preview.
pub fn print_edits(path: &str, lines: &[String], result: &ToggleResult) {
    print_edits_to(path, lines, result, &mut io::stdout().lock());
}

/// Print a toggle preview to a custom writer.
///
/// Each edit gets a `--> path:line` header followed by the replaced lines and
/// their replacements, numbered 1-based.
pub fn print_edits_to<W: Write>(path: &str, lines: &[String], result: &ToggleResult, writer: &mut W) {
    let width = max_line_width(result);

    for edit in &result.edits {
        let first = edit.lines.start + 1;
        let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, first);
        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width + 1);

        for (offset, old) in lines[edit.lines.clone()].iter().enumerate() {
            let _ = writeln!(
                writer,
                " {:>width$} {} {}",
                (first + offset).to_string().blue(),
                "-".red().bold(),
                old.red(),
                width = width
            );
        }
        for (offset, new) in edit.text.split('\n').enumerate() {
            let _ = writeln!(
                writer,
                " {:>width$} {} {}",
                (first + offset).to_string().blue(),
                "+".green().bold(),
                new.green(),
                width = width
            );
        }
        let _ = writeln!(writer);
    }
}

fn max_line_width(result: &ToggleResult) -> usize {
    result
        .edits
        .iter()
        .map(|edit| (edit.lines.end + edit.text.matches('\n').count()).to_string().len())
        .max()
        .unwrap_or(1)
}

/// Print one row per classified line: `line  level  kind  text`.
pub fn print_states(rows: &[(usize, &str, LineState)]) {
    print_states_to(rows, &mut io::stdout().lock());
}

/// Print classified lines to a custom writer. `rows` carry zero-based indices.
pub fn print_states_to<W: Write>(rows: &[(usize, &str, LineState)], writer: &mut W) {
    let width = rows
        .iter()
        .map(|(index, _, _)| (index + 1).to_string().len())
        .max()
        .unwrap_or(1);

    for (index, text, state) in rows {
        let level = match state.level {
            0 => state.level.to_string().normal(),
            1 => state.level.to_string().yellow(),
            _ => state.level.to_string().magenta(),
        };
        let _ = writeln!(
            writer,
            "{:>width$}  {}  {:<18}  {}",
            (index + 1).to_string().blue(),
            level,
            state.kind.as_str(),
            text,
            width = width
        );
    }
}
