//! Toggle command - advance the comment state of a selection in a file.
//!
//! Without `--lines` the whole file is the selection. Use `--apply` to rewrite
//! the file (default is dry-run mode, which previews the edits).

use anyhow::Result;
use colored::Colorize;

use super::super::{
    args::ToggleCommand,
    exit_status::ExitStatus,
    report::{self, SUCCESS_MARK},
};
use super::{FileContext, check_span};
use crate::core::{Selection, ToggleMode, toggle_language};

pub fn toggle(cmd: ToggleCommand) -> Result<ExitStatus> {
    let Some(FileContext {
        config,
        mut document,
        language,
    }) = FileContext::new(&cmd.common)?
    else {
        return Ok(ExitStatus::Failure);
    };

    let selection = match &cmd.common.lines {
        Some(range) => range.to_selection(),
        None => Selection::lines(0, document.lines.len() - 1),
    };
    check_span(&selection.line_span(), document.lines.len())?;

    let mode = if cmd.per_line || config.per_line {
        ToggleMode::PerLine
    } else {
        ToggleMode::Auto
    };

    let result = toggle_language(&document.lines, selection, language, mode)?;
    let path = document.display_path();

    if result.is_empty() {
        println!(
            "{} Nothing to toggle in {} (only blank lines selected).",
            SUCCESS_MARK.green(),
            path
        );
        return Ok(ExitStatus::Success);
    }

    let changed: usize = result.edits.iter().map(|edit| edit.lines.len()).sum();

    if cmd.apply {
        document.apply(&result);
        document.save()?;
        println!(
            "{} {} {} line(s) in {} ({}, {}).",
            SUCCESS_MARK.green(),
            "Toggled".green().bold(),
            changed,
            path,
            result.engine,
            result.transition
        );
    } else {
        report::print_edits(&path, &document.lines, &result);
        println!(
            "{} {} line(s) in {} ({}, {}).",
            "Would rewrite".yellow().bold(),
            changed,
            path,
            result.engine,
            result.transition
        );
        println!("Run with {} to rewrite the file.", "--apply".cyan());
    }

    Ok(ExitStatus::Success)
}
