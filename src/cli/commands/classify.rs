use anyhow::Result;

use super::super::{args::ClassifyCommand, exit_status::ExitStatus, report};
use super::{FileContext, check_span};
use crate::core::{LineState, classify_in};

/// Print the comment level and shape of every selected line.
pub fn classify(cmd: ClassifyCommand) -> Result<ExitStatus> {
    let Some(FileContext {
        document, language, ..
    }) = FileContext::new(&cmd.common)?
    else {
        return Ok(ExitStatus::Failure);
    };

    let lines = &document.lines;
    let span = match &cmd.common.lines {
        Some(range) => range.to_selection().line_span(),
        None => 0..=lines.len() - 1,
    };
    check_span(&span, lines.len())?;

    let rows: Vec<(usize, &str, LineState)> = span
        .map(|index| {
            let text = lines[index].as_str();
            let family = language.family_at(lines, index);
            (index, text, classify_in(family, text))
        })
        .collect();

    report::print_states(&rows);
    Ok(ExitStatus::Success)
}
