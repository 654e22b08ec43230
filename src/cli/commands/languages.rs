use anyhow::Result;
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use crate::core::{CommentFamily, LanguageId, StyleRegistry, Syntax};

pub fn languages() -> Result<ExitStatus> {
    for language in StyleRegistry::global().languages() {
        println!("{}", describe(language));
    }
    Ok(ExitStatus::Success)
}

/// One row of the language listing: `id  family  protocol`.
pub fn describe(language: LanguageId) -> String {
    let (family, protocol) = match language.syntax() {
        Syntax::Fixed(family) => (family.as_str().to_string(), family.protocol().as_str()),
        Syntax::Composite => (composite_families(), "per region"),
    };
    format!(
        "{:<16} {:<14} {}",
        language.as_str().bold(),
        family,
        protocol.dimmed()
    )
}

fn composite_families() -> String {
    [
        CommentFamily::Markup,
        CommentFamily::CodeSlash,
        CommentFamily::StyleBlock,
    ]
    .iter()
    .map(|family| family.as_str())
    .collect::<Vec<_>>()
    .join("+")
}
