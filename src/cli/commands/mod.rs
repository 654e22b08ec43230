pub mod classify;
pub mod document;
pub mod init;
pub mod languages;
pub mod toggle;

use std::{env, ops::RangeInclusive};

use anyhow::{Result, bail};
use colored::Colorize;

use super::{args::CommonArgs, report::FAILURE_MARK};
use crate::config::{Config, load_config};
use crate::core::{LanguageId, StyleRegistry};
use document::SourceDocument;

/// Everything a file command needs: config, loaded document and its language.
pub struct FileContext {
    pub config: Config,
    pub document: SourceDocument,
    pub language: LanguageId,
}

impl FileContext {
    /// Load config and the source file, then resolve the language.
    ///
    /// Returns `Ok(None)` after printing a message when the language is unknown
    /// or unsupported.
    pub fn new(common: &CommonArgs) -> Result<Option<Self>> {
        let config = load_config(&env::current_dir()?)?.config;

        let language = match &common.language {
            Some(id) => match StyleRegistry::global().resolve(id) {
                Ok(language) => language,
                Err(err) => {
                    print_unsupported(&err.to_string());
                    return Ok(None);
                }
            },
            None => match config.language_for(&common.file) {
                Some(language) => language,
                None => {
                    print_unsupported(&format!(
                        "cannot determine the language of {}; pass --language",
                        common.file.display()
                    ));
                    return Ok(None);
                }
            },
        };

        let document = SourceDocument::load(&common.file)?;

        Ok(Some(Self {
            config,
            document,
            language,
        }))
    }
}

fn print_unsupported(message: &str) {
    eprintln!("{} {}", FAILURE_MARK.red(), message);
}

/// Reject a selection reaching past the end of the file, reporting 1-based lines.
pub fn check_span(span: &RangeInclusive<usize>, line_count: usize) -> Result<()> {
    if *span.end() >= line_count {
        bail!(
            "selection line {} is outside the file ({} lines)",
            span.end() + 1,
            line_count
        );
    }
    Ok(())
}
