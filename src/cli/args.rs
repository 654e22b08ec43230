//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `toggle`: Advance the comment state of a selection (dry-run unless `--apply`)
//! - `classify`: Print the comment level of each selected line
//! - `languages`: List supported language ids with their comment family
//! - `init`: Initialize nestcomment configuration file
//! - `serve`: Start MCP server for AI integration

use std::{path::PathBuf, str::FromStr};

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{Position, Selection};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Toggle(cmd)) => cmd.common.verbose,
            Some(Command::Classify(cmd)) => cmd.common.verbose,
            Some(Command::Languages) | Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by file commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source file to operate on
    pub file: PathBuf,

    /// Lines to select, 1-based: `L`, `L-L`, `L:C-L:C` (default: whole file)
    #[arg(long, value_parser = parse_line_range)]
    pub lines: Option<LineRange>,

    /// Language id (overrides config file and file extension)
    #[arg(long)]
    pub language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ToggleCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Toggle every selected line on its own, even for multi-line selections
    #[arg(long)]
    pub per_line: bool,

    /// Actually rewrite the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Toggle nested comments on a selection of a file
    Toggle(ToggleCommand),
    /// Show the comment level of each line
    Classify(ClassifyCommand),
    /// List supported language ids
    Languages,
    /// Initialize a new .nestcommentrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}

/// A `--lines` argument, converted to zero-based positions.
///
/// Columns are 1-based on the command line and counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: Position,
    pub end: Position,
    /// False when only line numbers were given: the selection covers full lines.
    pub has_columns: bool,
}

impl LineRange {
    /// Full lines unless columns were given; a column caret expands to its line.
    pub fn to_selection(&self) -> Selection {
        if self.has_columns {
            Selection::new(self.start, self.end).expand_caret()
        } else {
            Selection::lines(self.start.line, self.end.line)
        }
    }
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, last) = match s.split_once('-') {
            Some((first, last)) => (first, Some(last)),
            None => (s, None),
        };

        let (start, start_col) = parse_point(first)?;
        let (end, end_col) = match last {
            Some(last) => parse_point(last)?,
            None => (start, start_col),
        };

        if end.line < start.line {
            return Err(format!("range end comes before its start: '{}'", s));
        }

        Ok(Self {
            start,
            end,
            has_columns: start_col || end_col,
        })
    }
}

pub fn parse_line_range(s: &str) -> Result<LineRange, String> {
    s.parse()
}

/// Parse `L` or `L:C` into a zero-based position and whether a column was given.
fn parse_point(s: &str) -> Result<(Position, bool), String> {
    let (line, column) = match s.split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (s, None),
    };

    let line = parse_one_based(line, "line")?;
    let has_column = column.is_some();
    let column = match column {
        Some(column) => parse_one_based(column, "column")?,
        None => 0,
    };

    Ok((Position::new(line, column), has_column))
}

fn parse_one_based(s: &str, what: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(format!("{} numbers start at 1", what)),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(format!("invalid {} number: '{}'", what, s)),
    }
}
