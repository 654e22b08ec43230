//! Command-line layer: argument parsing, command handlers and terminal output.

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::run_cli;
