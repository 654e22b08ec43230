use std::process::ExitCode;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{classify::classify, init::init, languages::languages, toggle::toggle},
    exit_status::ExitStatus,
};

/// Main entry point for the nestcomment CLI.
///
/// Dispatches to the command handler. `serve` is handled in `main` before this
/// is called, since it owns the process's stdio.
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Toggle(cmd)) => toggle(cmd)?,
        Some(Command::Classify(cmd)) => classify(cmd)?,
        Some(Command::Languages) => languages()?,
        Some(Command::Init) => init()?,
        Some(Command::Serve) => bail!("Serve command should be handled before run_cli()"),
        None => bail!("No command provided. Use --help to see available commands."),
    };

    Ok(status.into())
}
