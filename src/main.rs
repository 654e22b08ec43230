use std::process::ExitCode;

use clap::Parser;
use nestcomment::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    nestcomment::logging::init(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = nestcomment::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match nestcomment::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
