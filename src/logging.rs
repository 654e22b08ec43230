//! Tracing setup for the binary.
//!
//! Everything is written to stderr: stdout carries command output, and for
//! `serve` the MCP protocol itself.
//!
//! - `NESTCOMMENT_LOG=trace` - every classified line
//! - `NESTCOMMENT_LOG=nestcomment::core::toggle=debug` - one event per toggle
//! - `-v` - debug for this crate when `NESTCOMMENT_LOG` is unset

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "NESTCOMMENT_LOG";

pub fn init(verbose: bool) {
    let default_level = if verbose { "nestcomment=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}
