//! nestcomment - nested comment toggling
//!
//! nestcomment cycles a selection of source text through up to three comment
//! states (uncommented, commented, nested comment) while keeping the result valid
//! for the language's comment syntax. It ships as a library, a CLI and an MCP
//! server for AI coding agents.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Pure toggling engine (registry, classifier, line/block engines)
//! - `logging`: Tracing subscriber setup
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
pub mod utils;
