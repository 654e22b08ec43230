//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes comment toggling to AI coding agents over stdio. Each tool call runs
//! the pure core on the lines it is given; the server never touches the disk.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server handler
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{NestCommentMcpServer, run_server};
