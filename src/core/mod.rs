//! Comment toggling core.
//!
//! Pure, synchronous and free of I/O. Hosts (the CLI and the MCP server) feed it
//! document lines plus a selection and apply the edits it returns.
//!
//! - `registry`: language id to comment family table
//! - `region`: family lookup inside composite documents
//! - `classify`: comment level of a single line
//! - `line` / `block`: the two toggle engines
//! - `translate`: inner marker rewriting for nested markup blocks
//! - `toggle`: request validation and engine dispatch

pub mod block;
pub mod classify;
pub mod error;
pub mod line;
pub mod region;
pub mod registry;
pub mod selection;
pub mod toggle;
pub mod translate;

pub use classify::{LineKind, LineState, classify, classify_in};
pub use error::ToggleError;
pub use region::{RegionKind, resolve_region};
pub use registry::{CommentFamily, LanguageId, MarkerPair, Protocol, StyleRegistry, Syntax};
pub use selection::{Position, Selection};
pub use toggle::{Engine, LineEdit, ToggleMode, ToggleResult, Transition, toggle, toggle_language};
pub use translate::{MarkerTranslator, translate_inward, translate_outward};
