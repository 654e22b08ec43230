use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::info;

use crate::core::{
    Position, Selection, StyleRegistry, ToggleMode, classify, classify_in, toggle_language,
};

use super::types::{
    ClassifyLinesParams, ClassifyLinesResult, LanguageItem, LanguagesResult, LineStateItem,
    SelectionParams, ToggleCommentParams, ToggleCommentResult,
};

#[derive(Clone)]
pub struct NestCommentMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for NestCommentMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl NestCommentMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Advance the comment state of a selection by one step
    #[tool(
        description = "Toggle nested comments on a selection of a document. Single-line selections cycle uncommented -> comment -> nested comment -> uncommented; multi-line selections are commented as one block unless perLine is true. Returns the edits and the resulting lines."
    )]
    pub async fn toggle_comment(
        &self,
        params: Parameters<ToggleCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let language = StyleRegistry::global()
            .resolve(&params.language_id)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let lines = if params.lines.is_empty() {
            vec![String::new()]
        } else {
            params.lines
        };

        let selection = match &params.selection {
            Some(selection) => to_selection(selection, &lines)?,
            None => Selection::lines(0, lines.len() - 1),
        };
        let mode = if params.per_line.unwrap_or(false) {
            ToggleMode::PerLine
        } else {
            ToggleMode::Auto
        };

        let result = toggle_language(&lines, selection, language, mode)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let new_lines = result.apply(&lines);

        to_json_result(&ToggleCommentResult::new(&result, new_lines))
    }

    /// Report the comment level of each line
    #[tool(
        description = "Classify each line's comment nesting level (0, 1 or 2) and marker shape. Pass languageId to only recognise that language's comment syntax."
    )]
    pub async fn classify_lines(
        &self,
        params: Parameters<ClassifyLinesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let language = params
            .language_id
            .as_deref()
            .map(|id| StyleRegistry::global().resolve(id))
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let states = params
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let state = match language {
                    Some(language) => classify_in(language.family_at(&params.lines, index), line),
                    None => classify(line),
                };
                LineStateItem::new(index, state)
            })
            .collect();

        to_json_result(&ClassifyLinesResult { states })
    }

    #[tool(description = "List supported language identifiers with their comment family and protocol.")]
    pub async fn list_languages(&self) -> Result<CallToolResult, McpError> {
        let languages = StyleRegistry::global()
            .languages()
            .map(LanguageItem::from)
            .collect();

        to_json_result(&LanguagesResult { languages })
    }
}

/// Convert 1-based selection parameters into a zero-based [`Selection`].
fn to_selection(params: &SelectionParams, lines: &[String]) -> Result<Selection, McpError> {
    let start_line = zero_based(params.start_line, "startLine")?;
    let end_line = match params.end_line {
        Some(line) => zero_based(line, "endLine")?,
        None => start_line,
    };
    if end_line < start_line {
        return Err(McpError::invalid_params(
            format!(
                "endLine ({}) comes before startLine ({})",
                end_line + 1,
                start_line + 1
            ),
            None,
        ));
    }

    if params.start_column.is_none() && params.end_column.is_none() {
        return Ok(Selection::lines(start_line, end_line));
    }

    let start_column = match params.start_column {
        Some(column) => zero_based(column, "startColumn")?,
        None => 0,
    };
    let end_column = match params.end_column {
        Some(column) => zero_based(column, "endColumn")?,
        None => lines
            .get(end_line)
            .map(|line| line.chars().count())
            .unwrap_or(0),
    };

    Ok(Selection::new(
        Position::new(start_line, start_column),
        Position::new(end_line, end_column),
    )
    .expand_caret())
}

fn zero_based(value: usize, field: &str) -> Result<usize, McpError> {
    value
        .checked_sub(1)
        .ok_or_else(|| McpError::invalid_params(format!("{} is 1-based, got 0", field), None))
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for NestCommentMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "nestcomment MCP toggles nested comments in source text.\n\n\
                 Available tools:\n\
                 1. list_languages - Supported language ids and their comment syntax\n\
                 2. classify_lines - Comment level (0, 1, 2) of each line\n\
                 3. toggle_comment - Advance a selection one step through its comment cycle\n\n\
                 Lines and columns are 1-based. Markup languages cycle through three states\n\
                 (none, <!-- -->, <!-- /* */ -->); most others alternate between two."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            info!("starting nestcomment MCP server v{}", env!("CARGO_PKG_VERSION"));
            let service = NestCommentMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
