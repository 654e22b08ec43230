use nestcomment::mcp::types::{ToggleCommentParams, SelectionParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::Value;


// ============================================================================
// Parameter Builders
// ============================================================================

/// Owned lines from string literals.
pub fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}

/// toggle_comment parameters over the whole document.
pub fn toggle_params(text: &[&str], language_id: &str) -> Parameters<ToggleCommentParams> {
    Parameters(ToggleCommentParams {
        lines: lines(text),
        language_id: language_id.to_string(),
        selection: None,
        per_line: None,
    })
}

/// Full-line selection of 1-based lines `start..=end`.
pub fn line_selection(start: usize, end: usize) -> SelectionParams {
    SelectionParams {
        start_line: start,
        start_column: None,
        end_line: Some(end),
        end_column: None,
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}

/// The `lines` array of a toggle_comment result as strings.
pub fn result_lines(result: &Value) -> Vec<String> {
    result["lines"]
        .as_array()
        .expect("lines should be an array")
        .iter()
        .map(|line| line.as_str().expect("line should be a string").to_string())
        .collect()
}
