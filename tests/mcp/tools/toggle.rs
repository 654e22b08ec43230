use nestcomment::mcp::{NestCommentMcpServer, types::SelectionParams};
use pretty_assertions::assert_eq;
use rmcp::model::ErrorCode;

use crate::{extract_tool_result_json, line_selection, result_lines, toggle_params};

// ============================================================================
// toggle_comment tests
// ============================================================================

#[tokio::test]
async fn test_toggle_single_line_markup() {
    let server = NestCommentMcpServer::new();

    let result = server
        .toggle_comment(toggle_params(&["<div>x</div>"], "html"))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["languageId"], "html");
    assert_eq!(json["engine"], "line");
    assert_eq!(json["transition"], "per-line");
    assert_eq!(json["edits"][0]["startLine"], 1);
    assert_eq!(json["edits"][0]["endLine"], 1);
    assert_eq!(json["edits"][0]["text"][0], "<!-- <div>x</div> -->");
    assert_eq!(result_lines(&json), vec!["<!-- <div>x</div> -->"]);
}

#[tokio::test]
async fn test_toggle_markup_block_three_state_cycle() {
    let server = NestCommentMcpServer::new();
    let start = vec!["<ul>", "  <!-- note -->", "  <li>a</li>", "</ul>"];

    let mut current: Vec<String> = start.iter().map(|s| s.to_string()).collect();
    let mut transitions = Vec::new();
    for _ in 0..3 {
        let text: Vec<&str> = current.iter().map(String::as_str).collect();
        let json = extract_tool_result_json(
            &server
                .toggle_comment(toggle_params(&text, "html"))
                .await
                .unwrap(),
        );
        transitions.push(json["transition"].as_str().unwrap().to_string());
        current = result_lines(&json);
    }

    assert_eq!(transitions, vec!["add-block", "add-nested-block", "strip-all"]);
    assert_eq!(current, start);
}

#[tokio::test]
async fn test_toggle_with_selection_and_per_line() {
    let server = NestCommentMcpServer::new();

    let mut params = toggle_params(&["a();", "b();", "c();"], "javascript");
    params.0.selection = Some(line_selection(2, 3));
    params.0.per_line = Some(true);

    let json = extract_tool_result_json(&server.toggle_comment(params).await.unwrap());
    assert_eq!(json["engine"], "line");
    assert_eq!(result_lines(&json), vec!["a();", "// b();", "// c();"]);
}

#[tokio::test]
async fn test_toggle_caret_expands_to_line() {
    let server = NestCommentMcpServer::new();

    let mut params = toggle_params(&["x = 1", "y = 2"], "python");
    params.0.selection = Some(SelectionParams {
        start_line: 2,
        start_column: Some(3),
        end_line: None,
        end_column: Some(3),
    });

    let json = extract_tool_result_json(&server.toggle_comment(params).await.unwrap());
    assert_eq!(result_lines(&json), vec!["x = 1", "# y = 2"]);
}

#[tokio::test]
async fn test_toggle_empty_document() {
    let server = NestCommentMcpServer::new();

    let json = extract_tool_result_json(
        &server
            .toggle_comment(toggle_params(&[], "rust"))
            .await
            .unwrap(),
    );
    assert_eq!(json["transition"], "unchanged");
    assert_eq!(json["edits"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_toggle_unsupported_language_is_invalid_params() {
    let server = NestCommentMcpServer::new();

    let err = server
        .toggle_comment(toggle_params(&["x"], "brainfuck"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("brainfuck"));
}

#[tokio::test]
async fn test_toggle_selection_out_of_range_is_invalid_params() {
    let server = NestCommentMcpServer::new();

    let mut params = toggle_params(&["x"], "go");
    params.0.selection = Some(line_selection(1, 4));

    let err = server.toggle_comment(params).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_toggle_zero_line_is_invalid_params() {
    let server = NestCommentMcpServer::new();

    let mut params = toggle_params(&["x"], "go");
    params.0.selection = Some(line_selection(0, 1));

    let err = server.toggle_comment(params).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("startLine"));
}

#[tokio::test]
async fn test_toggle_reversed_range_is_invalid_params() {
    let server = NestCommentMcpServer::new();

    let text = ["l1();", "l2();", "l3();", "l4();", "l5();", "l6();"];
    let mut params = toggle_params(&text, "javascript");
    params.0.selection = Some(line_selection(5, 2));
    params.0.per_line = Some(true);

    let err = server.toggle_comment(params).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("endLine (2) comes before startLine (5)"));
}
