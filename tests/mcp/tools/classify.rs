use nestcomment::mcp::{NestCommentMcpServer, types::ClassifyLinesParams};
use rmcp::{handler::server::wrapper::Parameters, model::ErrorCode};

use crate::{extract_tool_result_json, lines};

// ============================================================================
// classify_lines tests
// ============================================================================

#[tokio::test]
async fn test_classify_without_language() {
    let server = NestCommentMcpServer::new();

    let params = Parameters(ClassifyLinesParams {
        lines: lines(&["x", "# y", "<!-- /* z */ -->", ""]),
        language_id: None,
    });
    let json = extract_tool_result_json(&server.classify_lines(params).await.unwrap());
    let states = json["states"].as_array().unwrap();

    assert_eq!(states.len(), 4);
    assert_eq!(states[0]["line"], 1);
    assert_eq!(states[0]["level"], 0);
    assert_eq!(states[1]["kind"], "hash-line");
    assert_eq!(states[1]["level"], 1);
    assert_eq!(states[2]["kind"], "markup-nested");
    assert_eq!(states[2]["level"], 2);
    assert_eq!(states[3]["kind"], "none");
}

#[tokio::test]
async fn test_classify_scopes_hash_to_language() {
    let server = NestCommentMcpServer::new();

    let params = Parameters(ClassifyLinesParams {
        lines: lines(&["#include <stdio.h>"]),
        language_id: Some("c".to_string()),
    });
    let json = extract_tool_result_json(&server.classify_lines(params).await.unwrap());
    assert_eq!(json["states"][0]["level"], 0);
}

#[tokio::test]
async fn test_classify_unsupported_language() {
    let server = NestCommentMcpServer::new();

    let params = Parameters(ClassifyLinesParams {
        lines: lines(&["x"]),
        language_id: Some("cobol".to_string()),
    });
    let err = server.classify_lines(params).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}
