use super::*;
use crate::net::types::{CreatePostInput, Post, PostWithAuthor};

fn validation_error_body(field: &str, messages: &[&str], message: &str) -> String {
    serde_json::json!({
        "error": {
            "json": {
                "message": message,
                "code": -32600,
                "data": {
                    "code": "BAD_REQUEST",
                    "httpStatus": 400,
                    "path": "posts.create",
                    "zodError": {
                        "formErrors": [],
                        "fieldErrors": { field: messages }
                    }
                }
            }
        }
    })
    .to_string()
}

#[test]
fn procedure_url_joins_base_and_path() {
    assert_eq!(procedure_url("/api/trpc", "posts.getAll"), "/api/trpc/posts.getAll");
    assert_eq!(procedure_url("/api/trpc/", "posts.create"), "/api/trpc/posts.create");
}

#[test]
fn encode_input_wraps_in_superjson() {
    let input = CreatePostInput { content: "🦀".to_owned() };
    assert_eq!(encode_input(&input), serde_json::json!({ "json": { "content": "🦀" } }));
}

#[test]
fn decode_response_unwraps_result_data() {
    let body = serde_json::json!({
        "result": {
            "data": {
                "json": [{
                    "post": { "id": "p1", "content": "hi", "createdAt": "2024-05-01T12:00:00.000Z" },
                    "author": { "username": "ferris", "profileImageUrl": "https://img.example/f.png" }
                }],
                "meta": { "values": { "0.post.createdAt": ["Date"] } }
            }
        }
    })
    .to_string();

    let posts: Vec<PostWithAuthor> = decode_response(&body).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post.id, "p1");
}

#[test]
fn decode_response_keeps_empty_list_as_success() {
    let body = r#"{"result":{"data":{"json":[]}}}"#;
    let posts: Vec<PostWithAuthor> = decode_response(body).unwrap();
    assert!(posts.is_empty());
}

#[test]
fn decode_response_surfaces_field_errors() {
    let body = validation_error_body("content", &["too long"], "validation failed");
    let err = decode_response::<Post>(&body).unwrap_err();

    assert_eq!(err.field_errors("content"), ["too long".to_owned()]);
    assert!(err.field_errors("title").is_empty());
    assert_eq!(err.server_message(), Some("validation failed"));
}

#[test]
fn decode_response_surfaces_plain_server_message() {
    let body = r#"{"error":{"json":{"message":"rate limited","code":-32029,"data":{"code":"TOO_MANY_REQUESTS","httpStatus":429}}}}"#;
    let err = decode_response::<Post>(body).unwrap_err();

    assert!(err.field_errors("content").is_empty());
    assert_eq!(err.server_message(), Some("rate limited"));
}

#[test]
fn empty_server_message_counts_as_absent() {
    let err = decode_response::<Post>(r#"{"error":{"json":{}}}"#).unwrap_err();
    assert_eq!(err, ApiError::Server(TrpcError::default()));
    assert_eq!(err.server_message(), None);
}

#[test]
fn decode_response_rejects_non_envelope_bodies() {
    let err = decode_response::<Post>("<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.server_message(), None);
}

#[test]
fn decode_http_response_reports_status_for_opaque_failures() {
    let err = decode_http_response::<Post>(502, "<html>bad gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Transport("unexpected HTTP status 502".to_owned()));
}

#[test]
fn decode_http_response_prefers_error_envelope_over_status() {
    let body = validation_error_body("content", &["too long"], "");
    let err = decode_http_response::<Post>(400, &body).unwrap_err();
    assert_eq!(err.field_errors("content"), ["too long".to_owned()]);
}
