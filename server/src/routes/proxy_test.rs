use std::net::SocketAddr;

use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::{get, post};

use super::*;
use crate::config::{ServerConfig, UpstreamTimeouts};

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn state_for(upstream: String) -> AppState {
    AppState::new(ServerConfig {
        port: 0,
        upstream,
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
    })
    .unwrap()
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("https://api.example.test/", "/api/trpc/posts.getAll?batch=1"),
        "https://api.example.test/api/trpc/posts.getAll?batch=1"
    );
}

#[test]
fn hop_by_hop_matching_ignores_case() {
    assert!(is_hop_by_hop("Connection"));
    assert!(is_hop_by_hop("transfer-encoding"));
    assert!(is_hop_by_hop("Host"));
    assert!(!is_hop_by_hop("cookie"));
    assert!(!is_hop_by_hop("content-type"));
}

#[test]
fn forwardable_headers_drops_connection_headers_only() {
    let mut headers = HeaderMap::new();
    headers.insert("host", HeaderValue::from_static("chirp.local"));
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("cookie", HeaderValue::from_static("__session=abc"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));

    let forwarded = forwardable_headers(&headers);
    assert_eq!(forwarded.len(), 2);
    assert_eq!(forwarded["cookie"], "__session=abc");
    assert_eq!(forwarded["content-type"], "application/json");
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::Body("length limit exceeded".to_owned()).status(), StatusCode::BAD_REQUEST);
}

// =============================================================
// End-to-end forwarding
// =============================================================

#[tokio::test]
async fn forwards_mutation_body_and_error_status() {
    let upstream = Router::new().route(
        "/api/trpc/posts.create",
        post(|body: String| async move { (StatusCode::BAD_REQUEST, [("content-type", "application/json")], body) }),
    );
    let upstream_addr = spawn(upstream).await;
    let proxy_addr = spawn(crate::routes::api_routes(state_for(format!("http://{upstream_addr}")))).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{proxy_addr}/api/trpc/posts.create"))
        .header("content-type", "application/json")
        .body(r#"{"json":{"content":"🦀"}}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert_eq!(resp.text().await.unwrap(), r#"{"json":{"content":"🦀"}}"#);
}

#[tokio::test]
async fn forwards_query_string_and_cookies() {
    let upstream = Router::new().route(
        "/api/auth/me",
        get(|uri: Uri, headers: HeaderMap| async move {
            let cookie = headers.get("cookie").and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
            format!("{}|{cookie}", uri.query().unwrap_or_default())
        }),
    );
    let upstream_addr = spawn(upstream).await;
    let proxy_addr = spawn(crate::routes::api_routes(state_for(format!("http://{upstream_addr}")))).await;

    let body = reqwest::Client::new()
        .get(format!("http://{proxy_addr}/api/auth/me?fresh=1"))
        .header("cookie", "__session=abc")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "fresh=1|__session=abc");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop a listener to get a local port with nothing behind it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let proxy_addr = spawn(crate::routes::api_routes(state_for(format!("http://{dead_addr}")))).await;
    let resp = reqwest::get(format!("http://{proxy_addr}/api/trpc/posts.getAll")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_answers_locally() {
    let proxy_addr = spawn(crate::routes::api_routes(state_for("http://127.0.0.1:9".to_owned()))).await;
    let resp = reqwest::get(format!("http://{proxy_addr}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
