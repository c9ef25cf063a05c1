//! In-process HTTP tests: the router is driven directly, no listener.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use circlestat_core::Node;
use circlestat_gateway::{
    app_state::AppState,
    config,
    router::build_router,
    source::{CircleSource, JsonFileCircleSource, StaticCircleSource},
};

fn app_with(source: Arc<dyn CircleSource>) -> Router {
    build_router(AppState::with_source(source))
}

fn app() -> Router {
    app_with(Arc::new(StaticCircleSource::new(vec![
        Node::root(1),
        Node::child(2, 1),
        Node::child(3, 1),
        Node::child(4, 2),
    ])))
}

async fn call(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_owned()))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

async fn call_json(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, headers, bytes) = call(app, method, uri, body).await;
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*",
        "uri={uri}"
    );
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = call_json(app(), Method::GET, "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn time_reports_float_epoch() {
    let (status, body) = call_json(app(), Method::GET, "/time", "").await;
    assert_eq!(status, StatusCode::OK);
    let epoch = body["epoch"].as_f64().expect("epoch must be a number");
    // 2020-01-01
    assert!(epoch > 1_577_836_800.0);
}

#[tokio::test]
async fn metrics_summarizes_source() {
    let (status, body) = call_json(app(), Method::GET, "/metrics", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_nodes": 4,
            "roots_count": 1,
            "max_depth": 3,
            "leaf_count": 2,
            "average_branching": 1.5,
            "height_per_root": { "1": 3 }
        })
    );
}

#[tokio::test]
async fn metrics_on_empty_source() {
    let (status, body) = call_json(app_with(Arc::new(StaticCircleSource::default())), Method::GET, "/metrics", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_nodes"], 0);
    assert_eq!(body["max_depth"], 0);
    assert_eq!(body["average_branching"], 0.0);
    assert_eq!(body["height_per_root"], json!({}));
}

#[tokio::test]
async fn metrics_source_failure_is_opaque() {
    let missing = "/nonexistent/circles-secret-path.json";
    let app = app_with(Arc::new(JsonFileCircleSource::new(missing)));
    let (status, _, bytes) = call(app, Method::GET, "/metrics", "").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "metrics_failed" }));
    assert!(!String::from_utf8_lossy(&bytes).contains("secret"));
}

#[tokio::test]
async fn metrics_from_json_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(
        &mut f,
        br#"[{"id":"a","parent_id":null,"title":"A"},{"id":"b","parent_id":"a","title":"B"}]"#,
    )
    .unwrap();

    let app = app_with(Arc::new(JsonFileCircleSource::new(f.path())));
    let (status, body) = call_json(app, Method::GET, "/metrics", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_nodes"], 2);
    assert_eq!(body["height_per_root"], json!({ "a": 2 }));
}

#[tokio::test]
async fn metrics_malformed_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut f, b"{ not json").unwrap();

    let app = app_with(Arc::new(JsonFileCircleSource::new(f.path())));
    let (status, body) = call_json(app, Method::GET, "/metrics", "").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "metrics_failed" }));
}

#[tokio::test]
async fn metrics_cyclic_source() {
    let app = app_with(Arc::new(StaticCircleSource::new(vec![
        Node::child(1, 2),
        Node::child(2, 1),
    ])));
    let (status, body) = call_json(app, Method::GET, "/metrics", "").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "cyclic_input" }));
}

#[tokio::test]
async fn metrics_duplicate_ids() {
    let app = app_with(Arc::new(StaticCircleSource::new(vec![Node::root(1), Node::root(1)])));
    let (status, body) = call_json(app, Method::GET, "/metrics", "").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "duplicate_id" }));
}

#[tokio::test]
async fn echo_json_body() {
    let (status, body) = call_json(app(), Method::POST, "/echo", r#"{"a":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "received": { "a": 1 } }));
}

#[tokio::test]
async fn echo_raw_body() {
    let (status, body) = call_json(app(), Method::POST, "/echo", "hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "received": { "_raw": "hello" } }));
}

#[tokio::test]
async fn echo_drops_invalid_utf8() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/echo")
        .body(Body::from(b"ab\xffc\xc3d".to_vec()))
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "ok": true, "received": { "_raw": "abcd" } }));
}

#[tokio::test]
async fn state_from_config_serves_inline_circles() {
    let cfg = config::load_from_str(
        "version: 1\ncircles:\n  inline:\n    - { id: 1 }\n    - { id: 2, parent_id: 1 }\n",
    )
    .unwrap();
    let app = build_router(AppState::new(&cfg));
    let (status, body) = call_json(app, Method::GET, "/metrics", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_nodes"], 2);
    assert_eq!(body["height_per_root"], json!({ "1": 2 }));
}

#[tokio::test]
async fn echo_empty_body() {
    let (status, body) = call_json(app(), Method::POST, "/echo", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "received": {} }));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    for method in [Method::GET, Method::POST] {
        let (status, body) = call_json(app(), method.clone(), "/foo", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND, "method={method}");
        assert_eq!(body, json!({ "error": "not_found" }), "method={method}");
    }
}

#[tokio::test]
async fn wrong_method_is_not_found() {
    let cases = [
        (Method::POST, "/health"),
        (Method::POST, "/metrics"),
        (Method::GET, "/echo"),
        (Method::DELETE, "/time"),
    ];
    for (method, uri) in cases {
        let (status, body) = call_json(app(), method.clone(), uri, "").await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, json!({ "error": "not_found" }), "{method} {uri}");
    }
}

#[tokio::test]
async fn preflight_on_any_path() {
    for uri in ["/echo", "/metrics", "/anything/else"] {
        let (status, headers, bytes) = call(app(), Method::OPTIONS, uri, "").await;
        assert_eq!(status, StatusCode::NO_CONTENT, "uri={uri}");
        assert!(bytes.is_empty(), "uri={uri}");
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET,POST,OPTIONS"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type"
        );
    }
}

#[tokio::test]
async fn json_content_type() {
    let (_, headers, _) = call(app(), Method::GET, "/health", "").await;
    let ct = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.starts_with("application/json"));
}
