//! Test helper utilities for webserver integration tests

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use webserver::{RealFileMaterializer, ServerConfig, WebServer};

/// Router backed by a real materializer in a fresh temp directory
pub fn temp_router() -> (Router, TempDir) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config = ServerConfig {
        output_dir: temp_dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let materializer = RealFileMaterializer::with_output_dir(temp_dir.path().to_path_buf());
    (WebServer::new(config, materializer).build_router(), temp_dir)
}

/// Build a JSON request, optionally tagged with a session id
pub fn json_request(method: Method, uri: &str, body: Value, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(session) = session {
        builder = builder.header("x-session-id", session);
    }
    builder.body(Body::from(body.to_string())).expect("valid request")
}

pub fn get_request(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(session) = session {
        builder = builder.header("x-session-id", session);
    }
    builder.body(Body::empty()).expect("valid request")
}

/// Drive one request through the router and decode the JSON body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
