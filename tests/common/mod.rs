#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use starwars_api::{app, apply_migrations, connect, AppState, Config};
use std::path::PathBuf;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

/// The full router over a throwaway SQLite file.
pub struct TestApp {
    app: NormalizePath<Router>,
    db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_path = std::env::temp_dir().join(format!("starwars-test-{}.db", uuid::Uuid::new_v4()));
        let config = Config {
            database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
            port: 0,
            max_connections: 1,
        };
        let (pool, backend) = connect(&config).await.expect("connect test store");
        apply_migrations(&pool, backend).await.expect("apply migrations");
        TestApp {
            app: app(AppState::new(pool)),
            db_path,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");
        self.send(request).await
    }

    /// Run a prebuilt request through the router and decode the JSON body (`Null` when empty).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.expect("router request");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.expect("read body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                panic!("body is not JSON: {e}; body={}", String::from_utf8_lossy(&bytes))
            })
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST and return the new row's id, asserting 201.
    pub async fn create(&self, uri: &str, body: Value) -> i64 {
        let (status, value) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "create {uri}: {value}");
        value["data"]["id"].as_i64().expect("created id")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Assert the JSON error envelope: `{ "message": ..., "error": <status> }`.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "body: {body}");
    assert_eq!(body["error"], expected.as_u16(), "body: {body}");
    assert!(body["message"].is_string(), "body: {body}");
}
