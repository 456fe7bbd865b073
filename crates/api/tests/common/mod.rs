//! Shared helpers for integration tests.
//!
//! Each test builds a fresh router over its own in-memory `SQLite` database,
//! so tests are isolated and need no external services.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use hemline_api::config::ApiConfig;
use hemline_api::db;
use hemline_api::state::AppState;

/// Build the full application router over a fresh in-memory database.
pub async fn test_app() -> Router {
    let (app, _) = test_app_with_pool().await;
    app
}

/// Like [`test_app`], but also hands back the pool so a test can manipulate
/// the database underneath the running router.
pub async fn test_app_with_pool() -> (Router, SqlitePool) {
    let options = "sqlite::memory:"
        .parse::<SqliteConnectOptions>()
        .expect("parse sqlite url")
        .foreign_keys(true);

    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect in-memory sqlite");

    db::MIGRATOR.run(&pool).await.expect("run migrations");

    let config = ApiConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().expect("parse host"),
        port: 0,
        cors_allowed_origin: "http://localhost:3000".to_string(),
    };

    let app = hemline_api::app(AppState::new(config, pool.clone())).expect("build router");
    (app, pool)
}

/// Send a request and collect (status, headers, parsed JSON body).
///
/// An empty body parses to `Value::Null`.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("build request"))
        .await
        .expect("infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, headers, value)
}

/// Register a user via the API and return their id.
pub async fn seed_user(app: &Router, email: &str) -> i64 {
    let (status, _, body) = request(
        app,
        Method::POST,
        "/api/auth",
        Some(json!({ "email": email, "password": "s3cret-pw", "type": "register" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed_user failed: {body}");
    body["user"]["id"].as_i64().expect("user id")
}

/// Create a product via the API and return its id.
pub async fn seed_product(app: &Router, name: &str, price: f64) -> i64 {
    let (status, _, body) = request(
        app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": name, "description": "test product", "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed_product failed: {body}");
    body["id"].as_i64().expect("product id")
}

/// Assert that the response headers carry the full CORS header set for the
/// given method list.
pub fn assert_cors_headers(headers: &HeaderMap, methods: &str) {
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("allow-origin header"),
        "http://localhost:3000"
    );
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .expect("allow-methods header"),
        methods
    );
    assert_eq!(
        headers
            .get("access-control-allow-headers")
            .expect("allow-headers header"),
        "Content-Type"
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .expect("allow-credentials header"),
        "true"
    );
    assert_eq!(headers.get("vary").expect("vary header"), "Origin");
}
