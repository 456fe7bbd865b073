//! CORS behaviour across all routes: preflights short-circuit, and every
//! response carries the full header set regardless of status.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use common::{assert_cors_headers, request, test_app, test_app_with_pool};

const CRUD_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

#[tokio::test]
async fn preflight_returns_204_with_headers_and_no_body() {
    let app = test_app().await;

    for (uri, methods) in [
        ("/api/auth", "POST,OPTIONS"),
        ("/api/categories", CRUD_METHODS),
        ("/api/products", CRUD_METHODS),
        ("/api/orders", "GET,POST,DELETE,OPTIONS"),
        ("/api/review", CRUD_METHODS),
    ] {
        let (status, headers, body) = request(&app, Method::OPTIONS, uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT, "preflight on {uri}");
        assert_eq!(body, Value::Null, "preflight body on {uri}");
        assert_cors_headers(&headers, methods);
    }
}

#[tokio::test]
async fn preflight_does_not_touch_business_logic() {
    let app = test_app().await;

    // A preflight on /api/categories must not create anything
    let (status, _, _) = request(&app, Method::OPTIONS, "/api/categories", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, _, body) = request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn success_responses_carry_cors_headers() {
    let app = test_app().await;

    let (status, headers, _) = request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_cors_headers(&headers, CRUD_METHODS);

    let (status, headers, _) = request(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Shirts" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_cors_headers(&headers, CRUD_METHODS);
}

#[tokio::test]
async fn error_responses_carry_the_same_cors_headers() {
    let app = test_app().await;

    // 400: missing fields
    let (status, headers, _) =
        request(&app, Method::POST, "/api/categories", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_cors_headers(&headers, CRUD_METHODS);

    // 404: unknown id
    let (status, headers, _) = request(
        &app,
        Method::PUT,
        "/api/categories",
        Some(json!({ "id": 999_999, "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_cors_headers(&headers, CRUD_METHODS);

    // 401: bad credentials
    let (status, headers, _) = request(
        &app,
        Method::POST,
        "/api/auth",
        Some(json!({ "email": "nobody@example.com", "password": "x", "type": "login" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_cors_headers(&headers, "POST,OPTIONS");
}

#[tokio::test]
async fn server_errors_carry_cors_headers() {
    let (app, pool) = test_app_with_pool().await;

    // Pull the table out from under the running router so the query fails
    sqlx::query("DROP TABLE categories")
        .execute(&pool)
        .await
        .expect("drop table");

    let (status, headers, body) = request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&headers, CRUD_METHODS);

    // The envelope shape holds on 5xx too, with the detail redacted
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn method_not_allowed_still_carries_cors_headers() {
    let app = test_app().await;

    // PUT is not routed on /api/orders, but the middleware wraps the
    // whole route group, so even the 405 gets stamped.
    let (status, headers, _) = request(&app, Method::PUT, "/api/orders", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_cors_headers(&headers, "GET,POST,DELETE,OPTIONS");
}
