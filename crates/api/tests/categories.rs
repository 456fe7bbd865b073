//! Category CRUD flow.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{request, test_app};

#[tokio::test]
async fn list_starts_empty() {
    let app = test_app().await;

    let (status, _, body) = request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_and_list() {
    let app = test_app().await;

    let (status, _, body) = request(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Shirts" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Shirts");
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());

    let (_, _, body) = request(&app, Method::GET, "/api/categories", None).await;
    let list = body.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Shirts");
}

#[tokio::test]
async fn create_requires_name() {
    let app = test_app().await;

    let (status, _, body) =
        request(&app, Method::POST, "/api/categories", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));

    // No write happened
    let (_, _, body) = request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn update_replaces_name() {
    let app = test_app().await;

    let (_, _, created) = request(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Shirts" })),
    )
    .await;
    let id = created["id"].as_i64().expect("id");

    let (status, _, body) = request(
        &app,
        Method::PUT,
        "/api/categories",
        Some(json!({ "id": id, "name": "Outerwear" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["name"], "Outerwear");
}

#[tokio::test]
async fn update_validates_and_404s() {
    let app = test_app().await;

    let (status, _, body) = request(
        &app,
        Method::PUT,
        "/api/categories",
        Some(json!({ "id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "ID and name are required" }));

    let (status, _, body) = request(
        &app,
        Method::PUT,
        "/api/categories",
        Some(json!({ "id": 999_999, "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Category not found" }));
}

#[tokio::test]
async fn delete_is_not_idempotent() {
    let app = test_app().await;

    let (_, _, created) = request(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Shirts" })),
    )
    .await;
    let id = created["id"].as_i64().expect("id");

    let (status, _, body) = request(
        &app,
        Method::DELETE,
        "/api/categories",
        Some(json!({ "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Category deleted" }));

    // Second delete of the same id: the row is gone
    let (status, _, body) = request(
        &app,
        Method::DELETE,
        "/api/categories",
        Some(json!({ "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Category not found" }));
}

#[tokio::test]
async fn delete_requires_id() {
    let app = test_app().await;

    let (status, _, body) =
        request(&app, Method::DELETE, "/api/categories", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "ID is required" }));
}
