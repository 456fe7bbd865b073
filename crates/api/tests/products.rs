//! Product CRUD flow and relation includes.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{request, seed_product, seed_user, test_app};

#[tokio::test]
async fn create_requires_all_fields() {
    let app = test_app().await;

    for payload in [
        json!({}),
        json!({ "name": "Tee" }),
        json!({ "name": "Tee", "description": "soft cotton" }),
        json!({ "description": "soft cotton", "price": 19.99 }),
        json!({ "name": "Tee", "description": "soft cotton", "price": 0.0 }),
    ] {
        let (status, _, body) =
            request(&app, Method::POST, "/api/products", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing fields" }));
    }
}

#[tokio::test]
async fn create_without_category() {
    let app = test_app().await;

    let (status, _, body) = request(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Tee", "description": "soft cotton", "price": 19.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Tee");
    assert_eq!(body["price"], json!(19.99));
    assert_eq!(body["categoryId"], json!(null));
}

#[tokio::test]
async fn list_includes_category_and_reviews() {
    let app = test_app().await;

    let (_, _, category) = request(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Shirts" })),
    )
    .await;
    let category_id = category["id"].as_i64().expect("category id");

    let (status, _, product) = request(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({
            "name": "Tee",
            "description": "soft cotton",
            "price": 19.99,
            "categoryId": category_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = product["id"].as_i64().expect("product id");

    let user_id = seed_user(&app, "buyer@example.com").await;
    let (status, _, _) = request(
        &app,
        Method::POST,
        "/api/review",
        Some(json!({
            "userId": user_id,
            "productId": product_id,
            "rating": 5,
            "comment": "fits great",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _, body) = request(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["category"]["name"], "Shirts");
    let reviews = list[0]["reviews"].as_array().expect("reviews");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["comment"], "fits great");
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let app = test_app().await;
    let id = seed_product(&app, "Tee", 19.99).await;

    let (status, _, body) = request(
        &app,
        Method::PUT,
        "/api/products",
        Some(json!({
            "id": id,
            "name": "Premium Tee",
            "description": "even softer",
            "price": 29.99,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Premium Tee");
    assert_eq!(body["price"], json!(29.99));

    let (status, _, body) = request(
        &app,
        Method::PUT,
        "/api/products",
        Some(json!({
            "id": id,
            "name": "Premium Tee",
            "description": "even softer",
            "price": 0.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing fields" }));

    let (status, _, body) = request(
        &app,
        Method::PUT,
        "/api/products",
        Some(json!({
            "id": 999_999,
            "name": "x",
            "description": "x",
            "price": 1.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn delete_flow() {
    let app = test_app().await;
    let id = seed_product(&app, "Tee", 19.99).await;

    let (status, _, body) =
        request(&app, Method::DELETE, "/api/products", Some(json!({ "id": id }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Product deleted" }));

    let (status, _, _) =
        request(&app, Method::DELETE, "/api/products", Some(json!({ "id": id }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) =
        request(&app, Method::DELETE, "/api/products", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "ID is required" }));
}
