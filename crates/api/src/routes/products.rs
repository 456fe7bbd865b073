//! Product CRUD routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use hemline_core::{CategoryId, Price, ProductId};

use crate::db::{RepositoryError, products::ProductRepository};
use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::{Product, ProductWithRelations};
use crate::state::AppState;

/// Request body for POST, PUT and DELETE `/api/products`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub category_id: Option<CategoryId>,
}

/// List all products with category and reviews included.
///
/// GET /api/products
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductWithRelations>>> {
    let products = ProductRepository::new(state.pool())
        .list_with_relations()
        .await?;
    Ok(Json(products))
}

/// Create a product.
///
/// POST /api/products
///
/// # Errors
///
/// - 400 `Missing fields` when name, description, or price is absent
///   (a price of zero counts as missing)
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> Result<impl IntoResponse> {
    let (Some(name), Some(description), Some(price)) = (
        req.name.filter(|n| !n.is_empty()),
        req.description.filter(|d| !d.is_empty()),
        req.price.filter(|p| !p.is_zero()),
    ) else {
        return Err(AppError::Validation("Missing fields".to_string()));
    };

    let product = ProductRepository::new(state.pool())
        .create(&name, &description, price, req.category_id)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields.
///
/// PUT /api/products
///
/// # Errors
///
/// - 400 `Missing fields` when id, name, description, or price is absent
///   (a price of zero counts as missing)
/// - 404 `Product not found` when the id does not exist
pub async fn update(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> Result<Json<Product>> {
    let (Some(id), Some(name), Some(description), Some(price)) = (
        req.id,
        req.name.filter(|n| !n.is_empty()),
        req.description.filter(|d| !d.is_empty()),
        req.price.filter(|p| !p.is_zero()),
    ) else {
        return Err(AppError::Validation("Missing fields".to_string()));
    };

    match ProductRepository::new(state.pool())
        .update(id, &name, &description, price, req.category_id)
        .await
    {
        Ok(product) => Ok(Json(product)),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound("Product not found".to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Delete a product.
///
/// DELETE /api/products
///
/// # Errors
///
/// - 400 `ID is required` when `id` is missing
/// - 404 `Product not found` when the id does not exist
pub async fn delete(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> Result<impl IntoResponse> {
    let Some(id) = req.id else {
        return Err(AppError::Validation("ID is required".to_string()));
    };

    match ProductRepository::new(state.pool()).delete(id).await {
        Ok(()) => Ok(Json(json!({ "message": "Product deleted" }))),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound("Product not found".to_string())),
        Err(e) => Err(e.into()),
    }
}
