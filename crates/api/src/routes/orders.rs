//! Order routes.
//!
//! Orders are created with a server-computed `totalPrice` (unit price times
//! quantity at creation time) and are never updated afterwards, so there is
//! no PUT here.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use hemline_core::{OrderId, ProductId, UserId};

use crate::db::{RepositoryError, orders::OrderRepository, products::ProductRepository};
use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::OrderWithRelations;
use crate::state::AppState;

/// Request body for POST and DELETE `/api/orders`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub id: Option<OrderId>,
    pub user_id: Option<UserId>,
    pub product_id: Option<ProductId>,
    pub quantity: Option<i64>,
}

/// List all orders with user and product included.
///
/// GET /api/orders
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<OrderWithRelations>>> {
    let orders = OrderRepository::new(state.pool())
        .list_with_relations()
        .await?;
    Ok(Json(orders))
}

/// Place an order.
///
/// POST /api/orders
///
/// The referenced product must exist; its current unit price fixes the
/// order's `totalPrice`.
///
/// # Errors
///
/// - 400 `Missing fields` when userId, productId, or quantity is absent
///   (a quantity of zero counts as missing)
/// - 404 `Product not found` when the product does not exist
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OrderRequest>,
) -> Result<impl IntoResponse> {
    let (Some(user_id), Some(product_id), Some(quantity)) = (
        req.user_id,
        req.product_id,
        req.quantity.filter(|q| *q != 0),
    ) else {
        return Err(AppError::Validation("Missing fields".to_string()));
    };

    let product = ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let total_price = product.price.total(quantity);

    let order = OrderRepository::new(state.pool())
        .create(user_id, product_id, quantity, total_price)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Cancel an order.
///
/// DELETE /api/orders
///
/// # Errors
///
/// - 400 `ID is required` when `id` is missing
/// - 404 `Order not found` when the id does not exist
pub async fn delete(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OrderRequest>,
) -> Result<impl IntoResponse> {
    let Some(id) = req.id else {
        return Err(AppError::Validation("ID is required".to_string()));
    };

    match OrderRepository::new(state.pool()).delete(id).await {
        Ok(()) => Ok(Json(json!({ "message": "Order deleted" }))),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound("Order not found".to_string())),
        Err(e) => Err(e.into()),
    }
}
