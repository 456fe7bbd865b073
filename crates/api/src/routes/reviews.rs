//! Review CRUD routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use hemline_core::{ProductId, ReviewId, UserId};

use crate::db::{RepositoryError, reviews::ReviewRepository};
use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::{Review, ReviewWithRelations};
use crate::state::AppState;

/// Request body for POST, PUT and DELETE `/api/review`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub id: Option<ReviewId>,
    pub user_id: Option<UserId>,
    pub product_id: Option<ProductId>,
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

/// List all reviews with user and product included.
///
/// GET /api/review
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ReviewWithRelations>>> {
    let reviews = ReviewRepository::new(state.pool())
        .list_with_relations()
        .await?;
    Ok(Json(reviews))
}

/// Create a review.
///
/// POST /api/review
///
/// # Errors
///
/// - 400 `Missing fields` when userId, productId, rating, or comment is absent
///   (a rating of zero counts as missing)
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> Result<impl IntoResponse> {
    let (Some(user_id), Some(product_id), Some(rating), Some(comment)) = (
        req.user_id,
        req.product_id,
        req.rating.filter(|r| *r != 0),
        req.comment.filter(|c| !c.is_empty()),
    ) else {
        return Err(AppError::Validation("Missing fields".to_string()));
    };

    let review = ReviewRepository::new(state.pool())
        .create(user_id, product_id, rating, &comment)
        .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Replace a review's rating and comment.
///
/// PUT /api/review
///
/// # Errors
///
/// - 400 `ID, rating, and comment are required` on missing fields
///   (a rating of zero counts as missing)
/// - 404 `Review not found` when the id does not exist
pub async fn update(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> Result<Json<Review>> {
    let (Some(id), Some(rating), Some(comment)) = (
        req.id,
        req.rating.filter(|r| *r != 0),
        req.comment.filter(|c| !c.is_empty()),
    ) else {
        return Err(AppError::Validation(
            "ID, rating, and comment are required".to_string(),
        ));
    };

    match ReviewRepository::new(state.pool()).update(id, rating, &comment).await {
        Ok(review) => Ok(Json(review)),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound("Review not found".to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Delete a review.
///
/// DELETE /api/review
///
/// # Errors
///
/// - 400 `ID is required` when `id` is missing
/// - 404 `Review not found` when the id does not exist
pub async fn delete(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> Result<impl IntoResponse> {
    let Some(id) = req.id else {
        return Err(AppError::Validation("ID is required".to_string()));
    };

    match ReviewRepository::new(state.pool()).delete(id).await {
        Ok(()) => Ok(Json(json!({ "message": "Review deleted" }))),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound("Review not found".to_string())),
        Err(e) => Err(e.into()),
    }
}
