//! Category CRUD routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use hemline_core::CategoryId;

use crate::db::{RepositoryError, categories::CategoryRepository};
use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::Category;
use crate::state::AppState;

/// Request body for POST and PUT `/api/categories`.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub id: Option<CategoryId>,
    pub name: Option<String>,
}

/// List all categories.
///
/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Create a category.
///
/// POST /api/categories
///
/// # Errors
///
/// - 400 `Name is required` when `name` is missing or empty
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CategoryRequest>,
) -> Result<impl IntoResponse> {
    let Some(name) = req.name.filter(|n| !n.is_empty()) else {
        return Err(AppError::Validation("Name is required".to_string()));
    };

    let category = CategoryRepository::new(state.pool()).create(&name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Replace a category's name.
///
/// PUT /api/categories
///
/// # Errors
///
/// - 400 `ID and name are required` on missing fields
/// - 404 `Category not found` when the id does not exist
pub async fn update(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CategoryRequest>,
) -> Result<Json<Category>> {
    let (Some(id), Some(name)) = (req.id, req.name.filter(|n| !n.is_empty())) else {
        return Err(AppError::Validation("ID and name are required".to_string()));
    };

    match CategoryRepository::new(state.pool()).update(id, &name).await {
        Ok(category) => Ok(Json(category)),
        Err(RepositoryError::NotFound) => {
            Err(AppError::NotFound("Category not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a category.
///
/// DELETE /api/categories
///
/// # Errors
///
/// - 400 `ID is required` when `id` is missing
/// - 404 `Category not found` when the id does not exist
pub async fn delete(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CategoryRequest>,
) -> Result<impl IntoResponse> {
    let Some(id) = req.id else {
        return Err(AppError::Validation("ID is required".to_string()));
    };

    match CategoryRepository::new(state.pool()).delete(id).await {
        Ok(()) => Ok(Json(json!({ "message": "Category deleted" }))),
        Err(RepositoryError::NotFound) => {
            Err(AppError::NotFound("Category not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
