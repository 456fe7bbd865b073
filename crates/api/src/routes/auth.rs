//! Auth route: register and login.
//!
//! A single POST endpoint disambiguated by the `type` field, preserved from
//! the public API surface. Success payloads carry the user record without
//! any credential material.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::services::AuthService;
use crate::state::AppState;

/// Request body for `/api/auth`.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    /// `"register"` or `"login"`.
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

/// Register or login, per the request's `type` field.
///
/// POST /api/auth
///
/// # Errors
///
/// - 400 `Email and password are required` on missing fields
/// - 400 `Invalid type` on an unknown `type`
/// - 400 `Email already exists` on duplicate registration
/// - 401 `Invalid email or password` on any login failure
pub async fn authenticate(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AuthRequest>,
) -> Result<impl IntoResponse> {
    let (Some(email), Some(password)) = (
        req.email.filter(|e| !e.is_empty()),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    let service = AuthService::new(state.pool());

    match req.mode.as_deref() {
        Some("register") => {
            let name = req.name.unwrap_or_default();
            let user = service.register(&email, &password, &name).await?;
            Ok((
                StatusCode::CREATED,
                Json(json!({ "message": "User registered", "user": user })),
            ))
        }
        Some("login") => {
            let user = service.login(&email, &password).await?;
            Ok((
                StatusCode::OK,
                Json(json!({ "message": "Login successful", "user": user })),
            ))
        }
        _ => Err(AppError::Validation("Invalid type".to_string())),
    }
}
