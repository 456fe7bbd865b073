//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (verifies database)
//!
//! POST /api/auth                - Register or login (disambiguated by `type`)
//!
//! GET/POST/PUT/DELETE /api/categories
//! GET/POST/PUT/DELETE /api/products
//! GET/POST/DELETE     /api/orders
//! GET/POST/PUT/DELETE /api/review
//! ```
//!
//! Every `/api` route group is wrapped in the CORS middleware; ids travel in
//! JSON bodies, including for PUT and DELETE.

pub mod auth;
pub mod categories;
pub mod orders;
pub mod products;
pub mod reviews;

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, header::InvalidHeaderValue},
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::config::ApiConfig;
use crate::middleware::{CorsConfig, cors_middleware};
use crate::state::AppState;

/// Create the `/api` router with per-route CORS policies.
///
/// # Errors
///
/// Returns `InvalidHeaderValue` if the configured origin cannot be carried
/// in a header (already validated at config load).
pub fn api_routes(config: &ApiConfig) -> Result<Router<AppState>, InvalidHeaderValue> {
    let origin = config.cors_allowed_origin.as_str();

    let auth_cors = CorsConfig::new(origin, &[Method::POST, Method::OPTIONS])?;
    let crud_cors = CorsConfig::new(
        origin,
        &[
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ],
    )?;
    let orders_cors = CorsConfig::new(
        origin,
        &[Method::GET, Method::POST, Method::DELETE, Method::OPTIONS],
    )?;

    let auth = Router::new()
        .route("/api/auth", post(auth::authenticate))
        .layer(from_fn_with_state(auth_cors, cors_middleware));

    let categories = Router::new()
        .route(
            "/api/categories",
            get(categories::list)
                .post(categories::create)
                .put(categories::update)
                .delete(categories::delete),
        )
        .layer(from_fn_with_state(crud_cors.clone(), cors_middleware));

    let products = Router::new()
        .route(
            "/api/products",
            get(products::list)
                .post(products::create)
                .put(products::update)
                .delete(products::delete),
        )
        .layer(from_fn_with_state(crud_cors.clone(), cors_middleware));

    let orders = Router::new()
        .route(
            "/api/orders",
            get(orders::list).post(orders::create).delete(orders::delete),
        )
        .layer(from_fn_with_state(orders_cors, cors_middleware));

    let reviews = Router::new()
        .route(
            "/api/review",
            get(reviews::list)
                .post(reviews::create)
                .put(reviews::update)
                .delete(reviews::delete),
        )
        .layer(from_fn_with_state(crud_cors, cors_middleware));

    Ok(Router::new()
        .merge(auth)
        .merge(categories)
        .merge(products)
        .merge(orders)
        .merge(reviews))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
