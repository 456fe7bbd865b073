//! Hemline API library.
//!
//! This crate provides the API server as a library, allowing the full
//! router to be driven in-process by integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, http::header::InvalidHeaderValue, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
///
/// # Errors
///
/// Returns `InvalidHeaderValue` if the configured CORS origin cannot be
/// carried in a response header.
pub fn app(state: AppState) -> Result<Router, InvalidHeaderValue> {
    let api = routes::api_routes(state.config())?;

    Ok(Router::new()
        .route("/health", get(routes::health))
        .route("/health/ready", get(routes::readiness))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
