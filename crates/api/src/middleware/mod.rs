//! HTTP middleware stack for the API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. CORS (per-route preflight handling and response header stamping)

pub mod cors;

pub use cors::{CorsConfig, cors_middleware};
