//! Business services that sit between route handlers and repositories.

pub mod auth;

pub use auth::{AuthError, AuthService};
