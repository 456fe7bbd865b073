//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HEMLINE_DATABASE_URL` - `SQLite` connection string (e.g., `sqlite://hemline.db`)
//!
//! ## Optional
//! - `HEMLINE_HOST` - Bind address (default: 127.0.0.1)
//! - `HEMLINE_PORT` - Listen port (default: 8000)
//! - `CORS_ALLOWED_ORIGIN` - Origin allowed to call the API cross-origin
//!   (default: <http://localhost:3000>)

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use secrecy::SecretString;
use thiserror::Error;

/// Default origin granted cross-origin access (local frontend dev server).
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `SQLite` database connection URL.
    pub database_url: SecretString,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Single origin allowed to make cross-origin requests.
    ///
    /// Every route shares this value; the per-route allowed-methods list is
    /// derived from the route's own method set.
    pub cors_allowed_origin: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("HEMLINE_DATABASE_URL")?;
        let host = get_env_or_default("HEMLINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HEMLINE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("HEMLINE_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HEMLINE_PORT".to_string(), e.to_string()))?;

        let cors_allowed_origin =
            get_env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN);
        validate_origin(&cors_allowed_origin)?;

        Ok(Self {
            database_url,
            host,
            port,
            cors_allowed_origin,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reject origins that cannot be carried in a response header.
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    HeaderValue::from_str(origin).map_err(|e| {
        ConfigError::InvalidEnvVar("CORS_ALLOWED_ORIGIN".to_string(), e.to_string())
    })?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_origin_accepts_url() {
        assert!(validate_origin("http://localhost:3000").is_ok());
        assert!(validate_origin("https://shop.example.com").is_ok());
    }

    #[test]
    fn test_validate_origin_rejects_control_chars() {
        assert!(validate_origin("http://bad\norigin").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 8000,
            cors_allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8000);
    }
}
