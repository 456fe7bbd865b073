//! Cross-origin resource sharing middleware.
//!
//! One configurable middleware covers every route: it answers `OPTIONS`
//! preflights itself and stamps the CORS header set onto every outbound
//! response, whatever its status. Handlers can't bypass it because the
//! layer wraps the whole per-route router, including method-not-allowed
//! fallbacks.
//!
//! The allowed origin comes from configuration and is shared by all routes;
//! the allowed-methods list is the one per-route difference and is supplied
//! where the route group is built.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, InvalidHeaderValue, VARY,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Per-route CORS policy: one allowed origin, one allowed-methods list.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    allowed_origin: HeaderValue,
    allowed_methods: HeaderValue,
}

impl CorsConfig {
    /// Build a policy for a route that accepts `methods`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeaderValue` if the origin cannot be carried in a
    /// header (configuration is validated at startup, so this is a
    /// programming error in practice).
    pub fn new(allowed_origin: &str, methods: &[Method]) -> Result<Self, InvalidHeaderValue> {
        let method_list = methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(",");

        Ok(Self {
            allowed_origin: HeaderValue::from_str(allowed_origin)?,
            allowed_methods: HeaderValue::from_str(&method_list)?,
        })
    }

    /// Stamp the full CORS header set onto `headers`, overwriting any
    /// values a handler may have set.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allowed_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allowed_methods.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(VARY, HeaderValue::from_static("Origin"));
    }
}

/// Answer preflights and stamp CORS headers on every response.
///
/// `OPTIONS` requests short-circuit to 204 with no body; the wrapped
/// handler is never invoked. All other requests run the handler and get
/// the header set written onto the response in place - the response built
/// by the handler is reused as-is, body and status untouched.
pub async fn cors_middleware(
    State(config): State<CorsConfig>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        config.apply(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    config.apply(response.headers_mut());
    response
}
