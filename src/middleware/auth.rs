//! API key authentication middleware.
//!
//! This middleware guards the write endpoints:
//! 1. Extract the API key from the `x-api-key` header
//! 2. Compare it against the configured secret
//! 3. Reject missing or wrong keys with HTTP 401 before the body is read

use crate::{app::AppState, error::AppError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Read the `x-api-key` header from the request
/// 2. Hash it and compare with the configured key's digest
/// 3. If it matches: call next handler
/// 4. Otherwise: return 401 Unauthorized error
///
/// # Headers
///
/// Expected header format:
/// ```text
/// x-api-key: secret-key
/// ```
///
/// # Returns
///
/// - `Ok(Response)` if authenticated successfully (calls next handler)
/// - `Err(AppError::InvalidApiKey)` if authentication fails (returns 401)
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let rejection = match request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
    {
        Some(key) if state.api_key.matches(key) => None,
        Some(_) => Some("wrong API key"),
        None => Some("missing API key"),
    };

    if let Some(reason) = rejection {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason,
            "Rejected write request"
        );
        return Err(AppError::InvalidApiKey);
    }

    Ok(next.run(request).await)
}
