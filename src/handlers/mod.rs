//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Delegates to the product service
//! 3. Returns HTTP response (JSON, status code)

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Root greeting and health check
pub mod health;
/// Product catalog endpoints
pub mod products;

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Fallback for known paths hit with a method they do not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
