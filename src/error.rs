//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::store::StoreError;

/// Message sent to clients in place of the details of an unexpected error.
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Operational errors** (`fail`): invalid API key, invalid body,
///   unknown product or route, unsupported method. Their message is shown to the client.
/// - **Unexpected errors** (`error`): store faults and panics. The client
///   receives a generic message; the details are logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Product store operation failed (e.g., poisoned lock, duplicate id).
    ///
    /// This wraps any StoreError using the `#[from]` attribute, which
    /// automatically implements `From<StoreError> for AppError`.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// API key is missing or does not match the configured secret.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid or missing API key")]
    InvalidApiKey,

    /// Requested product does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("No product found with ID {0}")]
    ProductNotFound(String),

    /// No route matches the request path.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Can't find {0} on this server")]
    RouteNotFound(String),

    /// The path exists but has no handler for this method.
    ///
    /// Returns HTTP 405 Method Not Allowed.
    #[error("Method {method} is not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Product body failed validation, one entry per violated field.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// Request body could not be parsed as JSON.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Unexpected fault outside the store (e.g., a handler panic).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AppError::ProductNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// `"fail"` for operational errors, `"error"` for unexpected ones
    pub status: &'static str,
    pub message: String,
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// ```json
/// {
///   "status": "fail",
///   "message": "No product found with ID 42"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidApiKey` → 401 Unauthorized
/// - `ProductNotFound`, `RouteNotFound` → 404 Not Found
/// - `MethodNotAllowed` → 405 Method Not Allowed
/// - `Validation`, `InvalidRequest` → 400 Bad Request
/// - `Store`, `Internal` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed with an unexpected error");
            ErrorBody {
                status: "error",
                message: GENERIC_ERROR_MESSAGE.to_string(),
            }
        } else {
            ErrorBody {
                status: "fail",
                message: self.to_string(),
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Turn a caught handler panic into the standard 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_operational_error_is_fail_with_message() {
        let (status, body) = render(AppError::ProductNotFound("42".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "No product found with ID 42");
    }

    #[tokio::test]
    async fn test_validation_messages_are_joined() {
        let error = AppError::Validation(vec!["a is bad".to_string(), "b is bad".to_string()]);
        let (status, body) = render(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "a is bad; b is bad");
    }

    #[tokio::test]
    async fn test_unexpected_error_hides_details() {
        let (status, body) = render(AppError::Store(StoreError::Poisoned)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Something went wrong");
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(AppError::InvalidApiKey.status_code(), StatusCode::UNAUTHORIZED);
    }
}
