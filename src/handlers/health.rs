//! Root greeting and health check endpoints.

use crate::{app::AppState, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of products currently in the catalog
    pub products: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// `GET /` plain-text greeting.
pub async fn welcome() -> &'static str {
    "Welcome to the Product API!"
}

/// Health check handler.
///
/// Reads the store, so a broken store is reported as a 500.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "products": 3,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let products = state.store.list()?.len();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        products,
        timestamp: Utc::now(),
    }))
}
