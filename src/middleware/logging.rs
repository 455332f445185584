//! Request logging middleware.

use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;

/// Log every request on the way in and its outcome on the way out.
///
/// Never rejects a request; it only observes.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::info!(
        timestamp = %Utc::now().to_rfc3339(),
        %method,
        %path,
        "Request received"
    );

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = elapsed_millis(start.elapsed()),
        "Request completed"
    );

    response
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
