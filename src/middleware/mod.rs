//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Log requests
//! - Authenticate requests
//! - Short-circuit requests (reject unauthorized or invalid bodies)

/// API key authentication middleware
pub mod auth;
/// Query and path extractors with JSON rejections
pub mod extract;
/// Request logging middleware
pub mod logging;
/// Product body validation extractor
pub mod validate;
