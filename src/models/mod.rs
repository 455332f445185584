//! Data models for the product catalog.
//!
//! This module contains the domain record, the request/response shapes
//! exchanged with clients, and the API key used to gate writes.

/// API key authentication model
pub mod api_key;
/// Product record, list query, and computed results
pub mod product;
/// Success response envelopes
pub mod response;
