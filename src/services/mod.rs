//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They work against the `ProductStore` trait, never a concrete backend.

pub mod product_service;
