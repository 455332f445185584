//! Product HTTP handlers.
//!
//! This module implements the product API endpoints:
//! - GET /api/products - List products (filter + paginate)
//! - GET /api/products/stats - Count products per category
//! - GET /api/products/:id - Get product by ID
//! - POST /api/products - Create product (API key required)
//! - PUT /api/products/:id - Replace product (API key required)
//! - DELETE /api/products/:id - Delete product (API key required)

use crate::{
    app::AppState,
    error::AppError,
    middleware::{
        extract::{ApiPath, ApiQuery},
        validate::ValidatedProduct,
    },
    models::{
        product::{ListQuery, ProductStats},
        response::{ApiResponse, ProductData, ProductListResponse},
    },
    services::product_service,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

/// List products.
///
/// # Query Parameters
///
/// - `category` - case-insensitive exact match
/// - `q` - case-insensitive substring of name or description
/// - `page` - 1-based page number (default 1)
/// - `limit` - page size (default 10)
///
/// # Response (200)
///
/// ```json
/// {
///   "status": "success",
///   "results": 2,
///   "page": 1,
///   "total": 2,
///   "data": { "products": [ ... ] }
/// }
/// ```
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<ProductListResponse>, AppError> {
    let page = product_service::list_products(state.store.as_ref(), &query)?;

    Ok(Json(page.into()))
}

/// Count products per category.
///
/// # Response (200)
///
/// ```json
/// {
///   "status": "success",
///   "data": { "countByCategory": { "electronics": 2, "kitchen": 1 }, "total": 3 }
/// }
/// ```
pub async fn product_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProductStats>>, AppError> {
    let stats = product_service::product_stats(state.store.as_ref())?;

    Ok(Json(stats.into()))
}

/// Get a product by ID.
///
/// # Response
///
/// - **Success (200 OK)**: `{ "status": "success", "data": { "product": { ... } } }`
/// - **Error (404)**: No product with this ID
pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<ApiResponse<ProductData>>, AppError> {
    let product = product_service::get_product(state.store.as_ref(), &id)?;

    Ok(Json(product.into()))
}

/// Create a product.
///
/// # Authentication
///
/// Requires `x-api-key` header (checked before the body is read).
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Desk Lamp",
///   "description": "LED lamp with dimmer",
///   "price": 35.0,
///   "category": "home",
///   "inStock": true
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The created product, with its new `id`
/// - **Error (400)**: Body failed validation
/// - **Error (401)**: Missing or wrong API key
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedProduct(input): ValidatedProduct,
) -> Result<(StatusCode, Json<ApiResponse<ProductData>>), AppError> {
    let product = product_service::create_product(state.store.as_ref(), input)?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Replace every field except `id` of an existing product.
///
/// # Response
///
/// - **Success (200 OK)**: The updated product
/// - **Error (400)**: Body failed validation
/// - **Error (401)**: Missing or wrong API key
/// - **Error (404)**: No product with this ID
pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ValidatedProduct(input): ValidatedProduct,
) -> Result<Json<ApiResponse<ProductData>>, AppError> {
    let product = product_service::update_product(state.store.as_ref(), &id, input)?;

    Ok(Json(product.into()))
}

/// Delete a product and return it.
///
/// # Response
///
/// - **Success (200 OK)**: The removed product
/// - **Error (401)**: Missing or wrong API key
/// - **Error (404)**: No product with this ID
pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<ApiResponse<ProductData>>, AppError> {
    let product = product_service::delete_product(state.store.as_ref(), &id)?;

    Ok(Json(product.into()))
}
