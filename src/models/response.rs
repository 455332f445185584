//! Success envelopes returned by the product endpoints.
//!
//! Every successful JSON response carries `"status": "success"` next to its
//! payload, mirroring the `"fail"` / `"error"` bodies produced by `AppError`.

use serde::Serialize;

use crate::models::product::{Product, ProductPage, ProductStats};

const SUCCESS: &str = "success";

/// `{ "status": "success", "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS,
            data,
        }
    }
}

/// Payload wrapping a single product.
#[derive(Debug, Serialize)]
pub struct ProductData {
    pub product: Product,
}

impl From<Product> for ApiResponse<ProductData> {
    fn from(product: Product) -> Self {
        Self::success(ProductData { product })
    }
}

impl From<ProductStats> for ApiResponse<ProductStats> {
    fn from(stats: ProductStats) -> Self {
        Self::success(stats)
    }
}

#[derive(Debug, Serialize)]
pub struct ProductsData {
    pub products: Vec<Product>,
}

/// Response body for `GET /api/products`.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "success",
///   "results": 1,
///   "page": 1,
///   "total": 3,
///   "data": { "products": [ { "id": "1", "name": "Laptop", ... } ] }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub status: &'static str,

    /// Number of products in this page
    pub results: usize,

    pub page: usize,

    /// Number of matches before pagination
    pub total: usize,

    pub data: ProductsData,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            status: SUCCESS,
            results: page.products.len(),
            page: page.page,
            total: page.total,
            data: ProductsData {
                products: page.products,
            },
        }
    }
}
