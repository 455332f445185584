//! Product data models and API request/response types.
//!
//! This module defines:
//! - `Product`: A catalog record as stored and returned to clients
//! - `ProductInput`: The validated, id-less body of a create/update request
//! - `ListQuery`: Query string accepted by the list endpoint
//! - `ProductPage` / `ProductStats`: Results computed by the product service

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page number used when `page` is missing or not a number.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when `limit` is missing or not a number.
pub const DEFAULT_LIMIT: usize = 10;

/// A product in the catalog.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "8f14e45f-ceea-467f-a0e6-1b1d6a9c3e2b",
///   "name": "Laptop",
///   "description": "High-performance laptop for work and gaming",
///   "price": 1299.99,
///   "category": "electronics",
///   "inStock": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier, unique within the collection
    pub id: String,

    pub name: String,

    /// Free text, empty when the client did not provide one
    pub description: String,

    pub price: f64,

    pub category: String,

    pub in_stock: bool,
}

/// Validated body of a create or update request.
///
/// Produced by the validation gate; holds every field except `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductInput {
    /// Attach an identifier, producing a full record.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

/// Query string for `GET /api/products`.
///
/// `page` and `limit` are kept as raw strings so a malformed value falls
/// back to its default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive exact match on `category`
    pub category: Option<String>,

    /// Case-insensitive substring match on `name` or `description`
    pub q: Option<String>,

    pub page: Option<String>,

    pub limit: Option<String>,
}

impl ListQuery {
    /// Requested page, defaulting to 1 and never below 1.
    pub fn page(&self) -> usize {
        parse_positive(self.page.as_deref(), DEFAULT_PAGE)
    }

    /// Requested page size, defaulting to 10 and never below 1.
    pub fn limit(&self) -> usize {
        parse_positive(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    /// Category filter, ignoring an empty value.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Text filter, ignoring an empty value.
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(leading_integer) {
        Some(n) if n >= 1 => usize::try_from(n).unwrap_or(usize::MAX),
        Some(_) => 1,
        None => default,
    }
}

/// Integer at the start of `raw`, ignoring whatever follows it
/// (`"2.5"` is 2, `"3abc"` is 3). Saturates instead of overflowing.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for digit in digits {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    seen.then_some(if negative { -value } else { value })
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: usize,
    /// Matches before pagination
    pub total: usize,
}

/// Aggregate counts over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub count_by_category: BTreeMap<String, usize>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> ListQuery {
        ListQuery {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_paging_defaults() {
        let q = query(None, None);
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);
    }

    #[test]
    fn test_paging_floors_at_one() {
        let q = query(Some("0"), Some("-5"));
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 1);
    }

    #[test]
    fn test_paging_ignores_garbage() {
        let q = query(Some("two"), Some(""));
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);
    }

    #[test]
    fn test_paging_reads_leading_integer() {
        let q = query(Some("2.5"), Some("3abc"));
        assert_eq!(q.page(), 2);
        assert_eq!(q.limit(), 3);

        let q = query(Some(" +4"), Some("-2x"));
        assert_eq!(q.page(), 4);
        assert_eq!(q.limit(), 1);

        let q = query(Some("99999999999999999999999"), Some("abc3"));
        assert_eq!(q.page(), usize::try_from(i64::MAX).unwrap_or(usize::MAX));
        assert_eq!(q.limit(), 10);
    }

    #[test]
    fn test_empty_filters_are_ignored() {
        let q = ListQuery {
            category: Some(String::new()),
            q: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(q.category(), None);
        assert_eq!(q.search(), None);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = ProductInput {
            name: "Kettle".to_string(),
            description: String::new(),
            price: 25.0,
            category: "kitchen".to_string(),
            in_stock: false,
        }
        .into_product("abc");

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["inStock"], false);
        assert!(json.get("in_stock").is_none());
    }
}
