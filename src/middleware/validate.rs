//! Product body validation.
//!
//! `ValidatedProduct` is an extractor: a handler that takes it as an argument
//! only runs once the JSON body has been parsed and every field checked.
//! All violations are reported together in one 400 response.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::{error::AppError, models::product::ProductInput};

/// A create/update body that passed validation.
#[derive(Debug)]
pub struct ValidatedProduct(pub ProductInput);

impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(request, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

        validate_product(&body).map(ValidatedProduct)
    }
}

/// Check a product body, collecting every violation.
///
/// Violations are reported in field order: name, description, price,
/// category, inStock.
pub fn validate_product(body: &Value) -> Result<ProductInput, AppError> {
    let Some(fields) = body.as_object() else {
        return Err(AppError::InvalidRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let mut errors = Vec::new();

    let name = non_empty_string(fields, "name");
    if name.is_none() {
        errors.push("name is required and must be a non-empty string".to_string());
    }

    let description = match fields.get("description") {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => None,
    };
    if description.is_none() {
        errors.push("description must be a string".to_string());
    }

    let price = fields
        .get("price")
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite());
    if price.is_none() {
        errors.push("price is required and must be a valid number".to_string());
    }

    let category = non_empty_string(fields, "category");
    if category.is_none() {
        errors.push("category is required and must be a non-empty string".to_string());
    }

    let in_stock = fields.get("inStock").and_then(Value::as_bool);
    if in_stock.is_none() {
        errors.push("inStock is required and must be a boolean".to_string());
    }

    match (name, description, price, category, in_stock) {
        (Some(name), Some(description), Some(price), Some(category), Some(in_stock)) => {
            Ok(ProductInput {
                name,
                description,
                price,
                category,
                in_stock,
            })
        }
        _ => Err(AppError::Validation(errors)),
    }
}

fn non_empty_string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations(body: Value) -> Vec<String> {
        match validate_product(&body) {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_valid_body_and_defaults_description() {
        let input = validate_product(&json!({
            "name": "Desk Lamp",
            "price": 35,
            "category": "home",
            "inStock": true
        }))
        .unwrap();

        assert_eq!(input.name, "Desk Lamp");
        assert_eq!(input.description, "");
        assert_eq!(input.price, 35.0);
        assert!(input.in_stock);
    }

    #[test]
    fn test_null_description_is_empty() {
        let input = validate_product(&json!({
            "name": "Desk Lamp",
            "description": null,
            "price": 35.5,
            "category": "home",
            "inStock": false
        }))
        .unwrap();
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_string_price_is_rejected() {
        let errors = violations(json!({
            "name": "Desk Lamp",
            "price": "abc",
            "category": "home",
            "inStock": true
        }));
        assert_eq!(errors, ["price is required and must be a valid number"]);
    }

    #[test]
    fn test_reports_every_violation_in_order() {
        let errors = violations(json!({ "name": "   ", "description": 7, "inStock": "yes" }));
        assert_eq!(errors.len(), 5);
        assert!(errors[0].starts_with("name"));
        assert!(errors[1].starts_with("description"));
        assert!(errors[2].starts_with("price"));
        assert!(errors[3].starts_with("category"));
        assert!(errors[4].starts_with("inStock"));
    }

    #[test]
    fn test_non_object_body_is_invalid_request() {
        assert!(matches!(
            validate_product(&json!([1, 2, 3])),
            Err(AppError::InvalidRequest(_))
        ));
    }
}
