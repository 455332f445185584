//! Product service - business logic behind the product endpoints.
//!
//! This service handles:
//! - Filtering and paginating the catalog
//! - Assigning identifiers to new products
//! - Mapping missing products to `ProductNotFound`
//! - Aggregate statistics

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::{
    error::AppError,
    models::product::{ListQuery, Product, ProductInput, ProductPage, ProductStats},
    store::ProductStore,
};

/// List products matching `query`.
///
/// # Process
///
/// 1. Keep products whose category equals `category` (case-insensitive)
/// 2. Keep products whose name or description contains `q` (case-insensitive)
/// 3. Skip `(page - 1) * limit` matches and take `limit`
///
/// `total` counts the matches from step 2, before pagination.
pub fn list_products(store: &dyn ProductStore, query: &ListQuery) -> Result<ProductPage, AppError> {
    let mut products = store.list()?;

    if let Some(category) = query.category() {
        let category = category.to_lowercase();
        products.retain(|p| p.category.to_lowercase() == category);
    }

    if let Some(search) = query.search() {
        let needle = search.to_lowercase();
        products.retain(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        });
    }

    let total = products.len();
    let page = query.page();
    let limit = query.limit();
    let offset = (page - 1).saturating_mul(limit);

    let products = products.into_iter().skip(offset).take(limit).collect();

    Ok(ProductPage {
        products,
        page,
        total,
    })
}

/// Get a product by exact id.
///
/// # Errors
///
/// - `ProductNotFound`: No product has this id
pub fn get_product(store: &dyn ProductStore, id: &str) -> Result<Product, AppError> {
    store
        .get(id)?
        .ok_or_else(|| AppError::ProductNotFound(id.to_string()))
}

/// Create a product with a freshly generated id and append it to the catalog.
pub fn create_product(store: &dyn ProductStore, input: ProductInput) -> Result<Product, AppError> {
    let product = input.into_product(Uuid::new_v4().to_string());
    let product = store.insert(product)?;

    tracing::info!(id = %product.id, name = %product.name, "Product created");
    Ok(product)
}

/// Replace every field except `id` of an existing product.
///
/// # Errors
///
/// - `ProductNotFound`: No product has this id
pub fn update_product(
    store: &dyn ProductStore,
    id: &str,
    input: ProductInput,
) -> Result<Product, AppError> {
    let product = store
        .update(input.into_product(id))?
        .ok_or_else(|| AppError::ProductNotFound(id.to_string()))?;

    tracing::info!(id = %product.id, "Product updated");
    Ok(product)
}

/// Remove a product, returning it.
///
/// # Errors
///
/// - `ProductNotFound`: No product has this id
pub fn delete_product(store: &dyn ProductStore, id: &str) -> Result<Product, AppError> {
    let product = store
        .delete(id)?
        .ok_or_else(|| AppError::ProductNotFound(id.to_string()))?;

    tracing::info!(id = %product.id, "Product deleted");
    Ok(product)
}

/// Count products per category across the whole catalog.
pub fn product_stats(store: &dyn ProductStore) -> Result<ProductStats, AppError> {
    let products = store.list()?;

    let mut count_by_category = BTreeMap::new();
    for product in &products {
        *count_by_category
            .entry(product.category.clone())
            .or_insert(0) += 1;
    }

    Ok(ProductStats {
        count_by_category,
        total: products.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryProductStore;

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "category" => query.category = value,
                "q" => query.q = value,
                "page" => query.page = value,
                "limit" => query.limit = value,
                other => panic!("unknown query key {other}"),
            }
        }
        query
    }

    fn names(page: &ProductPage) -> Vec<&str> {
        page.products.iter().map(|p| p.name.as_str()).collect()
    }

    fn input(name: &str, category: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_list_without_filters_returns_first_page() {
        let store = InMemoryProductStore::seeded();
        let page = list_products(&store, &ListQuery::default()).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(names(&page), ["Laptop", "Coffee Maker", "Wireless Headphones"]);
    }

    #[test]
    fn test_category_filter_is_case_insensitive_exact() {
        let store = InMemoryProductStore::seeded();
        let page = list_products(&store, &query(&[("category", "Electronics")])).unwrap();
        assert_eq!(names(&page), ["Laptop", "Wireless Headphones"]);

        let page = list_products(&store, &query(&[("category", "electro")])).unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_text_filter_matches_name_or_description() {
        let store = InMemoryProductStore::seeded();
        let page = list_products(&store, &query(&[("q", "COFFEE")])).unwrap();
        assert_eq!(names(&page), ["Coffee Maker"]);

        let page = list_products(&store, &query(&[("q", "noise")])).unwrap();
        assert_eq!(names(&page), ["Wireless Headphones"]);
    }

    #[test]
    fn test_filters_combine() {
        let store = InMemoryProductStore::seeded();
        let page = list_products(
            &store,
            &query(&[("category", "electronics"), ("q", "laptop")]),
        )
        .unwrap();
        assert_eq!(names(&page), ["Laptop"]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_pagination_reports_total_before_paging() {
        let store = InMemoryProductStore::seeded();
        let page = list_products(&store, &query(&[("page", "2"), ("limit", "2")])).unwrap();
        assert_eq!(names(&page), ["Wireless Headphones"]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let store = InMemoryProductStore::seeded();
        let page = list_products(&store, &query(&[("page", "99")])).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let store = InMemoryProductStore::seeded();
        let page = list_products(
            &store,
            &query(&[("page", "9223372036854775807"), ("limit", "9223372036854775807")]),
        )
        .unwrap();
        assert!(page.products.is_empty());
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let store = InMemoryProductStore::new();
        let a = create_product(&store, input("A", "x")).unwrap();
        let b = create_product(&store, input("A", "x")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_update_and_delete_missing_are_not_found() {
        let store = InMemoryProductStore::seeded();
        assert!(matches!(
            update_product(&store, "nope", input("A", "x")),
            Err(AppError::ProductNotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            delete_product(&store, "nope"),
            Err(AppError::ProductNotFound(_))
        ));
        assert!(matches!(
            get_product(&store, "nope"),
            Err(AppError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_update_keeps_id() {
        let store = InMemoryProductStore::seeded();
        let updated = update_product(&store, "2", input("Espresso Machine", "kitchen")).unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(get_product(&store, "2").unwrap(), updated);
    }

    #[test]
    fn test_stats_groups_by_category() {
        let store = InMemoryProductStore::seeded();
        let stats = product_stats(&store).unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count_by_category.get("electronics"), Some(&2));
        assert_eq!(stats.count_by_category.get("kitchen"), Some(&1));
        assert_eq!(stats.count_by_category.len(), 2);
    }

    #[test]
    fn test_stats_on_empty_store() {
        let stats = product_stats(&InMemoryProductStore::new()).unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.count_by_category.is_empty());
    }
}
