//! Product storage.
//!
//! This module provides:
//! - The `ProductStore` trait that handlers and services depend on
//! - `InMemoryProductStore`, a process-local implementation
//! - The demo catalog loaded at startup

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::product::Product;

/// Shared handle to the product store.
///
/// Instead of writing `Arc<dyn ProductStore>` everywhere, we can use `SharedStore`.
pub type SharedStore = Arc<dyn ProductStore>;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock.
    #[error("product collection lock poisoned")]
    Poisoned,

    /// An insert would break id uniqueness.
    #[error("duplicate product id {0}")]
    DuplicateId(String),
}

/// Storage operations over the product collection.
///
/// The collection is ordered by insertion. Implementations must keep `id`
/// unique, keep a record's position on update, and preserve the relative
/// order of the remaining records on delete.
pub trait ProductStore: Send + Sync {
    /// All products in collection order.
    fn list(&self) -> Result<Vec<Product>, StoreError>;

    fn get(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Append a product. Fails if its id is already present.
    fn insert(&self, product: Product) -> Result<Product, StoreError>;

    /// Replace the product with the same id, returning the stored value,
    /// or `None` when no such product exists.
    fn update(&self, product: Product) -> Result<Option<Product>, StoreError>;

    /// Remove and return the product with this id.
    fn delete(&self, id: &str) -> Result<Option<Product>, StoreError>;
}

/// `ProductStore` backed by a locked `Vec`.
///
/// Every operation takes the lock once and does no async work while
/// holding it.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Store preloaded with the demo catalog.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Product>>, StoreError> {
        self.products.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Product>>, StoreError> {
        self.products.write().map_err(|_| StoreError::Poisoned)
    }
}

impl ProductStore for InMemoryProductStore {
    fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.write()?;
        if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::DuplicateId(product.id));
        }
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, product: Product) -> Result<Option<Product>, StoreError> {
        let mut products = self.write()?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let mut products = self.write()?;
        Ok(products
            .iter()
            .position(|p| p.id == id)
            .map(|index| products.remove(index)))
    }
}

/// The three-item demo catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop for work and gaming".to_string(),
            price: 1299.99,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable drip brewer with thermal carafe".to_string(),
            price: 89.99,
            category: "kitchen".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Wireless Headphones".to_string(),
            description: "Noise-cancelling over-ear headphones".to_string(),
            price: 199.99,
            category: "electronics".to_string(),
            in_stock: false,
        },
    ]
}
