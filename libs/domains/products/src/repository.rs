use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::seed::default_products;

/// Maximum number of products the catalog holds
pub const MAX_PRODUCTS: usize = 50;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Append a new product with the next id. Fails when the store is full.
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Snapshot of all products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Replace the stored product with the same id
    async fn replace(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID, returns whether it existed
    async fn delete(&self, id: u64) -> ProductResult<bool>;
}

#[derive(Debug)]
struct Catalog {
    products: Vec<Product>,
    next_id: u64,
    capacity: usize,
}

/// In-memory product store shared across request handlers
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryProductRepository {
    /// Empty store with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self::with_products(Vec::new(), capacity)
    }

    /// Store preloaded with the default catalog
    pub fn seeded() -> Self {
        Self::with_products(default_products(), MAX_PRODUCTS)
    }

    /// Store preloaded with `products`. Ids continue after the highest one given.
    pub fn with_products(products: Vec<Product>, capacity: usize) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            catalog: Arc::new(RwLock::new(Catalog {
                products,
                next_id,
                capacity,
            })),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut catalog = self.catalog.write().await;

        if catalog.products.len() >= catalog.capacity {
            tracing::warn!(capacity = catalog.capacity, "Product store is full");
            return Err(ProductError::LimitReached(catalog.capacity));
        }

        let product = Product::new(catalog.next_id, input);
        catalog.next_id += 1;
        catalog.products.push(product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.clone())
    }

    async fn replace(&self, product: Product) -> ProductResult<Product> {
        let mut catalog = self.catalog.write().await;

        let slot = catalog
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *slot = product.clone();

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: u64) -> ProductResult<bool> {
        let mut catalog = self.catalog.write().await;

        let before = catalog.products.len();
        catalog.products.retain(|p| p.id != id);
        let deleted = catalog.products.len() < before;

        if deleted {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(deleted)
    }
}
