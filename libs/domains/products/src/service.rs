//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductAction, ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::query::{categories, CategoryMap, ProductPage, ProductQuery};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, default-product protection and
/// orchestrates repository operations. Clones share the same repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filter, sort and paginate the catalog
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<ProductPage> {
        query.validate()?;
        let products = self.repository.list().await?;
        Ok(query.apply(products))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Fetch a product that `action` may modify.
    ///
    /// Fails with `NotFound` first, then `SeedProtected` for default products.
    #[instrument(skip(self))]
    pub async fn ensure_mutable(&self, id: u64, action: ProductAction) -> ProductResult<Product> {
        let product = self.get_product(id).await?;
        if product.is_seed() {
            return Err(ProductError::SeedProtected { id, action });
        }
        Ok(product)
    }

    /// Merge `input` into an existing, non-default product.
    ///
    /// The body is validated only once the product is known to be mutable.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        let mut product = self.ensure_mutable(id, ProductAction::Update).await?;
        input.validate()?;

        product.apply_update(input);
        self.repository.replace(product).await
    }

    /// Delete a non-default product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<()> {
        self.ensure_mutable(id, ProductAction::Delete).await?;

        // Lost a race with a concurrent delete
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    /// Subcategories observed per category across the catalog
    #[instrument(skip(self))]
    pub async fn categories(&self) -> ProductResult<CategoryMap> {
        let products = self.repository.list().await?;
        Ok(categories(&products))
    }
}
