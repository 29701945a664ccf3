//! Products Domain
//!
//! An in-memory product catalog with filtering, sorting, pagination and a
//! category aggregation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, default-product protection
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │ Repository  │     │    Query    │  ← Filter / sort / paginate
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::seeded());
//!
//! let products = handlers::router(service.clone());
//! let categories = handlers::categories_router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{ProductAction, ProductError, ProductResult};
pub use handlers::{ApiDoc, CategoriesApiDoc};
pub use models::{CreateProduct, Product, SpecValue, Specifications, UpdateProduct};
pub use query::{CategoryMap, ProductPage, ProductQuery, SortField, SortOrder};
pub use repository::{InMemoryProductRepository, ProductRepository, MAX_PRODUCTS};
pub use service::ProductService;
