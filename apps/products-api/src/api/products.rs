//! Products API routes

use axum::Router;
use domain_products::handlers;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.products.clone())
}

/// Create categories router over the same catalog
pub fn categories_router(state: &AppState) -> Router {
    handlers::categories_router(state.products.clone())
}
