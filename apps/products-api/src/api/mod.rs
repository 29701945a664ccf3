//! API routes module

pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/categories", products::categories_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = temp_env::with_vars_unset(["PORT", "HOST", "CORS_ALLOWED_ORIGIN"], || {
            Config::from_env().unwrap()
        });
        let state = AppState::new(config);
        axum_helpers::create_router::<crate::openapi::ApiDoc>(
            routes(&state),
            state.config.app,
            &state.config.cors,
        )
        .unwrap()
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn test_products_and_categories_share_one_catalog() {
        let app = app();

        let request = Request::post("/api/products")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({
                    "name": "Chess Set",
                    "category": "Toys",
                    "subCategory": "Board Games",
                    "price": 45.0,
                    "stock": 8,
                    "brand": "Gambit",
                    "description": "Wooden chess set"
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let (status, categories) = get(app, "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(categories["Toys"], serde_json::json!(["Board Games"]));
    }

    #[tokio::test]
    async fn test_health_and_docs_are_mounted() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, doc) = get(app(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["title"], "Products API");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get(app(), "/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
