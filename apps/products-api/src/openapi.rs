//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "In-memory product catalog with filtering, sorting and pagination",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/categories", api = domain_products::CategoriesApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Categories", description = "Category aggregation")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        assert!(paths["/api/products"].get("get").is_some());
        assert!(paths["/api/products"].get("post").is_some());
        for method in ["get", "put", "delete"] {
            assert!(paths["/api/products/{id}"].get(method).is_some());
        }
        assert!(paths["/api/categories"].get("get").is_some());
    }

    #[test]
    fn test_document_includes_product_schema() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let product = &doc["components"]["schemas"]["Product"]["properties"];

        assert!(product.get("subCategory").is_some());
        assert!(product.get("seed").is_none());
    }
}
