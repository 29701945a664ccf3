use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use strum::Display;
use thiserror::Error;
use validator::ValidationErrors;

/// Mutation attempted on a protected product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProductAction {
    Update,
    Delete,
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("Cannot {action} default product {id}")]
    SeedProtected { id: u64, action: ProductAction },

    #[error("Maximum product limit reached ({0})")]
    LimitReached(usize),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::SeedProtected { action, .. } => {
                AppError::Forbidden(format!("Cannot {} default products", action))
            }
            ProductError::LimitReached(_) => {
                AppError::LimitExceeded("Maximum product limit reached".to_string())
            }
            ProductError::Validation(e) => AppError::ValidationError(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::NotFound(999), StatusCode::NOT_FOUND),
            (
                ProductError::SeedProtected {
                    id: 3,
                    action: ProductAction::Update,
                },
                StatusCode::FORBIDDEN,
            ),
            (ProductError::LimitReached(50), StatusCode::BAD_REQUEST),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_seed_protection_message_names_action() {
        let app_error: AppError = ProductError::SeedProtected {
            id: 1,
            action: ProductAction::Delete,
        }
        .into();
        assert!(matches!(
            app_error,
            AppError::Forbidden(msg) if msg == "Cannot delete default products"
        ));
    }
}
