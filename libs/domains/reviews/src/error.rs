use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_products::ProductError;
use domain_users::UserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ReviewResult<T> = Result<T, ReviewError>;

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::NotFound(id) => AppError::NotFound(format!("Review {} not found", id)),
            ReviewError::UserNotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            ReviewError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            ReviewError::Validation(msg) => AppError::BadRequest(msg),
            ReviewError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ReviewError {
    fn from(err: mongodb::error::Error) -> Self {
        ReviewError::Database(err.to_string())
    }
}

impl From<ProductError> for ReviewError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => ReviewError::ProductNotFound(id),
            ProductError::Validation(msg) => ReviewError::Validation(msg),
            ProductError::Database(msg) => ReviewError::Database(msg),
        }
    }
}

impl From<UserError> for ReviewError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => ReviewError::UserNotFound(id),
            UserError::Validation(msg) => ReviewError::Validation(msg),
            other => ReviewError::Database(other.to_string()),
        }
    }
}
