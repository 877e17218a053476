use thiserror::Error;

use crate::core::error::AppError;

#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Validation failed: Missing or invalid product fields")]
    Validation,
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::NotFound(err.to_string()),
            ProductError::Validation => AppError::ValidationFailed,
        }
    }
}
