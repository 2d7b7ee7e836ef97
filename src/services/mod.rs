//! Business rules sitting between the HTTP routes and the repository.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod products;

/// Outcomes a route has to translate into a response.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed validation before reaching the store.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found")]
    NotFound,

    /// A listing matched no rows on the requested page.
    #[error("no products found")]
    EmptyPage,

    /// The store could not serve the request.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
