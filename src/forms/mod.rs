//! Request bodies accepted by the product routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod product;

#[derive(Debug, Error)]
/// Errors that can occur when processing a request body.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    /// A required field is still unset after validation passed.
    #[error("incomplete form")]
    Incomplete,
}
