use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod api;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    /// The operation failed for a reason that may go away on its own; the user
    /// may re-issue it.
    #[error("Temporary failure: {0}")]
    Transient(String),

    #[error("Internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ValidationError(message)
            | RepositoryError::ConstraintViolation(message) => {
                ServiceError::TypeConstraint(message)
            }
            RepositoryError::Unavailable(message) => ServiceError::Transient(message),
            RepositoryError::Unexpected(message) => {
                log::error!("Unexpected repository error: {message}");
                ServiceError::Internal
            }
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
