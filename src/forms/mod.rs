//! Form definitions backing the employee editor.

use thiserror::Error;
use validator::ValidationErrors;

pub mod employee;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid department")]
    InvalidDepartment,

    #[error("invalid salary")]
    InvalidSalary,

    #[error("invalid join date")]
    InvalidJoinDate,
}
