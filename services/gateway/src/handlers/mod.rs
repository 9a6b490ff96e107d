pub mod health;
pub mod location;
pub mod ride;
pub mod user;

use crate::error::AppError;

/// Unwrap a required request field or reject with 400
pub(crate) fn require<T>(field: Option<T>, name: &str) -> Result<T, AppError> {
    field.ok_or_else(|| AppError::BadRequest(format!("{name} is required")))
}
