use crate::types::DbId;

/// Domain error taxonomy shared by every crate in the workspace.
///
/// The API layer maps each variant onto an HTTP status; see
/// `scholar_api::error::AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A profile, target, account or notification does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing or a value is out of range.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule was violated (duplicate email, enrollment number).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials, or the caller does not own the resource.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but holds the wrong role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Fail with [`CoreError::Validation`] when a required text field is blank.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
