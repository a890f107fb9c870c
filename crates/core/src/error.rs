use crate::shift_window::ShiftParseError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A time card whose stored work time cannot be parsed is corrupt data,
/// not a client mistake.
impl From<ShiftParseError> for CoreError {
    fn from(err: ShiftParseError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
