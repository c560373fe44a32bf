//! Error types for catalog loading.

use crate::riddle::RiddleId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading a riddle catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not valid JSON or does not match the expected shape.
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog contains no riddle sets.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Two riddle sets share the same id.
    #[error("duplicate riddle id: {0}")]
    DuplicateId(RiddleId),

    /// A riddle set failed validation.
    #[error("invalid riddle {id}: {reason}")]
    InvalidRiddle {
        /// The offending riddle set.
        id: RiddleId,
        /// What is wrong with it.
        reason: String,
    },
}
