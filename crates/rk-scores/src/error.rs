//! Error types for leaderboard storage.

use thiserror::Error;

/// Result type for leaderboard operations.
pub type ScoresResult<T> = Result<T, ScoresError>;

/// Reasons a score submission or leaderboard load can fail.
#[derive(Debug, Error)]
pub enum ScoresError {
    /// The player name was rejected.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The leaderboard file could not be read or written.
    #[error("leaderboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The leaderboard file is not valid JSON.
    #[error("malformed leaderboard: {0}")]
    Json(#[from] serde_json::Error),
}
