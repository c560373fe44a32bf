//! Error types for the game engine.
//!
//! Gameplay never fails: wrong keys, abandoned words, and wrong answers are
//! scored outcomes, and events that do not apply to the current state are
//! ignored. Errors only arise while setting a session up.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while constructing a session controller.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configuration does not describe a playable game.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The catalog has no riddle sets to play.
    #[error("catalog has no riddle sets")]
    EmptyCatalog,

    /// Catalog loading error.
    #[error("{0}")]
    Catalog(#[from] rk_core::CoreError),
}
