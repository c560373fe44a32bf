//! Core types for Riddlekeys: riddle sets and the riddle catalog.
//!
//! A [`Catalog`] is an ordered, read-only collection of [`RiddleSet`]s loaded
//! once before a game session starts. Malformed data is rejected at load
//! time so the game engine never sees an invalid riddle.

/// Catalog loading, lookup, and validation.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Riddle set model and identifiers.
pub mod riddle;

/// Re-export catalog types.
pub use catalog::{Catalog, CatalogIssue, MAX_OPTIONS, validate_sets};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export riddle types.
pub use riddle::{RiddleId, RiddleSet, is_typable};
