//! Leaderboard storage for Riddlekeys.
//!
//! Finished games hand their final score to a [`LeaderboardStore`], which
//! records it under a player name and answers top-N and personal-best
//! queries. [`Leaderboard`] keeps entries in memory; [`FileLeaderboard`]
//! persists them as JSON.

pub mod board;
pub mod entry;
pub mod error;
pub mod file;

pub use board::{Leaderboard, LeaderboardStore};
pub use entry::{MAX_NAME_LEN, ScoreEntry, validate_name};
pub use error::{ScoresError, ScoresResult};
pub use file::FileLeaderboard;
