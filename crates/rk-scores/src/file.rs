//! Leaderboard persisted as a JSON file.

use std::path::{Path, PathBuf};

use crate::board::{Leaderboard, LeaderboardStore};
use crate::entry::{ScoreEntry, validate_name};
use crate::error::ScoresResult;

/// A [`Leaderboard`] saved to disk after every successful submission.
#[derive(Debug, Clone)]
pub struct FileLeaderboard {
    path: PathBuf,
    board: Leaderboard,
}

impl FileLeaderboard {
    /// Open a leaderboard file. A missing file is an empty leaderboard.
    pub fn open(path: impl Into<PathBuf>) -> ScoresResult<Self> {
        let path = path.into();
        let board = if path.exists() {
            let json = std::fs::read_to_string(&path)?;
            let entries: Vec<ScoreEntry> = serde_json::from_str(&json)?;
            Leaderboard::from_entries(entries)
        } else {
            Leaderboard::new()
        };
        tracing::debug!(path = %path.display(), entries = board.len(), "leaderboard opened");
        Ok(Self { path, board })
    }

    /// Where the leaderboard is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The entries loaded so far.
    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    /// Write all entries to disk.
    pub fn save(&self) -> ScoresResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self.board.entries())?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl LeaderboardStore for FileLeaderboard {
    fn submit_score(&mut self, name: &str, score: u32) -> ScoresResult<ScoreEntry> {
        let name = validate_name(name)?;
        let entry = ScoreEntry::new(name, score);
        let mut updated = self.board.clone();
        updated.insert(entry.clone());

        let previous = std::mem::replace(&mut self.board, updated);
        if let Err(e) = self.save() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to save leaderboard");
            self.board = previous;
            return Err(e);
        }
        tracing::info!(name, score, "score submitted");
        Ok(entry)
    }

    fn top(&self, n: usize) -> Vec<ScoreEntry> {
        self.board.top(n)
    }

    fn best_for(&self, name: &str) -> Option<u32> {
        self.board.best_for(name)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::error::ScoresError;

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let board = FileLeaderboard::open(dir.path().join("scores.json")).unwrap();
        assert!(board.board().is_empty());
        assert!(!board.path().exists());
    }

    #[test]
    fn submissions_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut board = FileLeaderboard::open(&path).unwrap();
        board.submit_score("Ada", 30).unwrap();
        board.submit_score("Bob", 45).unwrap();
        assert!(path.exists());

        let reopened = FileLeaderboard::open(&path).unwrap();
        let top = reopened.top(10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Bob");
        assert_eq!(reopened.best_for("ada"), Some(30));
    }

    #[test]
    fn invalid_name_not_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        let mut board = FileLeaderboard::open(&path).unwrap();
        assert!(matches!(
            board.submit_score("\n", 10),
            Err(ScoresError::InvalidName(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(FileLeaderboard::open(&path), Err(ScoresError::Json(_))));
    }

    #[test]
    fn failed_save_rolls_back() {
        let dir = TempDir::new().unwrap();
        // a directory where the file should be makes the write fail
        let path = dir.path().join("scores.json");
        let mut board = FileLeaderboard::open(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(matches!(board.submit_score("Ada", 10), Err(ScoresError::Io(_))));
        assert!(board.board().is_empty());
    }
}
