//! In-memory leaderboard and the store trait.

use crate::entry::{ScoreEntry, validate_name};
use crate::error::ScoresResult;

/// Somewhere finished games can submit their score.
pub trait LeaderboardStore {
    /// Record a score under a player name.
    fn submit_score(&mut self, name: &str, score: u32) -> ScoresResult<ScoreEntry>;

    /// The best `n` entries, highest first.
    fn top(&self, n: usize) -> Vec<ScoreEntry>;

    /// A player's best score. Names match case-insensitively.
    fn best_for(&self, name: &str) -> Option<u32>;
}

/// Scores kept in memory, ordered best first.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a leaderboard from existing entries.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        sort_entries(&mut entries);
        Self { entries }
    }

    /// All entries, best first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        sort_entries(&mut self.entries);
    }
}

impl LeaderboardStore for Leaderboard {
    fn submit_score(&mut self, name: &str, score: u32) -> ScoresResult<ScoreEntry> {
        let name = validate_name(name)?;
        let entry = ScoreEntry::new(name, score);
        tracing::info!(name, score, "score submitted");
        self.insert(entry.clone());
        Ok(entry)
    }

    fn top(&self, n: usize) -> Vec<ScoreEntry> {
        self.entries.iter().take(n).cloned().collect()
    }

    fn best_for(&self, name: &str) -> Option<u32> {
        let name = name.trim();
        self.entries
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.score)
            .max()
    }
}

/// Highest score first; ties go to the earlier submission, then by name.
fn sort_entries(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.recorded_at.cmp(&b.recorded_at))
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn submit_and_query() {
        let mut board = Leaderboard::new();
        board.submit_score("Ada", 30).unwrap();
        board.submit_score("Bob", 55).unwrap();
        board.submit_score("ada", 40).unwrap();

        let top = board.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Bob");
        assert_eq!(top[1].score, 40);

        assert_eq!(board.best_for("ADA"), Some(40));
        assert_eq!(board.best_for("Cy"), None);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn rejects_invalid_name_without_recording() {
        let mut board = Leaderboard::new();
        assert!(board.submit_score("", 10).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn stores_trimmed_name() {
        let mut board = Leaderboard::new();
        let entry = board.submit_score("  Ada  ", 10).unwrap();
        assert_eq!(entry.name, "Ada");
        assert_eq!(board.best_for(" ada "), Some(10));
    }

    #[test]
    fn ties_keep_submission_order() {
        let now = Utc::now();
        let mut first = ScoreEntry::new("Zed", 20);
        first.recorded_at = now - Duration::seconds(10);
        let mut second = ScoreEntry::new("Amy", 20);
        second.recorded_at = now;

        let board = Leaderboard::from_entries(vec![second, first]);
        assert_eq!(board.entries()[0].name, "Zed");
        assert_eq!(board.entries()[1].name, "Amy");
    }

    #[test]
    fn top_of_empty_board() {
        assert!(Leaderboard::new().top(10).is_empty());
    }
}
