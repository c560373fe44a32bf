//! Leaderboard entries and player name rules.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ScoresError, ScoresResult};

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 16;

/// One recorded score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Unique id of this submission.
    pub id: Uuid,
    /// Player name, trimmed.
    pub name: String,
    /// Final score of the game.
    pub score: u32,
    /// When the score was submitted.
    pub recorded_at: DateTime<Utc>,
}

impl ScoreEntry {
    /// Create an entry stamped with the current time.
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score,
            recorded_at: Utc::now(),
        }
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.name, self.score)
    }
}

/// Trim and check a player name. Returns the trimmed name.
pub fn validate_name(name: &str) -> ScoresResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ScoresError::InvalidName("name is empty".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ScoresError::InvalidName(format!(
            "name is longer than {MAX_NAME_LEN} characters"
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(ScoresError::InvalidName(
            "name contains control characters".into(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_names() {
        assert_eq!(validate_name("  Ada ").unwrap(), "Ada");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(validate_name("   "), Err(ScoresError::InvalidName(_))));
    }

    #[test]
    fn rejects_long() {
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn rejects_control_chars() {
        assert!(validate_name("a\tb").is_err());
    }

    #[test]
    fn entry_display() {
        let e = ScoreEntry::new("Ada", 42);
        assert_eq!(e.to_string(), "Ada — 42");
    }
}
