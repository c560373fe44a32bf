//! Configuration for a game session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Round lengths the menu offers, in seconds.
pub const ALLOWED_INITIAL_TIMES: [u32; 3] = [30, 45, 60];

/// Scoring and timer rules, injected into the session controller.
///
/// Field names follow the catalog's camelCase convention when loaded from
/// JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Starting countdown in seconds.
    pub initial_time: u32,
    /// Ceiling for the countdown, including bonus time.
    pub max_time: u32,
    /// Awarded for each completed word.
    pub points_per_word: u32,
    /// Awarded for a correct riddle answer.
    pub points_per_riddle: u32,
    /// Deducted when a word is abandoned.
    pub penalty_per_wrong_word: u32,
    /// Deducted for each wrong keystroke.
    pub penalty_per_wrong_key: u32,
    /// Wrong keystrokes on one word before it is abandoned.
    pub max_wrong_keys_per_word: u32,
    /// Seconds added for a correct riddle answer.
    pub bonus_time_on_correct_riddle: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_time: 30,
            max_time: 60,
            points_per_word: 5,
            points_per_riddle: 20,
            penalty_per_wrong_word: 3,
            penalty_per_wrong_key: 3,
            max_wrong_keys_per_word: 2,
            bonus_time_on_correct_riddle: 10,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            EngineError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Set the starting countdown.
    pub fn with_initial_time(mut self, seconds: u32) -> Self {
        self.initial_time = seconds;
        self
    }

    /// Set the countdown ceiling.
    pub fn with_max_time(mut self, seconds: u32) -> Self {
        self.max_time = seconds;
        self
    }

    /// Set points per completed word.
    pub fn with_points_per_word(mut self, points: u32) -> Self {
        self.points_per_word = points;
        self
    }

    /// Set points per correct riddle.
    pub fn with_points_per_riddle(mut self, points: u32) -> Self {
        self.points_per_riddle = points;
        self
    }

    /// Set the penalties for a wrong key and an abandoned word.
    pub fn with_penalties(mut self, wrong_key: u32, wrong_word: u32) -> Self {
        self.penalty_per_wrong_key = wrong_key;
        self.penalty_per_wrong_word = wrong_word;
        self
    }

    /// Set how many wrong keys abandon a word.
    pub fn with_max_wrong_keys(mut self, count: u32) -> Self {
        self.max_wrong_keys_per_word = count;
        self
    }

    /// Set the bonus time for a correct riddle.
    pub fn with_bonus_time(mut self, seconds: u32) -> Self {
        self.bonus_time_on_correct_riddle = seconds;
        self
    }

    /// Check that the rules describe a playable game.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_time == 0 {
            return Err(EngineError::InvalidConfig("maxTime must be positive".into()));
        }
        if !ALLOWED_INITIAL_TIMES.contains(&self.initial_time) {
            return Err(EngineError::InvalidConfig(format!(
                "initialTime must be one of {ALLOWED_INITIAL_TIMES:?}, got {}",
                self.initial_time
            )));
        }
        if self.initial_time > self.max_time {
            return Err(EngineError::InvalidConfig(format!(
                "initialTime ({}) exceeds maxTime ({})",
                self.initial_time, self.max_time
            )));
        }
        if self.max_wrong_keys_per_word == 0 {
            return Err(EngineError::InvalidConfig(
                "maxWrongKeysPerWord must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.initial_time, 30);
        assert_eq!(cfg.max_time, 60);
        assert_eq!(cfg.points_per_word, 5);
        assert_eq!(cfg.points_per_riddle, 20);
        assert_eq!(cfg.penalty_per_wrong_word, 3);
        assert_eq!(cfg.penalty_per_wrong_key, 3);
        assert_eq!(cfg.max_wrong_keys_per_word, 2);
        assert_eq!(cfg.bonus_time_on_correct_riddle, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_initial_time(45)
            .with_max_time(90)
            .with_points_per_word(7)
            .with_points_per_riddle(50)
            .with_penalties(1, 2)
            .with_max_wrong_keys(3)
            .with_bonus_time(15);
        assert_eq!(cfg.initial_time, 45);
        assert_eq!(cfg.max_time, 90);
        assert_eq!(cfg.points_per_word, 7);
        assert_eq!(cfg.points_per_riddle, 50);
        assert_eq!(cfg.penalty_per_wrong_key, 1);
        assert_eq!(cfg.penalty_per_wrong_word, 2);
        assert_eq!(cfg.max_wrong_keys_per_word, 3);
        assert_eq!(cfg.bonus_time_on_correct_riddle, 15);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_unlisted_initial_time() {
        let cfg = GameConfig::default().with_initial_time(40);
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_initial_above_ceiling() {
        let cfg = GameConfig::default().with_initial_time(60).with_max_time(45);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_wrong_key_cap() {
        assert!(GameConfig::default().with_max_wrong_keys(0).validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = GameConfig::from_json(r#"{"initialTime": 45, "pointsPerWord": 8}"#).unwrap();
        assert_eq!(cfg.initial_time, 45);
        assert_eq!(cfg.points_per_word, 8);
        assert_eq!(cfg.max_time, 60);
        assert_eq!(cfg.bonus_time_on_correct_riddle, 10);
    }

    #[test]
    fn invalid_json_config() {
        assert!(GameConfig::from_json("not json").is_err());
        assert!(GameConfig::from_json(r#"{"initialTime": 10}"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"maxTime": 120, "bonusTimeOnCorrectRiddle": 20}"#).unwrap();
        let cfg = GameConfig::load(&path).unwrap();
        assert_eq!(cfg.max_time, 120);
        assert_eq!(cfg.bonus_time_on_correct_riddle, 20);
        assert!(GameConfig::load(&dir.path().join("missing.json")).is_err());
    }
}
