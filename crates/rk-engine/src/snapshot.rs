//! Read-only view of the session handed to renderers after every event.

use serde::Serialize;

use rk_core::RiddleSet;

use crate::progress::{WordProgress, word_progress};
use crate::session::GameState;

/// Everything a renderer needs to draw the current frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    /// Current state of the game.
    pub state: GameState,
    /// Current score.
    pub score: u32,
    /// Seconds left on the clock.
    pub time_remaining: u32,
    /// Round number, 0 when no session is active.
    pub round_number: u32,
    /// Index of the word being typed in the active set.
    pub current_word_index: usize,
    /// Characters typed for the current word, including mismatches.
    pub typed_buffer: &'a str,
    /// Wrong keystrokes on the current word.
    pub wrong_key_count: u32,
    /// The riddle set being played, if any.
    pub active_riddle_set: Option<&'a RiddleSet>,
}

impl Snapshot<'_> {
    /// The word being typed, if a riddle set is active.
    pub fn current_word(&self) -> Option<&str> {
        self.active_riddle_set
            .and_then(|set| set.word(self.current_word_index))
    }

    /// Per-character progress of the current word, while typing.
    pub fn word_progress(&self) -> Option<WordProgress> {
        if self.state != GameState::Playing {
            return None;
        }
        self.current_word()
            .map(|word| word_progress(word, self.typed_buffer))
    }

    /// Serialize to JSON for out-of-process renderers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
