//! Feedback events emitted by the session controller.
//!
//! Sound and animation layers react to these; nothing they do feeds back
//! into the engine.

use std::fmt;

use serde::Serialize;

use rk_core::RiddleId;

/// Something that happened while processing an input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new session began.
    SessionStarted {
        /// Starting countdown.
        time: u32,
        /// First riddle set.
        riddle: RiddleId,
    },
    /// A keystroke matched the target character.
    KeyMatched {
        /// The key typed.
        ch: char,
    },
    /// A keystroke did not match the target character.
    KeyMismatched {
        /// The key typed.
        ch: char,
        /// The character that was expected.
        expected: char,
        /// Wrong keys on this word so far.
        wrong_keys: u32,
        /// Score change after clamping.
        delta: i64,
    },
    /// A word was typed through to its last character.
    WordCompleted {
        /// The word.
        word: String,
        /// Score change after clamping.
        delta: i64,
    },
    /// Too many wrong keys; the word was skipped.
    WordAbandoned {
        /// The word.
        word: String,
        /// The buffer at the moment the word was abandoned.
        typed: String,
        /// Score change for the abandonment itself, after clamping.
        delta: i64,
    },
    /// The last word of the set is done; the riddle is shown.
    RiddlePresented {
        /// Riddle set whose question is shown.
        riddle: RiddleId,
    },
    /// The player picked an answer.
    RiddleAnswered {
        /// Whether the answer was correct.
        correct: bool,
        /// Score change after clamping.
        delta: i64,
    },
    /// A new riddle set started after a correct answer.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
        /// The new riddle set.
        riddle: RiddleId,
        /// Seconds actually added to the clock.
        bonus: u32,
    },
    /// The countdown reached zero.
    TimeExpired,
    /// Every riddle set in the catalog has been played.
    CatalogExhausted,
    /// The session ended.
    GameOver {
        /// Final score.
        score: u32,
    },
    /// The finished session was discarded.
    ReturnedToMenu,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::SessionStarted { time, riddle } => {
                write!(f, "session started ({time}s, riddle {riddle})")
            }
            GameEvent::KeyMatched { ch } => write!(f, "key '{ch}' matched"),
            GameEvent::KeyMismatched { ch, expected, .. } => {
                write!(f, "key '{ch}' wrong, expected '{expected}'")
            }
            GameEvent::WordCompleted { word, delta } => write!(f, "{word} completed ({delta:+})"),
            GameEvent::WordAbandoned { word, delta, .. } => {
                write!(f, "{word} abandoned ({delta:+})")
            }
            GameEvent::RiddlePresented { riddle } => write!(f, "riddle {riddle} presented"),
            GameEvent::RiddleAnswered { correct, delta } => {
                let verdict = if *correct { "correct" } else { "wrong" };
                write!(f, "answer {verdict} ({delta:+})")
            }
            GameEvent::RoundStarted { round, bonus, .. } => {
                write!(f, "round {round} started (+{bonus}s)")
            }
            GameEvent::TimeExpired => write!(f, "time expired"),
            GameEvent::CatalogExhausted => write!(f, "all riddles played"),
            GameEvent::GameOver { score } => write!(f, "game over, score {score}"),
            GameEvent::ReturnedToMenu => write!(f, "back to menu"),
        }
    }
}
