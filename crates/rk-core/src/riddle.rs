//! Riddle sets: themed words plus one multiple-choice question.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a riddle set within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiddleId(pub u32);

impl fmt::Display for RiddleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A themed bundle of words plus one multiple-choice question keyed to that theme.
///
/// Riddle sets are immutable once loaded. The catalog guarantees that
/// `words` is non-empty and that `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiddleSet {
    /// Unique id within the catalog.
    pub id: RiddleId,
    /// Words the player types, in order.
    pub words: Vec<String>,
    /// The riddle shown after the last word.
    pub question: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Index of the correct entry in `options`.
    pub correct_answer: usize,
    /// Theme shared by the words and the question.
    pub theme: String,
}

impl RiddleSet {
    /// Get the word at `index`, if any.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Number of words in the set.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether `index` selects the correct option.
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer
    }

    /// The text of the correct option.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// Whether the input source can produce `c`: ASCII letters and space.
pub fn is_typable(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' '
}
