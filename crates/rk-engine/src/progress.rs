//! Per-character view of the word being typed.
//!
//! This is a pure function of the target word and the typed buffer; the
//! session owns the buffer and nothing here keeps state.

use serde::Serialize;

/// Display status of one character slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharStatus {
    /// Typed and matches the target.
    Correct,
    /// Typed and does not match the target.
    Incorrect,
    /// The next slot to be typed.
    Cursor,
    /// Not reached yet.
    Pending,
}

/// One character slot of the word view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharProgress {
    /// The typed character for typed slots, the target character otherwise.
    pub ch: char,
    /// How the slot should be shown.
    pub status: CharStatus,
}

/// Progress of the typed buffer against a target word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordProgress {
    /// One entry per target character, plus any typed overflow.
    pub chars: Vec<CharProgress>,
    /// Whether the buffer has as many characters as the word.
    pub is_complete: bool,
}

/// Build the per-character view of `typed` against `word`.
pub fn word_progress(word: &str, typed: &str) -> WordProgress {
    let target: Vec<char> = word.chars().collect();
    let typed: Vec<char> = typed.chars().collect();
    let len = target.len().max(typed.len());

    let chars = (0..len)
        .filter_map(|i| match (typed.get(i), target.get(i)) {
            (Some(&t), Some(&w)) if t == w => Some(CharProgress {
                ch: t,
                status: CharStatus::Correct,
            }),
            (Some(&t), _) => Some(CharProgress {
                ch: t,
                status: CharStatus::Incorrect,
            }),
            (None, Some(&w)) if i == typed.len() => Some(CharProgress {
                ch: w,
                status: CharStatus::Cursor,
            }),
            (None, Some(&w)) => Some(CharProgress {
                ch: w,
                status: CharStatus::Pending,
            }),
            (None, None) => None,
        })
        .collect();

    WordProgress {
        chars,
        is_complete: typed.len() == target.len(),
    }
}

/// The character expected at the next buffer slot, or `None` if the buffer is full.
///
/// Mismatched characters occupy slots, so the target is always
/// `word[typed.len()]`.
pub fn next_target(word: &str, typed: &str) -> Option<char> {
    word.chars().nth(typed.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(p: &WordProgress) -> Vec<CharStatus> {
        p.chars.iter().map(|c| c.status).collect()
    }

    #[test]
    fn empty_buffer() {
        use CharStatus::*;
        let p = word_progress("CAT", "");
        assert_eq!(statuses(&p), vec![Cursor, Pending, Pending]);
        assert!(!p.is_complete);
        assert_eq!(p.chars[0].ch, 'C');
    }

    #[test]
    fn mixed_buffer() {
        use CharStatus::*;
        let p = word_progress("CAT", "CX");
        assert_eq!(statuses(&p), vec![Correct, Incorrect, Cursor]);
        assert_eq!(p.chars[1].ch, 'X');
    }

    #[test]
    fn full_buffer_is_complete() {
        let p = word_progress("CAT", "CAT");
        assert!(p.is_complete);
        assert!(p.chars.iter().all(|c| c.status == CharStatus::Correct));
    }

    #[test]
    fn case_mismatch_is_incorrect() {
        let p = word_progress("CAT", "c");
        assert_eq!(p.chars[0].status, CharStatus::Incorrect);
    }

    #[test]
    fn overflow_marked_incorrect() {
        let p = word_progress("AB", "ABC");
        assert_eq!(p.chars.len(), 3);
        assert_eq!(p.chars[2].status, CharStatus::Incorrect);
        assert!(!p.is_complete);
    }

    #[test]
    fn next_target_follows_buffer_length() {
        assert_eq!(next_target("CAT", ""), Some('C'));
        assert_eq!(next_target("CAT", "X"), Some('A'));
        assert_eq!(next_target("CAT", "CAT"), None);
    }
}
