//! Score ledger for a session.

use serde::{Deserialize, Serialize};

/// A non-negative score that applies signed deltas.
///
/// Deductions that would take the score below zero stop at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    value: u32,
}

impl ScoreLedger {
    /// Create a ledger at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current score.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Apply a signed delta, clamping at zero. Returns the change actually applied.
    pub fn apply_delta(&mut self, amount: i64) -> i64 {
        let before = i64::from(self.value);
        let after = (before + amount).max(0);
        self.value = u32::try_from(after).unwrap_or(u32::MAX);
        i64::from(self.value) - before
    }

    /// Add points.
    pub fn award(&mut self, points: u32) -> i64 {
        self.apply_delta(i64::from(points))
    }

    /// Deduct points, stopping at zero.
    pub fn deduct(&mut self, points: u32) -> i64 {
        self.apply_delta(-i64::from(points))
    }

    /// Reset to zero.
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(ScoreLedger::new().value(), 0);
    }

    #[test]
    fn positive_delta_adds() {
        let mut s = ScoreLedger::new();
        assert_eq!(s.apply_delta(5), 5);
        assert_eq!(s.apply_delta(20), 20);
        assert_eq!(s.value(), 25);
    }

    #[test]
    fn negative_delta_clamps_at_zero() {
        let mut s = ScoreLedger::new();
        s.award(2);
        assert_eq!(s.deduct(3), -2);
        assert_eq!(s.value(), 0);
        assert_eq!(s.deduct(3), 0);
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn saturates_at_upper_bound() {
        let mut s = ScoreLedger::new();
        s.apply_delta(i64::from(u32::MAX));
        s.apply_delta(10);
        assert_eq!(s.value(), u32::MAX);
    }

    #[test]
    fn reset_clears() {
        let mut s = ScoreLedger::new();
        s.award(10);
        s.reset();
        assert_eq!(s.value(), 0);
    }

    proptest! {
        #[test]
        fn never_negative(deltas in prop::collection::vec(-50i64..50, 0..64)) {
            let mut s = ScoreLedger::new();
            let mut expected: i64 = 0;
            for d in deltas {
                s.apply_delta(d);
                expected = (expected + d).max(0);
                prop_assert_eq!(i64::from(s.value()), expected);
            }
        }
    }
}
