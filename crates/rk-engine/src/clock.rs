//! Countdown clock for a round.
//!
//! The clock counts whole seconds down to zero. It only moves while running;
//! the session controller suspends it whenever play leaves the typing state
//! so a late tick cannot touch a finished session.

use serde::{Deserialize, Serialize};

/// Result of advancing the clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second was taken off.
    Continue,
    /// The clock was already at zero.
    Expired,
    /// The clock is suspended; nothing changed.
    Suspended,
}

/// A countdown with a floor of zero. Bonus time is capped by the caller's ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    remaining: u32,
    running: bool,
}

impl RoundClock {
    /// Create a suspended clock. `start` is clamped to `ceiling`.
    pub fn new(start: u32, ceiling: u32) -> Self {
        Self {
            remaining: start.min(ceiling),
            running: false,
        }
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether ticks currently count down.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the countdown has reached zero.
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Start counting down.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Stop counting down. Ticks are ignored until [`resume`](Self::resume).
    pub fn suspend(&mut self) {
        self.running = false;
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Suspended;
        }
        if self.remaining == 0 {
            return Tick::Expired;
        }
        self.remaining -= 1;
        Tick::Continue
    }

    /// Add bonus seconds, never exceeding `ceiling`. Returns the seconds actually added.
    pub fn add_bonus(&mut self, amount: u32, ceiling: u32) -> u32 {
        let before = self.remaining;
        self.remaining = self.remaining.saturating_add(amount).min(ceiling);
        self.remaining.saturating_sub(before)
    }
}
