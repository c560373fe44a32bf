//! Fixed one-second tick cadence for the countdown.

use std::time::{Duration, Instant};

/// Interval between countdown ticks.
pub const TICK_RATE: Duration = Duration::from_secs(1);

/// How long to wait for input when no tick is due.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Decides when the next countdown tick is due.
///
/// The cadence only runs while the game is in the typing state. Every time
/// typing resumes the interval starts over, so time spent on the riddle
/// never turns into an immediate tick.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    last: Instant,
    running: bool,
}

impl Cadence {
    /// Create a stopped cadence.
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            running: false,
        }
    }

    /// Update for the current game state and report whether a tick is due.
    pub fn poll(&mut self, playing: bool, now: Instant) -> bool {
        if !playing {
            self.running = false;
            return false;
        }
        if !self.running {
            self.running = true;
            self.last = now;
            return false;
        }
        if now.duration_since(self.last) >= TICK_RATE {
            self.last += TICK_RATE;
            return true;
        }
        false
    }

    /// How long the event loop may block waiting for input.
    pub fn timeout(&self, now: Instant) -> Duration {
        if !self.running {
            return IDLE_POLL;
        }
        (self.last + TICK_RATE)
            .saturating_duration_since(now)
            .min(IDLE_POLL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ticks_while_not_playing() {
        let t0 = Instant::now();
        let mut c = Cadence::new(t0);
        assert!(!c.poll(false, t0 + Duration::from_secs(5)));
        assert_eq!(c.timeout(t0), IDLE_POLL);
    }

    #[test]
    fn ticks_once_per_second() {
        let t0 = Instant::now();
        let mut c = Cadence::new(t0);
        assert!(!c.poll(true, t0));
        assert!(!c.poll(true, t0 + Duration::from_millis(999)));
        assert!(c.poll(true, t0 + Duration::from_millis(1000)));
        assert!(!c.poll(true, t0 + Duration::from_millis(1500)));
        assert!(c.poll(true, t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn catches_up_one_tick_per_poll() {
        let t0 = Instant::now();
        let mut c = Cadence::new(t0);
        c.poll(true, t0);
        let late = t0 + Duration::from_millis(2100);
        assert!(c.poll(true, late));
        assert!(c.poll(true, late));
        assert!(!c.poll(true, late));
    }

    #[test]
    fn restarts_after_pause() {
        let t0 = Instant::now();
        let mut c = Cadence::new(t0);
        c.poll(true, t0);
        c.poll(false, t0 + Duration::from_millis(500));
        let back = t0 + Duration::from_secs(10);
        assert!(!c.poll(true, back));
        assert!(!c.poll(true, back + Duration::from_millis(900)));
        assert!(c.poll(true, back + Duration::from_millis(1000)));
    }

    #[test]
    fn timeout_shrinks_toward_next_tick() {
        let t0 = Instant::now();
        let mut c = Cadence::new(t0);
        c.poll(true, t0);
        assert_eq!(c.timeout(t0 + Duration::from_millis(900)), Duration::from_millis(100));
        assert_eq!(c.timeout(t0), IDLE_POLL);
    }
}
