use std::time::{Duration, Instant};

/// One-shot tick timer driven by the frame loop.
///
/// The driver arms it with the engine's current interval, polls it every
/// frame, and re-arms it after each step. A stopped clock never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickClock {
    deadline: Option<Instant>,
}

impl TickClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the next tick `interval` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    /// Cancels the pending tick. Calling it again has no further effect.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the deadline has passed, disarming the clock.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending tick, if any.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
