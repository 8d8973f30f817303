//! # Reset Schedule
//!
//! Deferred round resets. A lock schedules one; the event loop polls the
//! schedule every iteration and turns each expired deadline into
//! `Action::ResetElapsed`.
//!
//! Deadlines stack: locking again before an earlier reset fires leaves both
//! pending. `cancel_all` drops every pending reset at once.
//!
//! Time is always passed in, never read here, so tests drive it directly.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct ResetSchedule {
    deadlines: Vec<Instant>, // sorted, earliest first
}

impl ResetSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        let deadline = now + delay;
        let pos = self.deadlines.partition_point(|d| *d <= deadline);
        self.deadlines.insert(pos, deadline);
    }

    pub fn cancel_all(&mut self) {
        self.deadlines.clear();
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Removes every deadline at or before `now` and returns how many fired.
    pub fn take_due(&mut self, now: Instant) -> usize {
        let due = self.deadlines.partition_point(|d| *d <= now);
        self.deadlines.drain(..due);
        due
    }

    /// Time left until the earliest pending reset, if any.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadlines
            .first()
            .map(|d| d.saturating_duration_since(now))
    }
}
