//! Single-slot scheduled task on a frame clock.
//!
//! The clock only moves when [`AdvanceTimer::advance`] is called with the
//! elapsed frame time, which keeps the deck deterministic under test and
//! independent of wall time. Scheduling always replaces the pending deadline,
//! so at most one firing is ever outstanding.

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct AdvanceTimer {
    now: Duration,
    due_at: Option<Duration>,
}

impl AdvanceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time accumulated through `advance`.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm the timer `delay` from now, dropping any pending deadline.
    pub fn schedule(&mut self, delay: Duration) {
        self.due_at = Some(self.now + delay);
    }

    /// Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.due_at.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.due_at.map(|due| due.saturating_sub(self.now))
    }

    /// Move the clock forward. Returns true when the pending deadline expired
    /// during this step; the slot is cleared before returning.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.now += dt;
        match self.due_at {
            Some(due) if self.now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod tests;
