//! Rate limiting for high-frequency input, driven by the same frame clock as
//! the deck.

use std::time::Duration;

use crate::timer::AdvanceTimer;

/// Delivers the latest value once input has been quiet for `wait`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    timer: AdvanceTimer,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            timer: AdvanceTimer::new(),
            pending: None,
        }
    }

    /// Replace the pending value and restart the quiet period.
    pub fn call(&mut self, value: T) {
        self.pending = Some(value);
        self.timer.schedule(self.wait);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.timer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn advance(&mut self, dt: Duration) -> Option<T> {
        if self.timer.advance(dt) {
            self.pending.take()
        } else {
            None
        }
    }
}

/// Lets at most one call through per `limit` window.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    timer: AdvanceTimer,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            timer: AdvanceTimer::new(),
        }
    }

    pub fn try_call(&mut self) -> bool {
        if self.timer.is_pending() {
            return false;
        }
        self.timer.schedule(self.limit);
        true
    }

    pub fn advance(&mut self, dt: Duration) {
        self.timer.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn debouncer_delivers_last_value_after_quiet_period() {
        let mut d = Debouncer::new(ms(300));
        d.call("te");
        assert_eq!(d.advance(ms(200)), None);
        d.call("tec");
        assert_eq!(d.advance(ms(200)), None);
        assert_eq!(d.advance(ms(100)), Some("tec"));
        assert!(!d.is_pending());
        assert_eq!(d.advance(ms(1000)), None);
    }

    #[test]
    fn cancelled_debouncer_delivers_nothing() {
        let mut d = Debouncer::new(ms(300));
        d.call(1);
        d.cancel();
        assert_eq!(d.advance(ms(500)), None);
    }

    #[test]
    fn throttle_allows_one_call_per_window() {
        let mut t = Throttle::new(ms(16));
        assert!(t.try_call());
        assert!(!t.try_call());
        t.advance(ms(10));
        assert!(!t.try_call());
        t.advance(ms(6));
        assert!(t.try_call());
    }
}
