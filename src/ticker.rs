//! Scrolling caption ticker.
//!
//! Runs continuously unless the pointer is over it or pressing it. After a
//! press is released it stays still for a short delay before moving again.

use std::time::Duration;

use tracing::trace;

use crate::constants::{TICKER_RESUME_DELAY, TICKER_SPEED};
use crate::timer::AdvanceTimer;

#[derive(Debug, Clone)]
pub struct Ticker {
    speed: f32,
    resume_delay: Duration,
    offset: f32,
    hovered: bool,
    held: bool,
    resume: AdvanceTimer,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICKER_SPEED, TICKER_RESUME_DELAY)
    }
}

impl Ticker {
    pub fn new(speed: f32, resume_delay: Duration) -> Self {
        Self {
            speed,
            resume_delay,
            offset: 0.0,
            hovered: false,
            held: false,
            resume: AdvanceTimer::new(),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_running(&self) -> bool {
        !self.hovered && !self.held && !self.resume.is_pending()
    }

    /// Entering pauses at once; leaving resumes at once.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if hovered {
            self.resume.cancel();
        }
    }

    pub fn press(&mut self) {
        self.held = true;
        self.resume.cancel();
    }

    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        self.held = false;
        self.resume.schedule(self.resume_delay);
    }

    /// Step the scroll. `cycle` is the width after which the text repeats.
    pub fn advance(&mut self, dt: Duration, cycle: f32) -> f32 {
        // Movement starts on the step after the delay runs out.
        if self.resume.advance(dt) {
            trace!("ticker resumed");
            return self.offset;
        }
        if self.is_running() && cycle > 0.0 {
            self.offset = (self.offset + self.speed * dt.as_secs_f32()) % cycle;
        }
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn ticker() -> Ticker {
        Ticker::new(100.0, ms(2000))
    }

    #[test]
    fn scrolls_and_wraps() {
        let mut t = ticker();
        assert_eq!(t.advance(ms(500), 1000.0), 50.0);
        assert_eq!(t.advance(ms(10_000), 1000.0), 50.0);
    }

    #[test]
    fn hover_pauses_until_leave() {
        let mut t = ticker();
        t.set_hovered(true);
        assert_eq!(t.advance(ms(1000), 1000.0), 0.0);

        t.set_hovered(false);
        assert!(t.is_running());
        assert_eq!(t.advance(ms(1000), 1000.0), 100.0);
    }

    #[test]
    fn release_resumes_after_delay() {
        let mut t = ticker();
        t.press();
        t.advance(ms(500), 1000.0);
        t.release();

        assert!(!t.is_running());
        assert_eq!(t.advance(ms(1999), 1000.0), 0.0);

        assert_eq!(t.advance(ms(1), 1000.0), 0.0);
        assert!(t.is_running());
        assert_eq!(t.advance(ms(1000), 1000.0), 100.0);
    }

    #[test]
    fn new_press_cancels_pending_resume() {
        let mut t = ticker();
        t.press();
        t.release();
        t.advance(ms(1000), 1000.0);
        t.press();
        t.advance(ms(5000), 1000.0);
        assert!(!t.is_running());
        assert_eq!(t.offset(), 0.0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = ticker();
        t.release();
        assert!(t.is_running());
    }
}
