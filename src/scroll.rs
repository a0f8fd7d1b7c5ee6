//! Smooth scrolling for the indicator strip.

use std::time::Duration;

use crate::constants::{SCROLL_DURATION, SCROLL_THRESHOLD, SCROLL_THROTTLE};
use crate::debounce::Throttle;

pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One eased scroll from `from` to `to`. Sample it every frame until
/// [`ScrollAnimation::is_finished`].
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn to_start(from: f32) -> Self {
        Self::new(from, 0.0, SCROLL_DURATION)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn position(&self) -> f32 {
        self.from + (self.to - self.from) * ease_in_out_cubic(self.progress())
    }

    /// Step the animation and return the new position.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.position()
    }
}

/// Whether the "back to start" affordance should be offered.
pub fn past_threshold(offset: f32) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Samples the strip offset at most once per throttle window and keeps the
/// "back to start" affordance in sync with it.
#[derive(Debug, Clone)]
pub struct ScrollWatcher {
    throttle: Throttle,
    show_back: bool,
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE)
    }
}

impl ScrollWatcher {
    pub fn new(limit: Duration) -> Self {
        Self {
            throttle: Throttle::new(limit),
            show_back: false,
        }
    }

    pub fn observe(&mut self, offset: f32, dt: Duration) -> bool {
        self.throttle.advance(dt);
        if self.throttle.try_call() {
            self.show_back = past_threshold(offset);
        }
        self.show_back
    }

    pub fn show_back(&self) -> bool {
        self.show_back
    }
}

/// Smallest change to `offset` that keeps the item spanning
/// `[item_start, item_end]` inside a viewport of `viewport` pixels.
pub fn follow_offset(offset: f32, item_start: f32, item_end: f32, viewport: f32) -> f32 {
    if item_start < offset {
        item_start
    } else if item_end > offset + viewport {
        item_end - viewport
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn animation_runs_until_progress_reaches_one() {
        let mut anim = ScrollAnimation::new(400.0, 0.0, ms(800));
        let mut frames = 0;
        while !anim.is_finished() {
            anim.advance(ms(16));
            frames += 1;
        }
        assert_eq!(frames, 50);
        assert_eq!(anim.position(), 0.0);

        // Further frames stay at the target.
        assert_eq!(anim.advance(ms(16)), 0.0);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let anim = ScrollAnimation::new(10.0, 20.0, Duration::ZERO);
        assert!(anim.is_finished());
        assert_eq!(anim.position(), 20.0);
    }

    #[test]
    fn follow_offset_scrolls_minimally() {
        // Already visible.
        assert_eq!(follow_offset(0.0, 10.0, 20.0, 100.0), 0.0);
        // Off the right edge.
        assert_eq!(follow_offset(0.0, 110.0, 130.0, 100.0), 30.0);
        // Off the left edge.
        assert_eq!(follow_offset(50.0, 10.0, 30.0, 100.0), 10.0);
    }

    #[test]
    fn watcher_samples_offset_once_per_window() {
        let mut watcher = ScrollWatcher::new(ms(16));
        assert!(watcher.observe(400.0, Duration::ZERO));

        // Inside the window the old sample sticks.
        assert!(watcher.observe(0.0, ms(8)));
        assert!(watcher.show_back());

        assert!(!watcher.observe(0.0, ms(8)));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!past_threshold(300.0));
        assert!(past_threshold(301.0));
    }
}
