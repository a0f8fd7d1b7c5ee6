//! Pointer gestures: horizontal swipes and enter/leave edges.

use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left: show the next slide.
    Left,
    /// Finger moved left to right: show the previous slide.
    Right,
}

/// Tracks one press/release pair and classifies the horizontal distance.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the gesture. Distances up to the threshold are not a swipe, and
    /// a release without a matching press is ignored.
    pub fn end(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        classify(x - start, self.threshold)
    }
}

pub fn classify(distance: f32, threshold: f32) -> Option<Swipe> {
    if distance.abs() <= threshold {
        None
    } else if distance > 0.0 {
        Some(Swipe::Right)
    } else {
        Some(Swipe::Left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

/// Turns a per-frame "is the pointer inside" sample into edge events.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn update(&mut self, inside: bool) -> Option<Hover> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside { Hover::Enter } else { Hover::Leave })
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_left_drag_is_a_left_swipe() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(300.0);
        assert_eq!(tracker.end(220.0), Some(Swipe::Left));
    }

    #[test]
    fn short_drag_is_not_a_gesture() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(300.0);
        assert_eq!(tracker.end(270.0), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify(50.0, 50.0), None);
        assert_eq!(classify(-50.0, 50.0), None);
        assert_eq!(classify(50.5, 50.0), Some(Swipe::Right));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(1000.0), None);
    }

    #[test]
    fn hover_reports_edges_only() {
        let mut hover = HoverTracker::default();
        assert_eq!(hover.update(false), None);
        assert_eq!(hover.update(true), Some(Hover::Enter));
        assert_eq!(hover.update(true), None);
        assert_eq!(hover.update(false), Some(Hover::Leave));
        assert!(!hover.is_inside());
    }
}
