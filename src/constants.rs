use std::time::Duration;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Time each slide stays active
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal drag (px) that counts as a swipe
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const SEARCH_MIN_QUERY: usize = 2;        // Shorter queries hide the suggestion list
pub const SCROLL_DURATION: Duration = Duration::from_millis(800);
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(16);
pub const SCROLL_THRESHOLD: f32 = 300.0;      // Strip offset past which "back to start" is offered
pub const LAZY_MARGIN: usize = 1;             // Slides preloaded on each side of the active one

pub const FADE_DURATION: f32 = 0.4;           // Crossfade between slides (seconds)
pub const DOT_RADIUS: f32 = 7.0;
pub const DOT_SPACING: f32 = 26.0;
pub const DOT_MARGIN_BOTTOM: f32 = 28.0;

pub const TICKER_SPEED: f32 = 60.0;           // Caption ticker scroll speed (px per second)
pub const TICKER_RESUME_DELAY: Duration = Duration::from_millis(2000); // Hold-off after a press is released
