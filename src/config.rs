//! Command line and derived runtime settings.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::{AUTO_ADVANCE_INTERVAL, LAZY_MARGIN, SWIPE_THRESHOLD, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::prefs::PrefsStore;
use crate::theme::Theme;

#[derive(Debug, Clone, Parser)]
#[command(name = "slidedeck", version, about = "Looping image slideshow")]
pub struct Args {
    /// Directory containing the images to show
    pub image_dir: PathBuf,

    /// Seconds each slide stays up before auto-advancing
    #[arg(short, long, default_value_t = AUTO_ADVANCE_INTERVAL.as_secs_f32())]
    pub interval: f32,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub swipe_threshold: f32,

    /// Slides decoded ahead of and behind the active one
    #[arg(long, default_value_t = LAZY_MARGIN)]
    pub preload: usize,

    /// Show slides in random order
    #[arg(long)]
    pub shuffle: bool,

    /// Start with this theme instead of the saved one
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Preferences file (defaults to the user config directory)
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("interval must be a positive number of seconds, got {0}")]
    Interval(f32),
    #[error("swipe threshold must be a non-negative number of pixels, got {0}")]
    SwipeThreshold(f32),
    #[error("window size must be positive, got {0}x{1}")]
    WindowSize(i32, i32),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub image_dir: PathBuf,
    pub interval: Duration,
    pub swipe_threshold: f32,
    pub lazy_margin: usize,
    pub shuffle: bool,
    pub theme: Option<Theme>,
    pub prefs: PrefsStore,
    pub window: (i32, i32),
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !args.interval.is_finite() || args.interval <= 0.0 {
            return Err(ConfigError::Interval(args.interval));
        }
        if !args.swipe_threshold.is_finite() || args.swipe_threshold < 0.0 {
            return Err(ConfigError::SwipeThreshold(args.swipe_threshold));
        }
        if args.width <= 0 || args.height <= 0 {
            return Err(ConfigError::WindowSize(args.width, args.height));
        }

        let interval =
            Duration::try_from_secs_f32(args.interval).map_err(|_| ConfigError::Interval(args.interval))?;

        Ok(Self {
            image_dir: args.image_dir,
            interval,
            swipe_threshold: args.swipe_threshold,
            lazy_margin: args.preload,
            shuffle: args.shuffle,
            theme: args.theme,
            prefs: args
                .prefs
                .map(PrefsStore::new)
                .unwrap_or_else(PrefsStore::default_location),
            window: (args.width, args.height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("slidedeck").chain(argv.iter().copied())).unwrap();
        Config::try_from(args)
    }

    #[test]
    fn defaults_match_constants() {
        let config = parse(&["photos"]).unwrap();
        assert_eq!(config.image_dir, PathBuf::from("photos"));
        assert_eq!(config.interval, AUTO_ADVANCE_INTERVAL);
        assert_eq!(config.swipe_threshold, SWIPE_THRESHOLD);
        assert_eq!(config.lazy_margin, LAZY_MARGIN);
        assert_eq!(config.theme, None);
        assert!(!config.shuffle);
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let config = parse(&[
            "photos",
            "--interval",
            "2.5",
            "--theme",
            "dark",
            "--shuffle",
            "--prefs",
            "/tmp/p.json",
        ])
        .unwrap();
        assert_eq!(config.interval, Duration::from_millis(2500));
        assert_eq!(config.theme, Some(Theme::Dark));
        assert!(config.shuffle);
        assert_eq!(config.prefs.path(), std::path::Path::new("/tmp/p.json"));
    }

    #[test]
    fn rejects_non_positive_interval() {
        assert_eq!(parse(&["photos", "--interval", "0"]).unwrap_err(), ConfigError::Interval(0.0));
    }

    #[test]
    fn rejects_oversized_interval() {
        assert_eq!(
            parse(&["photos", "--interval", "1e20"]).unwrap_err(),
            ConfigError::Interval(1e20)
        );
    }

    #[test]
    fn rejects_unknown_theme() {
        let args = Args::try_parse_from(["slidedeck", "photos", "--theme", "sepia"]);
        assert!(args.is_err());
    }
}
