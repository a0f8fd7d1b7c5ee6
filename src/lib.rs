//! Looping slide deck with auto-advance, manual navigation and a handful of
//! small interaction helpers (theme, search, share, lazy loading).
//!
//! Everything except [`viewer`] is free of rendering concerns and is driven
//! by an explicit frame clock, so it can be exercised without a window.

pub mod config;
pub mod constants;
pub mod debounce;
pub mod deck;
pub mod gesture;
pub mod input;
pub mod lazy;
pub mod library;
pub mod prefs;
pub mod scroll;
pub mod search;
pub mod share;
pub mod theme;
pub mod ticker;
pub mod timer;

#[cfg(feature = "viewer")]
pub mod viewer;

pub use deck::{Activate, DeckError, SlideDeck};
pub use timer::AdvanceTimer;
