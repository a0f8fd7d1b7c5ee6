//! Maps viewer input onto deck operations.
//!
//! The viewer turns raw polling into [`Event`]s; everything that decides what
//! an event means for the deck lives here so it can run without a window.

use tracing::debug;

use crate::deck::{Activate, SlideDeck};
use crate::gesture::{Swipe, SwipeTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Escape,
    Space,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Key(Key),
    PointerDown { x: f32 },
    PointerUp { x: f32 },
    PointerEnter,
    PointerLeave,
    IndicatorClicked(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ignored,
    Navigated,
    Paused,
    Resumed,
    /// Jumped to the first slide; the indicator strip should scroll back too.
    ScrolledToStart,
}

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    swipe: SwipeTracker,
    hovering: bool,
    // The pause in effect was started by the current press, not by Escape
    // or hover, so the release may lift it.
    paused_by_press: bool,
}

impl Dispatcher {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
            hovering: false,
            paused_by_press: false,
        }
    }

    pub fn handle<S: Activate, I: Activate>(&mut self, deck: &mut SlideDeck<S, I>, event: Event) -> Action {
        let action = match event {
            Event::Key(Key::Right) => {
                deck.next();
                Action::Navigated
            }
            Event::Key(Key::Left) => {
                deck.previous();
                Action::Navigated
            }
            Event::Key(Key::Escape) => {
                deck.pause();
                Action::Paused
            }
            Event::Key(Key::Space) => {
                deck.resume();
                Action::Resumed
            }
            Event::Key(Key::Home) => match deck.go_to(0) {
                Ok(()) => Action::ScrolledToStart,
                Err(_) => Action::Ignored,
            },
            Event::PointerEnter => {
                self.hovering = true;
                deck.pause();
                Action::Paused
            }
            Event::PointerLeave => {
                self.hovering = false;
                deck.resume();
                Action::Resumed
            }
            Event::PointerDown { x } => {
                self.swipe.begin(x);
                self.paused_by_press = !deck.is_paused();
                deck.pause();
                Action::Paused
            }
            Event::PointerUp { x } => {
                // A tap only lifts the pause its own press started.
                let lift = std::mem::take(&mut self.paused_by_press) && !self.hovering;
                match self.swipe.end(x) {
                    Some(Swipe::Left) => {
                        deck.next();
                        Action::Navigated
                    }
                    Some(Swipe::Right) => {
                        deck.previous();
                        Action::Navigated
                    }
                    None if lift => {
                        deck.resume();
                        Action::Resumed
                    }
                    None => Action::Ignored,
                }
            }
            Event::IndicatorClicked(index) => match deck.go_to(index) {
                Ok(()) => Action::Navigated,
                Err(e) => {
                    debug!(error = %e, "indicator click ignored");
                    Action::Ignored
                }
            },
        };

        if action == Action::Navigated {
            debug!(index = deck.index(), ?event, "navigated");
        }
        action
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
