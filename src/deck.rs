//! Slide deck controller.
//!
//! Owns the active index, the slide and indicator handles, and the advance
//! timer. Every manual navigation cancels the pending advance before acting
//! and arms a fresh one afterwards, so the deck never holds more than one
//! outstanding auto-advance.
//!
//! States are `index 0..N-1` plus idle when the deck is empty. An empty deck
//! never arms its timer.

use std::time::Duration;

use tracing::{debug, trace};

use crate::constants::AUTO_ADVANCE_INTERVAL;
use crate::timer::AdvanceTimer;

/// Something that can carry the "active" mark: a slide or its indicator.
pub trait Activate {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("deck has {slides} slides but {indicators} indicators")]
    LengthMismatch { slides: usize, indicators: usize },
    #[error("slide index {index} is out of range for a deck of {len}")]
    OutOfRange { index: usize, len: usize },
}

pub struct SlideDeck<S, I = S> {
    slides: Vec<S>,
    indicators: Vec<I>,
    index: usize,
    interval: Duration,
    timer: AdvanceTimer,
}

impl<S: Activate, I: Activate> SlideDeck<S, I> {
    /// Build a deck with the default auto-advance interval.
    pub fn new(slides: Vec<S>, indicators: Vec<I>) -> Result<Self, DeckError> {
        Self::with_interval(slides, indicators, AUTO_ADVANCE_INTERVAL)
    }

    /// Build a deck, mark slide 0 active and arm the first advance.
    ///
    /// Whatever active marks the handles carried on the way in are cleared.
    pub fn with_interval(
        slides: Vec<S>,
        indicators: Vec<I>,
        interval: Duration,
    ) -> Result<Self, DeckError> {
        if slides.len() != indicators.len() {
            return Err(DeckError::LengthMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        let mut deck = Self {
            slides,
            indicators,
            index: 0,
            interval,
            timer: AdvanceTimer::new(),
        };

        for slide in deck.slides.iter_mut() {
            slide.set_active(false);
        }
        for indicator in deck.indicators.iter_mut() {
            indicator.set_active(false);
        }

        if !deck.is_empty() {
            deck.mark(true);
            deck.timer.schedule(interval);
        }
        debug!(len = deck.len(), interval_ms = interval.as_millis() as u64, "slide deck ready");

        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Active index. Meaningless (always 0) when the deck is empty.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect the next time the timer is armed.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Mutable access for per-frame slide updates. Callers must not touch the
    /// active mark.
    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    pub fn active_slide(&self) -> Option<&S> {
        self.slides.get(self.index)
    }

    /// True when a non-empty deck has no advance pending.
    pub fn is_paused(&self) -> bool {
        !self.is_empty() && !self.timer.is_pending()
    }

    pub fn time_until_advance(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Jump to slide `n`.
    ///
    /// Out-of-range targets are rejected and leave the deck untouched,
    /// including the pending advance.
    pub fn go_to(&mut self, n: usize) -> Result<(), DeckError> {
        if n >= self.len() {
            return Err(DeckError::OutOfRange {
                index: n,
                len: self.len(),
            });
        }

        self.timer.cancel();
        self.transition(n);
        self.timer.schedule(self.interval);
        Ok(())
    }

    pub fn next(&mut self) {
        self.timer.cancel();
        if self.is_empty() {
            return;
        }
        self.transition((self.index + 1) % self.len());
        self.timer.schedule(self.interval);
    }

    pub fn previous(&mut self) {
        self.timer.cancel();
        if self.is_empty() {
            return;
        }
        let len = self.len();
        self.transition((self.index + len - 1) % len);
        self.timer.schedule(self.interval);
    }

    /// Timer-driven advance. Does nothing, and arms nothing, on an empty deck.
    pub fn auto_advance(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.transition((self.index + 1) % self.len());
        self.timer.schedule(self.interval);
        true
    }

    pub fn pause(&mut self) {
        if self.timer.cancel() {
            debug!(index = self.index, "auto-advance paused");
        }
    }

    pub fn resume(&mut self) {
        if self.is_empty() {
            return;
        }
        self.timer.schedule(self.interval);
        debug!(index = self.index, "auto-advance resumed");
    }

    /// Feed elapsed frame time. Returns true if the advance fired.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.timer.advance(dt) {
            self.auto_advance()
        } else {
            false
        }
    }

    fn transition(&mut self, target: usize) {
        self.mark(false);
        trace!(from = self.index, to = target, "slide transition");
        self.index = target;
        self.mark(true);
    }

    // Missing handles are skipped.
    fn mark(&mut self, active: bool) {
        if let Some(slide) = self.slides.get_mut(self.index) {
            slide.set_active(active);
        }
        if let Some(indicator) = self.indicators.get_mut(self.index) {
            indicator.set_active(active);
        }
    }
}

#[cfg(test)]
#[path = "deck_test.rs"]
mod tests;
