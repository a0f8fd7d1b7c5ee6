//! Lazy image loading: only slides near the active one get decoded.
//!
//! A slide is reported once and then left alone until [`LazyLoader::evict`]
//! hands its texture back. Failed slides are never reported again.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct LazyLoader {
    states: Vec<LoadState>,
    margin: usize,
}

impl LazyLoader {
    pub fn new(len: usize, margin: usize) -> Self {
        Self {
            states: vec![LoadState::Pending; len],
            margin,
        }
    }

    pub fn state(&self, index: usize) -> Option<LoadState> {
        self.states.get(index).copied()
    }

    /// Pending slides within `margin` of `active`, wrapping at both ends,
    /// active slide first.
    pub fn due(&self, active: usize) -> Vec<usize> {
        let len = self.states.len();
        if len == 0 {
            return Vec::new();
        }
        let active = active % len;
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();

        let mut push = |i: usize| {
            if self.states[i] == LoadState::Pending && seen.insert(i) {
                out.push(i);
            }
        };

        push(active);
        for step in 1..=self.margin.min(len) {
            push((active + step) % len);
            push((active + len - step % len) % len);
        }
        out
    }

    /// Loaded slides more than `keep` steps from `active`, wrapping at both
    /// ends. They go back to pending so they are reported again once the
    /// deck comes near them.
    pub fn evict(&mut self, active: usize, keep: usize) -> Vec<usize> {
        let len = self.states.len();
        if len == 0 {
            return Vec::new();
        }
        let active = active % len;

        let mut out = Vec::new();
        for (i, state) in self.states.iter_mut().enumerate() {
            let ahead = (i + len - active) % len;
            let distance = ahead.min(len - ahead);
            if *state == LoadState::Loaded && distance > keep {
                *state = LoadState::Pending;
                out.push(i);
            }
        }
        out
    }

    pub fn mark_loaded(&mut self, index: usize) {
        self.set(index, LoadState::Loaded);
    }

    pub fn mark_failed(&mut self, index: usize) {
        self.set(index, LoadState::Failed);
    }

    pub fn pending_count(&self) -> usize {
        self.states.iter().filter(|s| **s == LoadState::Pending).count()
    }

    fn set(&mut self, index: usize, state: LoadState) {
        if let Some(slot) = self.states.get_mut(index) {
            *slot = state;
        }
    }
}
