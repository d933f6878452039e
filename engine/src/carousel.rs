//! Projects carousel selection.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
    changed_at: Option<Instant>,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            active: 0,
            len,
            changed_at: None,
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// When the active card last changed, for its swap-in animation.
    #[must_use]
    pub fn changed_at(&self) -> Option<Instant> {
        self.changed_at
    }

    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.set((self.active + 1) % self.len, now);
        }
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len > 0 {
            self.set((self.active + self.len - 1) % self.len, now);
        }
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.set(index, now);
        }
    }

    fn set(&mut self, index: usize, now: Instant) {
        if index != self.active {
            self.active = index;
            self.changed_at = Some(now);
        }
    }
}
