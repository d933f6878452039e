//! Per-owner timer queue.
//!
//! Each component owns its own `TimerQueue`, so dropping the component drops
//! (cancels) every timer it scheduled. Nothing is global.

use std::time::Instant;

/// Handle returned by [`TimerQueue::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Scheduled<E> {
    id: TimerId,
    deadline: Instant,
    event: E,
}

#[derive(Debug)]
pub struct TimerQueue<E> {
    pending: Vec<Scheduled<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, deadline: Instant, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            deadline,
            event,
        });
        id
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the earliest timer due at `now`.
    ///
    /// Timers with equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, E)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= now)
            .min_by_key(|(_, timer)| (timer.deadline, timer.id.0))
            .map(|(index, _)| index)?;
        let timer = self.pending.remove(index);
        Some((timer.deadline, timer.event))
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|timer| timer.deadline).min()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
