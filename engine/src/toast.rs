//! Transient notices (copy feedback).

use std::time::{Duration, Instant};

use crate::timer::TimerQueue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// Holds at most one toast. Showing a new one replaces the old one and
/// restarts the dismiss timer.
#[derive(Debug)]
pub struct ToastSlot {
    current: Option<Toast>,
    duration: Duration,
    timers: TimerQueue<()>,
}

impl ToastSlot {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
            timers: TimerQueue::new(),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.timers.cancel_all();
        self.timers.schedule(now + self.duration, ());
        self.current = Some(Toast {
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn advance(&mut self, now: Instant) {
        if self.timers.pop_due(now).is_some() {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
