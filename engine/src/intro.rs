//! Intro overlay sequencing.
//!
//! [`IntroSequencer`] drives [`IntroPhase`] with an injected clock: it owns
//! the autoclose and exit timers, the scroll lock while the overlay is up,
//! and the completion callback. The callback fires once, when the exit timer
//! elapses; dropping the sequencer earlier cancels everything and it never
//! fires.

use std::fmt;
use std::time::{Duration, Instant};

use folio_types::{IntroEvent, IntroPhase, MotionTimings, RippleOrigin};

use crate::scroll_lock::{DocumentScroll, ScrollLockGuard};
use crate::timer::{TimerId, TimerQueue};

pub type CompletionCallback = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroTimer {
    AutoClose,
    ExitElapsed,
}

/// Flattened view of the overlay for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroState {
    pub is_open: bool,
    pub is_exiting: bool,
    pub ripple_origin: Option<RippleOrigin>,
}

pub struct IntroSequencer {
    phase: IntroPhase,
    autoclose: Option<Duration>,
    exit: Duration,
    timers: TimerQueue<IntroTimer>,
    autoclose_timer: Option<TimerId>,
    scroll: DocumentScroll,
    scroll_guard: Option<ScrollLockGuard>,
    on_complete: Option<CompletionCallback>,
    mounted_at: Option<Instant>,
    exit_started: Option<Instant>,
}

impl fmt::Debug for IntroSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntroSequencer")
            .field("phase", &self.phase)
            .field("autoclose", &self.autoclose)
            .field("exit", &self.exit)
            .field("pending_timers", &self.timers.len())
            .field("scroll_locked", &self.scroll_guard.is_some())
            .field("has_callback", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

impl IntroSequencer {
    /// `timings` should already be the effective ones for the viewer's
    /// motion preference.
    #[must_use]
    pub fn new(timings: &MotionTimings, scroll: DocumentScroll) -> Self {
        Self {
            phase: IntroPhase::Pending,
            autoclose: timings.intro_autoclose.filter(|d| !d.is_zero()),
            exit: timings.intro_exit,
            timers: TimerQueue::new(),
            autoclose_timer: None,
            scroll,
            scroll_guard: None,
            on_complete: None,
            mounted_at: None,
            exit_started: None,
        }
    }

    #[must_use]
    pub fn with_on_complete(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    #[must_use]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> IntroState {
        IntroState {
            is_open: self.phase.is_open(),
            is_exiting: self.phase.is_exiting(),
            ripple_origin: self.phase.ripple_origin(),
        }
    }

    #[must_use]
    pub fn mounted_at(&self) -> Option<Instant> {
        self.mounted_at
    }

    #[must_use]
    pub fn exit_started(&self) -> Option<Instant> {
        self.exit_started
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// First render pass finished: open the overlay, lock scrolling and start
    /// the autoclose timer.
    pub fn mount(&mut self, now: Instant) -> bool {
        if !self.apply(IntroEvent::Mount) {
            return false;
        }
        self.mounted_at = Some(now);
        self.scroll_guard = Some(self.scroll.lock());
        if let Some(delay) = self.autoclose {
            self.autoclose_timer = Some(self.timers.schedule(now + delay, IntroTimer::AutoClose));
            tracing::debug!(?delay, "intro autoclose scheduled");
        }
        true
    }

    /// Start the exit. Only the first dismissal while open has any effect.
    pub fn dismiss(&mut self, origin: RippleOrigin, now: Instant) -> bool {
        self.begin_exit(IntroEvent::Dismiss { origin }, now)
    }

    /// Fire every timer due at `now`, in deadline order. Returns the phases
    /// entered, oldest first.
    pub fn advance(&mut self, now: Instant) -> Vec<IntroPhase> {
        let mut entered = Vec::new();
        while let Some((deadline, timer)) = self.timers.pop_due(now) {
            let changed = match timer {
                IntroTimer::AutoClose => {
                    self.autoclose_timer = None;
                    self.begin_exit(IntroEvent::AutoClose, deadline)
                }
                IntroTimer::ExitElapsed => self.finish(),
            };
            if changed {
                entered.push(self.phase);
            }
        }
        entered
    }

    fn begin_exit(&mut self, event: IntroEvent, at: Instant) -> bool {
        if !self.apply(event) {
            tracing::debug!(?event, phase = self.phase.label(), "intro dismissal ignored");
            return false;
        }
        if let Some(id) = self.autoclose_timer.take() {
            self.timers.cancel(id);
        }
        self.exit_started = Some(at);
        self.timers.schedule(at + self.exit, IntroTimer::ExitElapsed);
        true
    }

    fn finish(&mut self) -> bool {
        if !self.apply(IntroEvent::ExitElapsed) {
            return false;
        }
        self.timers.cancel_all();
        self.scroll_guard = None;
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
        true
    }

    fn apply(&mut self, event: IntroEvent) -> bool {
        match self.phase.on(event) {
            Some(next) => {
                tracing::info!(from = self.phase.label(), to = next.label(), "intro transition");
                self.phase = next;
                true
            }
            None => false,
        }
    }
}
