//! Route-transition overlay.
//!
//! Runs the cover/reveal/idle cycle every time the observed location changes.
//! Both timers are measured from the start of the cycle, and a new change
//! cancels them before the next cycle starts.

use std::time::{Duration, Instant};

use folio_types::{Location, MotionTimings, RouteEvent, RoutePhase, RouteTransitionState};

use crate::router::LocationWatch;
use crate::timer::TimerQueue;

#[derive(Debug)]
pub struct RouteTransitionWatcher {
    watch: LocationWatch,
    seen: Location,
    state: RouteTransitionState,
    reveal_after: Duration,
    idle_after: Duration,
    timers: TimerQueue<RouteEvent>,
    phase_started: Option<Instant>,
}

impl RouteTransitionWatcher {
    #[must_use]
    pub fn new(watch: LocationWatch, timings: &MotionTimings) -> Self {
        let seen = watch.current();
        Self {
            watch,
            seen,
            state: RouteTransitionState::default(),
            reveal_after: timings.route_reveal,
            idle_after: timings.route_idle,
            timers: TimerQueue::new(),
            phase_started: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> RouteTransitionState {
        self.state
    }

    /// When the current phase began, for animating the wipe.
    #[must_use]
    pub fn phase_started(&self) -> Option<Instant> {
        self.phase_started
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Observe the location and fire due timers.
    pub fn poll(&mut self, now: Instant) {
        if let Some(location) = self.watch.changed()
            && location != self.seen
        {
            self.seen = location;
            self.restart(now);
        }
        self.advance(now);
    }

    fn restart(&mut self, now: Instant) {
        if !self.timers.is_empty() {
            tracing::debug!(
                phase = self.state.phase.label(),
                "route transition restarted mid-cycle"
            );
        }
        self.timers.cancel_all();
        self.apply(RouteEvent::LocationChanged, now);
        self.timers.schedule(now + self.reveal_after, RouteEvent::CoverElapsed);
        self.timers.schedule(now + self.idle_after, RouteEvent::RevealElapsed);
    }

    fn advance(&mut self, now: Instant) {
        while let Some((deadline, event)) = self.timers.pop_due(now) {
            self.apply(event, deadline);
        }
    }

    fn apply(&mut self, event: RouteEvent, at: Instant) {
        if let Some(next) = self.state.phase.on(event) {
            tracing::info!(
                from = self.state.phase.label(),
                to = next.label(),
                "route transition"
            );
            self.state.phase = next;
            self.phase_started = (next != RoutePhase::Idle).then_some(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::router::Router;
    use folio_types::{MotionPreference, SectionId};

    fn setup(timings: MotionTimings) -> (ManualClock, Router, RouteTransitionWatcher) {
        let clock = ManualClock::new();
        let router = Router::new(Location::root(), Duration::ZERO);
        let watcher = RouteTransitionWatcher::new(router.subscribe(), &timings);
        (clock, router, watcher)
    }

    #[test]
    fn idle_until_location_changes() {
        let (clock, _router, mut watcher) = setup(MotionTimings::default());
        watcher.poll(clock.now());
        assert!(!watcher.state().visible());
        assert_eq!(watcher.next_deadline(), None);
    }

    #[test]
    fn full_cycle_timing() {
        let (clock, router, mut watcher) = setup(MotionTimings::default());
        router.push(Location::for_section(SectionId::Projects));
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Cover);

        clock.advance_ms(519);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Cover);
        clock.advance_ms(1);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Reveal);

        clock.advance_ms(479);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Reveal);
        clock.advance_ms(1);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Idle);
        assert!(!watcher.state().visible());
    }

    #[test]
    fn change_during_reveal_restarts_and_drops_stale_idle() {
        let (clock, router, mut watcher) = setup(MotionTimings::default());
        router.push(Location::for_section(SectionId::Projects));
        watcher.poll(clock.now());
        clock.advance_ms(600);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Reveal);

        router.push(Location::for_section(SectionId::Contact));
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Cover);

        // The first cycle's idle deadline (t=1000) has passed; the new cycle
        // must still be covering.
        clock.advance_ms(400);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Cover);

        clock.advance_ms(120);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Reveal);
        clock.advance_ms(480);
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Idle);
    }

    #[test]
    fn reduced_motion_runs_whole_cycle_at_once() {
        let (clock, router, mut watcher) =
            setup(MotionTimings::default().effective(MotionPreference::Reduced));
        router.push(Location::for_section(SectionId::Skills));
        watcher.poll(clock.now());
        assert_eq!(watcher.state().phase, RoutePhase::Idle);
        assert_eq!(watcher.phase_started(), None);
    }

    #[test]
    fn phase_start_follows_timer_deadlines() {
        let (clock, router, mut watcher) = setup(MotionTimings::default());
        let start = clock.now();
        router.push(Location::for_section(SectionId::Experience));
        watcher.poll(start);
        assert_eq!(watcher.phase_started(), Some(start));
        clock.advance_ms(700);
        watcher.poll(clock.now());
        assert_eq!(
            watcher.phase_started(),
            Some(start + Duration::from_millis(520))
        );
    }
}
