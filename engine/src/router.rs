//! Location capability.
//!
//! The current [`Location`] lives in a `tokio::sync::watch` channel: the
//! router is the only sender, and anything that needs to react to navigation
//! holds a [`LocationWatch`].

use std::time::{Duration, Instant};

use folio_types::Location;
use tokio::sync::watch;

use crate::timer::TimerQueue;

#[derive(Debug)]
pub struct Router {
    tx: watch::Sender<Location>,
    link_delay: Duration,
    pending: TimerQueue<Location>,
}

impl Router {
    #[must_use]
    pub fn new(initial: Location, link_delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            link_delay,
            pending: TimerQueue::new(),
        }
    }

    /// A watch that reports changes made after this call.
    #[must_use]
    pub fn subscribe(&self) -> LocationWatch {
        LocationWatch {
            rx: self.tx.subscribe(),
        }
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.tx.borrow().clone()
    }

    /// Follow a link. With a non-zero link delay the location changes once
    /// the delay has passed, giving the route cover a head start; a newer
    /// navigation replaces one still waiting.
    pub fn navigate(&mut self, to: Location, now: Instant) {
        self.pending.cancel_all();
        if self.link_delay.is_zero() {
            self.push(to);
        } else {
            tracing::debug!(%to, delay = ?self.link_delay, "navigation scheduled");
            self.pending.schedule(now + self.link_delay, to);
        }
    }

    /// Change the location immediately. Returns `false` if it was unchanged.
    pub fn push(&self, to: Location) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == to {
                false
            } else {
                *current = to;
                true
            }
        });
        if changed {
            tracing::info!(location = %*self.tx.borrow(), "location changed");
        }
        changed
    }

    pub fn advance(&mut self, now: Instant) {
        while let Some((_, to)) = self.pending.pop_due(now) {
            self.push(to);
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationWatch {
    rx: watch::Receiver<Location>,
}

impl LocationWatch {
    /// The new location if it changed since the last call.
    pub fn changed(&mut self) -> Option<Location> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            Ok(false) | Err(_) => None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Location {
        self.rx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::SectionId;

    #[test]
    fn subscription_ignores_initial_location() {
        let router = Router::new(Location::root(), Duration::ZERO);
        let mut watch = router.subscribe();
        assert_eq!(watch.changed(), None);
        assert_eq!(watch.current(), Location::root());
    }

    #[test]
    fn immediate_navigation_without_delay() {
        let mut router = Router::new(Location::root(), Duration::ZERO);
        let mut watch = router.subscribe();
        router.navigate(Location::for_section(SectionId::Projects), Instant::now());
        assert_eq!(watch.changed().as_ref().map(Location::as_str), Some("/#projects"));
        assert_eq!(watch.changed(), None);
    }

    #[test]
    fn delayed_navigation_waits_for_link_delay() {
        let start = Instant::now();
        let mut router = Router::new(Location::root(), Duration::from_millis(120));
        let mut watch = router.subscribe();
        router.navigate(Location::for_section(SectionId::Skills), start);
        router.advance(start + Duration::from_millis(119));
        assert_eq!(watch.changed(), None);
        router.advance(start + Duration::from_millis(120));
        assert_eq!(watch.changed(), Some(Location::for_section(SectionId::Skills)));
    }

    #[test]
    fn newer_navigation_replaces_pending_one() {
        let start = Instant::now();
        let mut router = Router::new(Location::root(), Duration::from_millis(120));
        let mut watch = router.subscribe();
        router.navigate(Location::for_section(SectionId::Skills), start);
        router.navigate(Location::for_section(SectionId::Contact), start + Duration::from_millis(60));
        router.advance(start + Duration::from_millis(500));
        assert_eq!(watch.changed(), Some(Location::for_section(SectionId::Contact)));
        assert_eq!(watch.changed(), None);
    }

    #[test]
    fn pushing_same_location_is_not_a_change() {
        let router = Router::new(Location::root(), Duration::ZERO);
        let mut watch = router.subscribe();
        assert!(!router.push(Location::root()));
        assert_eq!(watch.changed(), None);
    }

    #[test]
    fn push_changes_location_for_every_watcher() {
        let router = Router::new(Location::root(), Duration::ZERO);
        let mut first = router.subscribe();
        let mut second = router.subscribe();
        assert!(router.push(Location::new("/#experience")));
        assert_eq!(router.location(), Location::for_section(SectionId::Experience));
        assert_eq!(first.changed(), Some(Location::for_section(SectionId::Experience)));
        assert_eq!(second.changed(), Some(Location::for_section(SectionId::Experience)));
    }
}
