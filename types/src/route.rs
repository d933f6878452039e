//! Locations and the route-transition overlay state machine.
//!
//! ```text
//! any --LocationChanged--> Cover --CoverElapsed--> Reveal --RevealElapsed--> Idle
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::SectionId;

/// A navigable location, e.g. `/` or `/#projects`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn root() -> Self {
        Self::new("/")
    }

    #[must_use]
    pub fn for_section(section: SectionId) -> Self {
        match section {
            SectionId::Hero => Self::root(),
            other => Self(format!("/#{}", other.anchor())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The section this location points at, if any.
    #[must_use]
    pub fn section(&self) -> Option<SectionId> {
        match self.0.split_once('#') {
            None if self.0 == "/" => Some(SectionId::Hero),
            None => None,
            Some((_, anchor)) => SectionId::from_anchor(anchor),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoutePhase {
    #[default]
    Idle,
    /// The wipe rises and covers the content.
    Cover,
    /// The wipe leaves through the top.
    Reveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEvent {
    LocationChanged,
    CoverElapsed,
    RevealElapsed,
}

impl RoutePhase {
    /// Next phase for `event`, or `None` when the event does not apply.
    ///
    /// A location change restarts the cycle from any phase.
    #[must_use]
    pub fn on(self, event: RouteEvent) -> Option<Self> {
        match (self, event) {
            (_, RouteEvent::LocationChanged) => Some(Self::Cover),
            (Self::Cover, RouteEvent::CoverElapsed) => Some(Self::Reveal),
            (Self::Cover | Self::Reveal, RouteEvent::RevealElapsed) => Some(Self::Idle),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Cover => "cover",
            Self::Reveal => "reveal",
        }
    }
}

/// Snapshot of the route overlay. Visibility is derived from the phase so the
/// two can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteTransitionState {
    pub phase: RoutePhase,
}

impl RouteTransitionState {
    #[must_use]
    pub fn visible(self) -> bool {
        self.phase != RoutePhase::Idle
    }
}
