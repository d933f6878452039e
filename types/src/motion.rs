//! Motion preference and the per-effect duration table.
//!
//! Every effect keeps its own duration. They were tuned one at a time and are
//! intentionally not derived from each other.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Whether the viewer asked for animations to be minimized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    #[must_use]
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced { Self::Reduced } else { Self::Full }
    }

    #[must_use]
    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }

    /// Collapse `duration` to zero when motion is reduced.
    #[must_use]
    pub fn scale(self, duration: Duration) -> Duration {
        match self {
            Self::Full => duration,
            Self::Reduced => Duration::ZERO,
        }
    }
}

pub const DEFAULT_INTRO_AUTOCLOSE: Duration = Duration::from_millis(3000);
pub const DEFAULT_INTRO_EXIT: Duration = Duration::from_millis(500);
pub const DEFAULT_INTRO_CURTAIN: Duration = Duration::from_millis(700);
pub const DEFAULT_INTRO_RIPPLE: Duration = Duration::from_millis(1000);
pub const DEFAULT_INTRO_PROGRESS: Duration = Duration::from_millis(2500);
pub const DEFAULT_ROUTE_REVEAL: Duration = Duration::from_millis(520);
pub const DEFAULT_ROUTE_IDLE: Duration = Duration::from_millis(1000);
pub const DEFAULT_ROUTE_WIPE: Duration = Duration::from_millis(600);
pub const DEFAULT_LINK_DELAY: Duration = Duration::from_millis(120);
pub const DEFAULT_SECTION_REVEAL: Duration = Duration::from_millis(700);
pub const DEFAULT_TOAST: Duration = Duration::from_millis(1600);

/// Durations for every timed effect in the UI.
///
/// `intro_autoclose` and `toast` are dwell times rather than motion, so
/// [`MotionTimings::effective`] leaves them untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionTimings {
    /// Idle time before the intro dismisses itself. `None` disables autoclose.
    pub intro_autoclose: Option<Duration>,
    /// Delay between dismissal and the overlay closing.
    pub intro_exit: Duration,
    /// Curtain wipe that rises while the intro exits.
    pub intro_curtain: Duration,
    pub intro_ripple: Duration,
    /// Fill time of the intro progress bar.
    pub intro_progress: Duration,
    /// Time from the start of a route cycle until the cover is revealed.
    pub route_reveal: Duration,
    /// Time from the start of a route cycle until the overlay is idle again.
    pub route_idle: Duration,
    pub route_wipe: Duration,
    /// Delay between activating a link and the location actually changing.
    pub link_delay: Duration,
    pub section_reveal: Duration,
    pub toast: Duration,
}

impl Default for MotionTimings {
    fn default() -> Self {
        Self {
            intro_autoclose: Some(DEFAULT_INTRO_AUTOCLOSE),
            intro_exit: DEFAULT_INTRO_EXIT,
            intro_curtain: DEFAULT_INTRO_CURTAIN,
            intro_ripple: DEFAULT_INTRO_RIPPLE,
            intro_progress: DEFAULT_INTRO_PROGRESS,
            route_reveal: DEFAULT_ROUTE_REVEAL,
            route_idle: DEFAULT_ROUTE_IDLE,
            route_wipe: DEFAULT_ROUTE_WIPE,
            link_delay: DEFAULT_LINK_DELAY,
            section_reveal: DEFAULT_SECTION_REVEAL,
            toast: DEFAULT_TOAST,
        }
    }
}

impl MotionTimings {
    /// The timings to actually schedule with, given the viewer's preference.
    #[must_use]
    pub fn effective(self, preference: MotionPreference) -> Self {
        Self {
            intro_autoclose: self.intro_autoclose.filter(|d| !d.is_zero()),
            intro_exit: preference.scale(self.intro_exit),
            intro_curtain: preference.scale(self.intro_curtain),
            intro_ripple: preference.scale(self.intro_ripple),
            intro_progress: preference.scale(self.intro_progress),
            route_reveal: preference.scale(self.route_reveal),
            route_idle: preference.scale(self.route_idle),
            route_wipe: preference.scale(self.route_wipe),
            link_delay: preference.scale(self.link_delay),
            section_reveal: preference.scale(self.section_reveal),
            toast: self.toast,
        }
    }
}
