//! Intro overlay state machine.
//!
//! ```text
//! Pending --Mount--> Open --Dismiss | AutoClose--> Exiting --ExitElapsed--> Closed
//! ```
//!
//! Every edge not drawn above is a no-op, which is what makes dismissal
//! one-shot: once the machine has left `Open` there is no edge back into
//! `Exiting`.

use crate::ui::CellPoint;

/// Where the exit ripple expands from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleOrigin {
    /// The pointer position that triggered dismissal.
    Pointer(CellPoint),
    /// Keyboard or timer dismissal; the ripple starts at the viewport center.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Before the first render pass completed. The static intro is shown.
    Pending,
    Open,
    Exiting { ripple: RippleOrigin },
    /// Terminal.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    Mount,
    Dismiss { origin: RippleOrigin },
    AutoClose,
    ExitElapsed,
}

impl IntroPhase {
    /// Next phase for `event`, or `None` when the event does not apply.
    #[must_use]
    pub fn on(self, event: IntroEvent) -> Option<Self> {
        match (self, event) {
            (Self::Pending, IntroEvent::Mount) => Some(Self::Open),
            (Self::Open, IntroEvent::Dismiss { origin }) => Some(Self::Exiting { ripple: origin }),
            (Self::Open, IntroEvent::AutoClose) => Some(Self::Exiting {
                ripple: RippleOrigin::Center,
            }),
            (Self::Exiting { .. }, IntroEvent::ExitElapsed) => Some(Self::Closed),
            _ => None,
        }
    }

    /// The overlay is on screen (including while it exits).
    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_exiting(self) -> bool {
        matches!(self, Self::Exiting { .. })
    }

    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn ripple_origin(self) -> Option<RippleOrigin> {
        match self {
            Self::Exiting { ripple } => Some(ripple),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Open => "open",
            Self::Exiting { .. } => "exiting",
            Self::Closed => "closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLICK: IntroEvent = IntroEvent::Dismiss {
        origin: RippleOrigin::Pointer(CellPoint::new(10, 4)),
    };

    #[test]
    fn happy_path_visits_every_phase() {
        let open = IntroPhase::Pending.on(IntroEvent::Mount).unwrap();
        assert_eq!(open, IntroPhase::Open);
        let exiting = open.on(CLICK).unwrap();
        assert_eq!(
            exiting.ripple_origin(),
            Some(RippleOrigin::Pointer(CellPoint::new(10, 4)))
        );
        assert_eq!(exiting.on(IntroEvent::ExitElapsed), Some(IntroPhase::Closed));
    }

    #[test]
    fn dismiss_is_one_shot() {
        let exiting = IntroPhase::Open.on(IntroEvent::AutoClose).unwrap();
        assert_eq!(exiting.on(CLICK), None);
        assert_eq!(exiting.on(IntroEvent::AutoClose), None);
        assert_eq!(IntroPhase::Closed.on(CLICK), None);
        assert_eq!(IntroPhase::Closed.on(IntroEvent::Mount), None);
    }

    #[test]
    fn nothing_happens_before_mount() {
        assert_eq!(IntroPhase::Pending.on(CLICK), None);
        assert_eq!(IntroPhase::Pending.on(IntroEvent::AutoClose), None);
        assert_eq!(IntroPhase::Pending.on(IntroEvent::ExitElapsed), None);
    }

    #[test]
    fn open_flags_follow_phase() {
        assert!(IntroPhase::Open.is_open());
        assert!(!IntroPhase::Open.is_exiting());
        let exiting = IntroPhase::Open.on(IntroEvent::AutoClose).unwrap();
        assert!(exiting.is_open() && exiting.is_exiting());
        assert!(!IntroPhase::Closed.is_open());
    }
}
