//! Core domain types for Folio.
//!
//! Pure data and state machines: no IO, no async, no clocks. The engine crate
//! drives these machines with real or manual time.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod color;
pub mod intro;
pub mod motion;
pub mod resume;
pub mod route;
pub mod section;
pub mod ui;

pub use color::{ColorParseError, HexColor};
pub use intro::{IntroEvent, IntroPhase, RippleOrigin};
pub use motion::{MotionPreference, MotionTimings};
pub use resume::{
    ContactItem, ContactKind, Profile, Project, Resume, SkillCategory, SkillGroup, SkillLevel,
    TimelineEntry, resume,
};
pub use route::{Location, RouteEvent, RoutePhase, RouteTransitionState};
pub use section::SectionId;
pub use ui::{CellPoint, CubicBezier, EASE_OUT, EffectTimer, HitBox, UiOptions};
