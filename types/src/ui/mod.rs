//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod options;

pub use animation::{CubicBezier, EASE_OUT, EffectTimer};
pub use options::{CellPoint, HitBox, UiOptions};
