//! UI options and the small geometric types shared by engine and tui.

use crate::motion::MotionPreference;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

impl UiOptions {
    #[must_use]
    pub fn motion(self) -> MotionPreference {
        MotionPreference::from_reduced(self.reduced_motion)
    }
}

/// Screen cell position of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPoint {
    pub x: u16,
    pub y: u16,
}

impl CellPoint {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Rectangular click target recorded while drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitBox {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, point: CellPoint) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && u32::from(point.x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(point.y) < u32::from(self.y) + u32::from(self.height)
    }

    #[must_use]
    pub fn center(&self) -> CellPoint {
        CellPoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}
