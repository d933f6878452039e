//! Section visibility and entrance gates.
//!
//! A section animates in only once the first frame has been drawn (mount)
//! and its rows intersect the viewport shrunk by its root margin.
//! Visibility is recomputed every frame, so a section that scrolls out of
//! view resets and plays its entrance again on the way back in.
//!
//! The hero is gated on the intro instead of the viewport: it enters once the
//! intro completes and stays entered.

use std::time::{Duration, Instant};

use folio_types::{EffectTimer, SectionId};

use crate::signal::IntroContext;

/// Rows occupied by a section in the scrollable document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSpan {
    pub top: u32,
    pub height: u32,
}

impl SectionSpan {
    #[must_use]
    pub fn bottom(self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub top: u32,
    pub height: u32,
}

impl Viewport {
    /// Rows `[start, end)` left after shrinking each edge by `percent` of the
    /// viewport height.
    #[must_use]
    pub fn shrunk(self, percent: u16) -> (u32, u32) {
        let inset = (u64::from(self.height) * u64::from(percent.min(50)) / 100) as u32;
        let start = self.top.saturating_add(inset);
        let end = self.top.saturating_add(self.height).saturating_sub(inset);
        (start, end.max(start))
    }

    #[must_use]
    pub fn intersects(self, span: SectionSpan, margin_percent: u16) -> bool {
        let (start, end) = self.shrunk(margin_percent);
        span.height > 0 && span.top < end && span.bottom() > start
    }
}

/// How far a section's entrance has progressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    /// Before the first frame: drawn in its final layout, no animation.
    Static,
    /// Mounted but gated: drawn in its pre-entrance pose.
    Hidden,
    /// Eased progress in `[0, 1]`.
    Running(f32),
}

impl Entrance {
    /// Scalar form for renderers: `Static` counts as fully entered.
    #[must_use]
    pub fn amount(self) -> f32 {
        match self {
            Self::Static => 1.0,
            Self::Hidden => 0.0,
            Self::Running(progress) => progress,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Gate {
    in_view: bool,
    timer: Option<EffectTimer>,
}

#[derive(Debug)]
pub struct Sections {
    mounted: bool,
    reveal: Duration,
    spans: [SectionSpan; 5],
    gates: [Gate; 5],
}

impl Sections {
    #[must_use]
    pub fn new(reveal: Duration) -> Self {
        Self {
            mounted: false,
            reveal,
            spans: [SectionSpan::default(); 5],
            gates: [Gate::default(); 5],
        }
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn set_spans(&mut self, spans: [SectionSpan; 5]) {
        self.spans = spans;
    }

    #[must_use]
    pub fn span(&self, id: SectionId) -> SectionSpan {
        self.spans[id.index()]
    }

    #[must_use]
    pub fn document_height(&self) -> u32 {
        self.spans.iter().map(|span| span.bottom()).max().unwrap_or(0)
    }

    /// The section containing document row `row`.
    #[must_use]
    pub fn section_at(&self, row: u32) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|id| {
                let span = self.span(*id);
                row >= span.top && row < span.bottom()
            })
    }

    /// Recompute visibility and start or reset entrances.
    pub fn update(&mut self, viewport: Viewport, intro: &IntroContext, now: Instant) {
        for id in SectionId::ALL {
            let in_view = viewport.intersects(self.span(id), id.root_margin_percent());
            let ready = self.mounted
                && if id.waits_for_intro() {
                    intro.is_intro_complete()
                } else {
                    in_view
                };
            let gate = &mut self.gates[id.index()];
            if in_view != gate.in_view {
                tracing::debug!(section = id.anchor(), in_view, "section visibility changed");
            }
            gate.in_view = in_view;
            match (ready, gate.timer) {
                (true, None) => gate.timer = Some(EffectTimer::new(now, self.reveal)),
                (false, Some(_)) => gate.timer = None,
                _ => {}
            }
        }
    }

    #[must_use]
    pub fn in_view(&self, id: SectionId) -> bool {
        self.gates[id.index()].in_view
    }

    #[must_use]
    pub fn should_animate(&self, id: SectionId) -> bool {
        self.gates[id.index()].timer.is_some()
    }

    #[must_use]
    pub fn entrance(&self, id: SectionId, now: Instant) -> Entrance {
        if !self.mounted {
            return Entrance::Static;
        }
        match self.gates[id.index()].timer {
            Some(timer) => Entrance::Running(timer.eased(now)),
            None => Entrance::Hidden,
        }
    }
}
