//! Frame-time geometry for the timed effects: route wipe, intro curtain and
//! ripple, name reveal, progress bar and section entrances.
//!
//! Everything here is a pure function of instants and durations so the
//! renderer can be driven by a manual clock in tests.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use folio_types::{CellPoint, EffectTimer, RippleOrigin, RoutePhase};

/// How far past the edge the route cover travels, as a fraction of the area.
const WIPE_OVERSHOOT: f32 = 1.1;

/// Delay before the first letter of the intro name appears.
pub const LETTER_DELAY: Duration = Duration::from_millis(600);
/// Time between consecutive letters.
pub const LETTER_STAGGER: Duration = Duration::from_millis(50);

/// Rows of `area` hidden behind the route cover, or `None` when nothing is
/// covered.
///
/// During `Cover` the panel slides up from below the area; during `Reveal`
/// it keeps going and leaves through the top.
#[must_use]
pub fn route_cover(
    phase: RoutePhase,
    started: Instant,
    now: Instant,
    wipe: Duration,
    area: Rect,
) -> Option<Rect> {
    let eased = EffectTimer::new(started, wipe).eased(now);
    let height = f32::from(area.height);
    let (top, bottom) = match phase {
        RoutePhase::Idle => return None,
        RoutePhase::Cover => (WIPE_OVERSHOOT * (1.0 - eased) * height, height),
        RoutePhase::Reveal => (0.0, (1.0 - WIPE_OVERSHOOT * eased) * height),
    };
    let top = top.round().clamp(0.0, height) as u16;
    let bottom = bottom.round().clamp(0.0, height) as u16;
    (bottom > top).then(|| Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: bottom - top,
    })
}

/// Rows covered by the exit curtain, rising from the bottom of `area`.
#[must_use]
pub fn curtain(exit_started: Instant, now: Instant, duration: Duration, area: Rect) -> Option<Rect> {
    let eased = EffectTimer::new(exit_started, duration).eased(now);
    let rows = (eased * f32::from(area.height)).round() as u16;
    let rows = rows.min(area.height);
    (rows > 0).then(|| Rect {
        x: area.x,
        y: area.y + area.height - rows,
        width: area.width,
        height: rows,
    })
}

/// Screen cell the ripple expands from.
#[must_use]
pub fn ripple_center(origin: RippleOrigin, area: Rect) -> CellPoint {
    match origin {
        RippleOrigin::Pointer(point) => point,
        RippleOrigin::Center => CellPoint::new(area.x + area.width / 2, area.y + area.height / 2),
    }
}

/// Current ripple radius in rows. Columns count half, so the ripple reads as
/// a circle on a typical terminal cell grid.
#[must_use]
pub fn ripple_radius(
    origin: CellPoint,
    exit_started: Instant,
    now: Instant,
    duration: Duration,
    area: Rect,
) -> f32 {
    let corners = [
        (area.x, area.y),
        (area.right().saturating_sub(1), area.y),
        (area.x, area.bottom().saturating_sub(1)),
        (area.right().saturating_sub(1), area.bottom().saturating_sub(1)),
    ];
    let reach = corners
        .into_iter()
        .map(|(x, y)| cell_distance(origin, CellPoint::new(x, y)))
        .fold(0.0_f32, f32::max);
    EffectTimer::new(exit_started, duration).eased(now) * reach
}

#[must_use]
pub fn cell_distance(a: CellPoint, b: CellPoint) -> f32 {
    let dx = (f32::from(a.x) - f32::from(b.x)) / 2.0;
    let dy = f32::from(a.y) - f32::from(b.y);
    dx.hypot(dy)
}

/// Letters of the intro name visible so far. Before mount, and under reduced
/// motion, the whole name is shown.
#[must_use]
pub fn letters_shown(mounted_at: Option<Instant>, now: Instant, total: usize, reduced: bool) -> usize {
    let Some(mounted_at) = mounted_at else {
        return total;
    };
    if reduced {
        return total;
    }
    let elapsed = now.saturating_duration_since(mounted_at);
    let Some(after_delay) = elapsed.checked_sub(LETTER_DELAY) else {
        return 0;
    };
    let shown = after_delay.as_millis() / LETTER_STAGGER.as_millis() + 1;
    usize::try_from(shown).map_or(total, |shown| shown.min(total))
}

/// Filled cells of a `width`-cell progress bar.
#[must_use]
pub fn progress_cells(started: Option<Instant>, now: Instant, duration: Duration, width: u16) -> u16 {
    let Some(started) = started else {
        return 0;
    };
    let progress = EffectTimer::new(started, duration).progress(now);
    ((progress * f32::from(width)).round() as u16).min(width)
}

/// Rows of a section revealed at entrance amount `amount`.
#[must_use]
pub fn revealed_rows(amount: f32, total: usize) -> usize {
    if amount >= 1.0 {
        return total;
    }
    if amount <= 0.0 {
        return 0;
    }
    ((amount * total as f32).ceil() as usize).min(total)
}
