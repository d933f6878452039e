use std::time::{Duration, Instant};

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// CSS-style cubic bezier timing curve anchored at (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// The "expo out" curve every entrance and wipe uses.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

impl CubicBezier {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased value for linear progress `t` in `[0, 1]`.
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 || t >= 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        bezier(s, self.y1, self.y2)
    }

    // Newton iterations with a bisection fallback; x(s) is monotonic for x1, x2 in [0, 1].
    fn solve_x(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let err = bezier(s, self.x1, self.x2) - x;
            if err.abs() < 1e-5 {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = bezier(s, self.x1, self.x2);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Linear clock for a single effect, measured from the instant it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTimer {
    started: Instant,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    /// Same timer, but starting `delay` after `started`.
    #[must_use]
    pub fn delayed(started: Instant, delay: Duration, duration: Duration) -> Self {
        Self::new(started + delay, duration)
    }

    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if now < self.started {
            return 0.0;
        }
        normalized_progress(now.duration_since(self.started), self.duration)
    }

    /// [`EASE_OUT`] applied to [`EffectTimer::progress`].
    #[must_use]
    pub fn eased(&self, now: Instant) -> f32 {
        EASE_OUT.apply(self.progress(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.started + self.duration
    }
}
