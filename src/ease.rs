// Easing curves. Pure, O(1), allocation-free: these run several times per frame.

use serde::{Deserialize, Serialize};

/// Easing function for mapping normalized progress.
///
/// Every variant maps [0, 1] onto [0, 1] with `apply(0) == 0`, `apply(1) == 1`
/// and is non-decreasing in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    EaseOut,
    /// Cubic ease-in-out. The master curve of the hero clip.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply this easing to `t`. Inputs outside [0, 1] are clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => ease_in_out_cubic(t),
        }
    }
}

/// `4t³` below the midpoint, `1 - (-2t + 2)³ / 2` above it.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Clamp to [0, 1]. NaN collapses to 0 so no frame ever sees a NaN.
pub(crate) fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Exact at both ends, so saturated windows land precisely on their targets.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
