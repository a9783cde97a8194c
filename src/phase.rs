// Phase windows: named sub-ranges of overall progress.
// Windows are independent and may overlap; there is no exclusivity rule between them.

use serde::{Deserialize, Serialize};

use crate::ease::{clamp_unit, Easing};
use crate::error::EngineError;

/// A `[start, end]` slice of overall progress within which one element animates.
///
/// Serialized as a two-element array. Deserialization goes through
/// [`PhaseWindow::new`], so a malformed window never makes it into a config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PhaseWindow {
    start: f64,
    end: f64,
}

/// Camera dolly spans the whole run.
pub const CAMERA_APPROACH: PhaseWindow = PhaseWindow::fixed(0.0, 1.0);

/// Doors swing open while exterior and interior cross-fade.
pub const DOOR_SWING: PhaseWindow = PhaseWindow::fixed(0.55, 0.75);

impl PhaseWindow {
    /// Build a window. `start == end` is accepted and behaves as a step.
    pub fn new(start: f64, end: f64) -> Result<Self, EngineError> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(start) || !in_unit(end) || start > end {
            return Err(EngineError::InvalidPhaseWindow { start, end });
        }
        Ok(PhaseWindow { start, end })
    }

    /// For built-in tables only; bounds are trusted.
    pub(crate) const fn fixed(start: f64, end: f64) -> Self {
        PhaseWindow { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_step(&self) -> bool {
        self.start == self.end
    }

    /// Window-local linear progress, pinned to 0 before `start` and 1 after `end`.
    pub fn raw_local(&self, progress: f64) -> f64 {
        if self.is_step() {
            return if progress < self.start { 0.0 } else { 1.0 };
        }
        clamp_unit((progress - self.start) / (self.end - self.start))
    }

    /// Window-local progress passed through `easing`.
    pub fn local(&self, progress: f64, easing: Easing) -> f64 {
        easing.apply(self.raw_local(progress))
    }
}

impl TryFrom<[f64; 2]> for PhaseWindow {
    type Error = EngineError;

    fn try_from([start, end]: [f64; 2]) -> Result<Self, Self::Error> {
        PhaseWindow::new(start, end)
    }
}

impl From<PhaseWindow> for [f64; 2] {
    fn from(window: PhaseWindow) -> Self {
        [window.start, window.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn door_window_boundaries() {
        assert_eq!(DOOR_SWING.raw_local(0.0), 0.0);
        assert_eq!(DOOR_SWING.raw_local(0.55), 0.0);
        assert_eq!(DOOR_SWING.raw_local(0.75), 1.0);
        assert_eq!(DOOR_SWING.raw_local(1.0), 1.0);
        assert!((DOOR_SWING.raw_local(0.65) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn camera_window_is_identity() {
        for p in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(CAMERA_APPROACH.raw_local(p), p);
        }
    }

    #[test]
    fn rejects_reversed_window() {
        assert_eq!(
            PhaseWindow::new(0.8, 0.2),
            Err(EngineError::InvalidPhaseWindow {
                start: 0.8,
                end: 0.2
            })
        );
    }

    #[test]
    fn rejects_out_of_unit_and_nan() {
        assert!(PhaseWindow::new(-0.1, 0.5).is_err());
        assert!(PhaseWindow::new(0.5, 1.5).is_err());
        assert!(PhaseWindow::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn degenerate_window_is_a_step() {
        let step = PhaseWindow::new(0.4, 0.4).unwrap();
        assert!(step.is_step());
        assert_eq!(step.raw_local(0.39), 0.0);
        assert_eq!(step.raw_local(0.4), 1.0);
        assert_eq!(step.raw_local(0.9), 1.0);
    }

    #[test]
    fn local_applies_easing() {
        let w = PhaseWindow::new(0.2, 0.6).unwrap();
        let raw = w.raw_local(0.3);
        assert_eq!(w.local(0.3, Easing::EaseInOut), Easing::EaseInOut.apply(raw));
        assert_eq!(w.local(0.3, Easing::Linear), raw);
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&DOOR_SWING).unwrap();
        assert_eq!(json, "[0.55,0.75]");
        let back: PhaseWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DOOR_SWING);
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<PhaseWindow>("[0.9,0.1]").is_err());
    }

    proptest! {
        #[test]
        fn local_is_clamped(
            a in 0.0f64..=1.0f64,
            b in 0.0f64..=1.0f64,
            p in -1.0f64..2.0f64,
        ) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            let w = PhaseWindow::new(start, end).unwrap();
            let v = w.local(p, Easing::EaseInOut);
            prop_assert!((0.0..=1.0).contains(&v));
            if p < start {
                prop_assert_eq!(v, 0.0);
            }
            if p > end {
                prop_assert_eq!(v, 1.0);
            }
        }

        #[test]
        fn local_is_monotonic_in_progress(
            p1 in 0.0f64..=1.0f64,
            p2 in 0.0f64..=1.0f64,
        ) {
            let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
            prop_assert!(
                DOOR_SWING.local(lo, Easing::EaseInOut) <= DOOR_SWING.local(hi, Easing::EaseInOut)
            );
        }
    }
}
