// Timeline driver: wall-clock origin + duration -> one eased progress value per frame.
// Unstarted until the first tick captures the origin; restarting is an explicit reset.

use crate::ease::{clamp_unit, Easing};
use crate::error::EngineError;
use crate::types::{Progress, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// No origin captured yet.
    Unstarted,
    /// Origin captured; every tick yields progress.
    Running,
}

/// One playback run. Separate runs need separate timelines.
#[derive(Debug, Clone)]
pub struct Timeline {
    duration_secs: f64,
    easing: Easing,
    origin: Option<Timestamp>,
    // High-water mark of raw progress so a clock that steps backwards
    // cannot rewind the run.
    raw: f64,
}

impl Timeline {
    /// Fails fast on a non-positive or non-finite duration.
    pub fn new(duration_secs: f64) -> Result<Self, EngineError> {
        Self::with_easing(duration_secs, Easing::EaseInOut)
    }

    pub fn with_easing(duration_secs: f64, easing: Easing) -> Result<Self, EngineError> {
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Err(EngineError::InvalidDuration(duration_secs));
        }
        Ok(Timeline {
            duration_secs,
            easing,
            origin: None,
            raw: 0.0,
        })
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn state(&self) -> TimelineState {
        match self.origin {
            Some(_) => TimelineState::Running,
            None => TimelineState::Unstarted,
        }
    }

    pub fn origin(&self) -> Option<Timestamp> {
        self.origin
    }

    /// Advance to `now` and return the eased progress for this frame.
    /// The first tick captures `now` as the origin and yields 0.
    pub fn tick(&mut self, now: Timestamp) -> Progress {
        let origin = match self.origin {
            Some(origin) => origin,
            None => {
                log::debug!(
                    "timeline started at {:.3}ms for {}s",
                    now.as_millis(),
                    self.duration_secs
                );
                self.origin = Some(now);
                now
            }
        };

        let was_complete = self.is_complete();
        let raw = clamp_unit(now.secs_since(origin) / self.duration_secs);
        self.raw = self.raw.max(raw);
        if !was_complete && self.is_complete() {
            log::debug!("timeline saturated after {}s", self.duration_secs);
        }
        self.progress()
    }

    /// Eased progress as of the last tick, without advancing.
    pub fn progress(&self) -> Progress {
        Progress::new(self.easing.apply(self.raw))
    }

    pub fn is_complete(&self) -> bool {
        self.raw >= 1.0
    }

    /// Forget the origin. The next tick starts a fresh run.
    pub fn reset(&mut self) {
        self.origin = None;
        self.raw = 0.0;
    }
}
