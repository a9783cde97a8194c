// Monotonic clock sources. The timeline never reads "now" on its own; callers inject a Clock.

use std::cell::Cell;

use web_time::Instant;

use crate::types::Timestamp;

/// A monotonic time source.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by `web_time::Instant` (`performance.now()` on wasm32).
/// Readings are relative to the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let us = self.epoch.elapsed().as_micros();
        Timestamp::from_micros(u64::try_from(us).unwrap_or(u64::MAX))
    }
}

/// Hand-driven clock for deterministic, replayable runs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        ManualClock {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, ts: Timestamp) {
        self.now.set(ts);
    }

    pub fn advance_secs(&self, secs: f64) {
        let step = Timestamp::from_secs_f64(secs).as_micros();
        let next = self.now.get().as_micros().saturating_add(step);
        self.now.set(Timestamp::from_micros(next));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
