// One independent playback run: a timeline, the clock that drives it, and the resolver.

use crate::choreography::Choreography;
use crate::clock::Clock;
use crate::error::EngineError;
use crate::timeline::Timeline;
use crate::types::{AssetReadiness, MotionConfig, MotionParameters, Progress};

/// Frame driver. Call [`Playback::frame`] once per rendered frame.
pub struct Playback<C: Clock> {
    clock: C,
    timeline: Timeline,
    choreography: Choreography,
    assets: AssetReadiness,
}

impl<C: Clock> Playback<C> {
    /// Validates `config` up front; nothing plays if it is rejected.
    /// Both background images are assumed present until [`Playback::set_assets`] says otherwise.
    pub fn new(config: &MotionConfig, clock: C) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Playback {
            clock,
            timeline: Timeline::with_easing(config.duration_secs, config.easing)?,
            choreography: Choreography::new(config),
            assets: AssetReadiness::ALL_PRESENT,
        })
    }

    /// Record which background images are available. Missing layers resolve
    /// to zero opacity.
    pub fn set_assets(&mut self, assets: AssetReadiness) {
        self.assets = assets;
    }

    pub fn assets(&self) -> AssetReadiness {
        self.assets
    }

    /// Sample the clock, advance the timeline and resolve this frame.
    pub fn frame(&mut self) -> MotionParameters {
        let progress = self.timeline.tick(self.clock.now());
        let mut params = self.choreography.resolve(progress);
        self.assets.apply(&mut params);
        params
    }

    /// Progress as of the last frame.
    pub fn progress(&self) -> Progress {
        self.timeline.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    /// Start over. The next frame captures a new origin.
    pub fn restart(&mut self) {
        log::info!("restarting playback ({}s)", self.timeline.duration_secs());
        self.timeline.reset();
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }
}
