// hero_motion: choreography engine for the storefront hero-motion clip.
// Time in, motion parameters out. Scene mutation, asset loading and recording stay in JS.

mod catalog;
mod choreography;
mod clock;
mod ease;
mod error;
mod phase;
mod playback;
mod timeline;
mod types;

use wasm_bindgen::prelude::*;

pub use catalog::{default_lineup, format_naira, PriceLabel, ProductSpec};
pub use choreography::Choreography;
pub use clock::{Clock, ManualClock, SystemClock};
pub use ease::{ease_in_out_cubic, Easing};
pub use error::EngineError;
pub use phase::{PhaseWindow, CAMERA_APPROACH, DOOR_SWING};
pub use playback::Playback;
pub use timeline::{Timeline, TimelineState};
pub use types::*;

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(all(feature = "console-log", target_arch = "wasm32"))]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Hero-motion engine exposed to JavaScript.
/// The page passes `performance.now()` each frame; the engine never reads a clock itself.
#[wasm_bindgen]
pub struct HeroMotion {
    timeline: Timeline,
    choreography: Choreography,
    assets: AssetReadiness,
}

#[wasm_bindgen]
impl HeroMotion {
    /// Both background images are assumed present until `set_assets` says otherwise.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<HeroMotion, JsValue> {
        let config = MotionConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::from_config(&config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Motion parameters for the frame rendered at `now_ms`, as JSON.
    /// The first call after construction or `reset` captures the origin.
    pub fn frame_at(&mut self, now_ms: f64) -> Result<String, JsValue> {
        let params = self.params_at(now_ms);
        serde_json::to_string(&params)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Advance to `now_ms` and return only the eased progress.
    pub fn progress_at(&mut self, now_ms: f64) -> f64 {
        self.timeline.tick(Timestamp::from_millis_f64(now_ms)).value()
    }

    /// Resolve an arbitrary progress value without touching the timeline.
    pub fn resolve(&self, progress: f64) -> Result<String, JsValue> {
        let params = self.choreography.resolve(Progress::new(progress));
        serde_json::to_string(&params)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Tell the engine which background images have loaded.
    pub fn set_assets(&mut self, exterior: bool, interior: bool) {
        self.assets = AssetReadiness { exterior, interior };
    }

    pub fn can_start(&self) -> bool {
        self.assets.can_start()
    }

    /// Duration in seconds for the raw text of the page's duration input.
    pub fn duration_from_input(input: &str) -> f64 {
        MotionConfig::duration_from_input(input)
    }

    pub fn reset(&mut self) {
        log::info!("hero motion reset");
        self.timeline.reset();
    }

    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    pub fn duration_secs(&self) -> f64 {
        self.timeline.duration_secs()
    }

    /// Price label text for every product, in lineup order, as JSON.
    pub fn labels(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.choreography.labels())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl HeroMotion {
    /// Both background images are assumed present until `set_assets` says otherwise.
    pub fn from_config(config: &MotionConfig) -> Result<HeroMotion, EngineError> {
        config.validate()?;
        Ok(HeroMotion {
            timeline: Timeline::with_easing(config.duration_secs, config.easing)?,
            choreography: Choreography::new(config),
            assets: AssetReadiness::ALL_PRESENT,
        })
    }

    /// Typed counterpart of [`HeroMotion::frame_at`].
    pub fn params_at(&mut self, now_ms: f64) -> MotionParameters {
        let progress = self.timeline.tick(Timestamp::from_millis_f64(now_ms));
        let mut params = self.choreography.resolve(progress);
        self.assets.apply(&mut params);
        params
    }
}
