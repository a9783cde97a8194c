// Strong typing over bare floats. Newtypes for timestamps and progress, plain structs for poses.

use std::f32::consts::PI;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_lineup, ProductSpec};
use crate::ease::Easing;
use crate::error::EngineError;
use crate::phase::{PhaseWindow, DOOR_SWING};

/// Monotonic timestamp in microseconds. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_micros(us: u64) -> Self {
        Timestamp(us)
    }

    /// From a fractional millisecond reading such as `performance.now()`.
    /// Negative and NaN readings map to zero.
    pub fn from_millis_f64(ms: f64) -> Self {
        if ms.is_nan() || ms <= 0.0 {
            return Timestamp(0);
        }
        Timestamp((ms * 1000.0).round() as u64)
    }

    pub fn from_secs_f64(secs: f64) -> Self {
        Self::from_millis_f64(secs * 1000.0)
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }

    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub fn as_secs(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Seconds elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn secs_since(&self, earlier: Timestamp) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / 1_000_000.0
    }
}

/// Overall eased animation position, always within [0, 1].
///
/// Deserialization goes through [`Progress::new`], so out-of-range JSON is clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(from = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamps into [0, 1]; NaN becomes 0.
    pub fn new(value: f64) -> Self {
        Progress(crate::ease::clamp_unit(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Progress::new(value)
    }
}

/// Scene-space vector (x right, y up, z toward the viewer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

pub const MIN_UI_DURATION_SECS: f64 = 8.0;
pub const MAX_UI_DURATION_SECS: f64 = 40.0;
pub const DEFAULT_DURATION_SECS: f64 = 16.0;

/// Full motion configuration, usually parsed from JSON handed over by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_duration")]
    pub duration_secs: f64,
    /// Master curve applied to raw elapsed/duration.
    #[serde(default)]
    pub easing: Easing,
    /// Curve applied inside every phase window.
    #[serde(default)]
    pub window_easing: Easing,
    #[serde(default = "default_crossfade_window")]
    pub crossfade_window: PhaseWindow,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub doors: DoorSettings,
    #[serde(default = "default_lineup")]
    pub products: Vec<ProductSpec>,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECS
}

fn default_crossfade_window() -> PhaseWindow {
    DOOR_SWING
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            duration_secs: DEFAULT_DURATION_SECS,
            easing: Easing::EaseInOut,
            window_easing: Easing::EaseInOut,
            crossfade_window: DOOR_SWING,
            camera: CameraSettings::default(),
            doors: DoorSettings::default(),
            products: default_lineup(),
        }
    }
}

impl MotionConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: MotionConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks what serde cannot: duration sign and per-item numeric sanity.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            log::warn!("rejecting duration {}", self.duration_secs);
            return Err(EngineError::InvalidDuration(self.duration_secs));
        }
        for product in &self.products {
            if !(product.rise_height.is_finite() && product.rise_height >= 0.0) {
                log::warn!("rejecting product {:?}", product.title);
                return Err(EngineError::InvalidConfig(format!(
                    "product '{}' has invalid rise height {}",
                    product.title, product.rise_height
                )));
            }
        }
        Ok(())
    }

    /// Reads the duration field the way the page's number input does: leading
    /// integer, 16 when empty or unparsable, then clamped into the UI range.
    /// Digit strings too long for `i64` saturate to the nearest UI bound.
    pub fn duration_from_input(input: &str) -> f64 {
        let trimmed = input.trim();
        let digits_end = trimmed
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
            .map_or(trimmed.len(), |(i, _)| i);
        let parsed = match trimmed[..digits_end].parse::<i64>() {
            Ok(v) => v as f64,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => MAX_UI_DURATION_SECS,
                IntErrorKind::NegOverflow => MIN_UI_DURATION_SECS,
                _ => DEFAULT_DURATION_SECS,
            },
        };
        parsed.clamp(MIN_UI_DURATION_SECS, MAX_UI_DURATION_SECS)
    }
}

/// Camera dolly endpoints. The rig interpolates across the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    #[serde(default = "default_camera_from")]
    pub from_position: Vec3,
    #[serde(default = "default_camera_to")]
    pub to_position: Vec3,
    #[serde(default = "default_look_at")]
    pub look_at: Vec3,
}

fn default_camera_from() -> Vec3 {
    Vec3::new(0.0, 0.1, 4.0)
}

fn default_camera_to() -> Vec3 {
    Vec3::new(0.0, 0.25, -0.8)
}

fn default_look_at() -> Vec3 {
    Vec3::new(0.0, 0.0, -0.5)
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            from_position: default_camera_from(),
            to_position: default_camera_to(),
            look_at: default_look_at(),
        }
    }
}

/// Double-door geometry. Left door mirrors the right one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorSettings {
    /// Full swing in radians about the vertical axis.
    #[serde(default = "default_swing")]
    pub swing: f32,
    /// Distance of each door from the center line when closed.
    #[serde(default = "default_closed_x")]
    pub closed_x: f32,
    /// Distance of each door from the center line when fully open.
    #[serde(default = "default_open_x")]
    pub open_x: f32,
}

fn default_swing() -> f32 {
    PI / 1.7
}

fn default_closed_x() -> f32 {
    1.4
}

fn default_open_x() -> f32 {
    1.6
}

impl Default for DoorSettings {
    fn default() -> Self {
        DoorSettings {
            swing: default_swing(),
            closed_x: default_closed_x(),
            open_x: default_open_x(),
        }
    }
}

/// Which background layers the asset pipeline has delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssetReadiness {
    pub exterior: bool,
    pub interior: bool,
}

impl AssetReadiness {
    /// Both background images present. Starting state of every entry point.
    pub const ALL_PRESENT: AssetReadiness = AssetReadiness {
        exterior: true,
        interior: true,
    };

    /// Playback and recording only make sense once both images exist.
    pub fn can_start(&self) -> bool {
        self.exterior && self.interior
    }

    /// Hides any layer whose image is missing.
    pub fn apply(&self, params: &mut MotionParameters) {
        if !self.exterior {
            params.crossfade.exterior_opacity = 0.0;
        }
        if !self.interior {
            params.crossfade.interior_opacity = 0.0;
        }
    }
}

/// Camera transform for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Opacities of the two overlaid background planes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossfade {
    pub exterior_opacity: f32,
    pub interior_opacity: f32,
}

/// One door leaf: rotation about y and horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorPose {
    pub rotation_y: f32,
    pub position_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorPair {
    pub left: DoorPose,
    pub right: DoorPose,
}

/// A product's placement for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPose {
    /// Index into the configured lineup.
    pub index: usize,
    /// Vertical rise above the anchor, in [0, rise_height].
    pub offset_y: f32,
    /// Anchor with the rise applied.
    pub position: Vec3,
    /// Where the floating price label sits; rides along with the rise.
    pub label_position: Vec3,
}

/// Everything the presentation adapter needs to pose the scene for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionParameters {
    pub progress: Progress,
    pub camera: CameraPose,
    pub crossfade: Crossfade,
    pub doors: DoorPair,
    pub items: Vec<ItemPose>,
}
