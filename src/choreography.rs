// Choreography resolver: one progress value in, one frame of motion parameters out.
// Pure and deterministic; the same progress always yields bit-identical output.

use crate::catalog::{PriceLabel, ProductSpec};
use crate::ease::{lerp, Easing};
use crate::phase::{PhaseWindow, CAMERA_APPROACH};
use crate::types::*;

/// Resolves the fixed window table against overall progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    camera: CameraSettings,
    doors: DoorSettings,
    crossfade_window: PhaseWindow,
    window_easing: Easing,
    products: Vec<ProductSpec>,
}

impl Choreography {
    pub fn new(config: &MotionConfig) -> Self {
        Choreography {
            camera: config.camera.clone(),
            doors: config.doors.clone(),
            crossfade_window: config.crossfade_window,
            window_easing: config.window_easing,
            products: config.products.clone(),
        }
    }

    pub fn products(&self) -> &[ProductSpec] {
        &self.products
    }

    pub fn labels(&self) -> Vec<PriceLabel> {
        self.products.iter().map(ProductSpec::label).collect()
    }

    /// Motion parameters for `progress`.
    pub fn resolve(&self, progress: Progress) -> MotionParameters {
        let p = progress.value();
        let door_t = self.crossfade_window.local(p, self.window_easing) as f32;

        MotionParameters {
            progress,
            camera: self.camera_pose(p),
            crossfade: Crossfade {
                exterior_opacity: 1.0 - door_t,
                interior_opacity: door_t,
            },
            doors: self.door_pair(door_t),
            items: self
                .products
                .iter()
                .enumerate()
                .map(|(index, product)| self.item_pose(index, product, p))
                .collect(),
        }
    }

    fn camera_pose(&self, p: f64) -> CameraPose {
        // The master curve already eased `p`; the camera follows it linearly.
        let t = CAMERA_APPROACH.raw_local(p) as f32;
        let from = self.camera.from_position;
        let to = self.camera.to_position;
        CameraPose {
            position: Vec3::new(
                lerp(from.x, to.x, t),
                lerp(from.y, to.y, t),
                lerp(from.z, to.z, t),
            ),
            look_at: self.camera.look_at,
        }
    }

    fn door_pair(&self, t: f32) -> DoorPair {
        let swing = lerp(0.0, self.doors.swing, t);
        let x = lerp(self.doors.closed_x, self.doors.open_x, t);
        DoorPair {
            left: DoorPose {
                rotation_y: swing,
                position_x: -x,
            },
            right: DoorPose {
                rotation_y: -swing,
                position_x: x,
            },
        }
    }

    fn item_pose(&self, index: usize, product: &ProductSpec, p: f64) -> ItemPose {
        let local = product.window.local(p, self.window_easing) as f32;
        let offset_y = local * product.rise_height;
        let anchor = product.anchor;
        let position = Vec3::new(anchor.x, anchor.y + offset_y, anchor.z);
        ItemPose {
            index,
            offset_y,
            position,
            label_position: Vec3::new(
                position.x,
                position.y + product.label_offset,
                position.z,
            ),
        }
    }
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new(&MotionConfig::default())
    }
}
