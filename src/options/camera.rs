use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::frame::MIN_POI_DISTANCE_FACTOR;
use crate::camera::manipulator::{
    GroundFloor, ManipulatorMode, DEGREES_PER_DRAG_FRACTION, SCROLL_STEP,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial view and manipulator sensitivities.
pub struct CameraOptions {
    /// Initial eye position.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Initial point of interest.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// World up reference.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Approximate size of the scene; translation speed is derived from it.
    #[schemars(title = "World Scale", range(min = 0.001), extend("step" = 0.5))]
    pub world_scale: f32,
    /// Re-level the frame against the up vector after every rotation.
    #[schemars(title = "Keep Level")]
    pub force_up: bool,
    /// Manipulator active at startup.
    #[schemars(title = "Initial Mode")]
    pub initial_mode: ManipulatorMode,
    /// Degrees of rotation for a mouse drag across the whole window.
    #[schemars(title = "Drag Sensitivity", range(min = 10.0, max = 720.0), extend("step" = 5.0))]
    pub degrees_per_drag: f32,
    /// Fraction of the world scale moved per scroll line.
    #[schemars(title = "Scroll Speed", range(min = 0.001, max = 0.5), extend("step" = 0.001))]
    pub scroll_step: f32,
    /// Fraction of the world scale moved per frame while a movement key is
    /// held.
    #[schemars(title = "Fly Speed", range(min = 0.001, max = 0.5), extend("step" = 0.001))]
    pub key_move_step: f32,
    /// Degrees turned per press of a look key.
    #[schemars(title = "Key Turn Step", range(min = 1.0, max = 90.0), extend("step" = 1.0))]
    pub key_rotate_degrees: f32,
    /// Closest orbit radius, as a fraction of the world scale.
    #[schemars(skip)]
    pub min_distance_factor: f32,
    /// Refuse inspect orbits that take the eye below the ground floor.
    #[schemars(title = "Ground Floor")]
    pub ground_floor_enabled: bool,
    /// Floor plane used when `ground_floor_enabled` is set.
    #[schemars(skip)]
    pub ground_floor: GroundFloor,
}

impl CameraOptions {
    /// The ground floor, if enabled.
    pub fn ground_floor(&self) -> Option<GroundFloor> {
        self.ground_floor_enabled.then_some(self.ground_floor)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [-5.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            world_scale: 10.0,
            force_up: true,
            initial_mode: ManipulatorMode::Fly,
            degrees_per_drag: DEGREES_PER_DRAG_FRACTION,
            scroll_step: SCROLL_STEP,
            key_move_step: 0.02,
            key_rotate_degrees: 10.0,
            min_distance_factor: MIN_POI_DISTANCE_FACTOR,
            ground_floor_enabled: true,
            ground_floor: GroundFloor::default(),
        }
    }
}
