use std::fmt;

use glam::{Quat, Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::frame::{Basis, CameraFrame, MIN_POI_DISTANCE_FACTOR};

/// Degrees of rotation for a drag spanning the whole window.
pub const DEGREES_PER_DRAG_FRACTION: f32 = 150.0;

/// Fraction of `motion_speed` moved per scroll tick.
pub const SCROLL_STEP: f32 = 0.02;

/// Which manipulator currently drives the camera.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ManipulatorMode {
    /// Orbit around the point of interest.
    Inspect,
    /// Free first-person movement.
    #[default]
    Fly,
}

impl fmt::Display for ManipulatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inspect => write!(f, "Inspect Mode"),
            Self::Fly => write!(f, "Fly Mode"),
        }
    }
}

/// Input sensitivities shared by both manipulators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManipulatorTuning {
    /// Degrees of rotation per window-sized mouse drag.
    pub degrees_per_drag: f32,
    /// Fraction of `motion_speed` moved per scroll unit.
    pub scroll_step: f32,
}

impl Default for ManipulatorTuning {
    fn default() -> Self {
        Self {
            degrees_per_drag: DEGREES_PER_DRAG_FRACTION,
            scroll_step: SCROLL_STEP,
        }
    }
}

/// Half-space the inspect orbit may not leave: eye positions whose height
/// along `axis` drops below `min_height` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundFloor {
    /// Direction heights are measured along (normally world up).
    pub axis: Vec3,
    /// Lowest allowed height of the eye.
    pub min_height: f32,
}

impl GroundFloor {
    /// Whether `eye` lies below the floor.
    ///
    /// `axis` need not be unit length; heights are measured along its
    /// direction. A zero axis describes no floor and rejects nothing.
    pub fn rejects(&self, eye: Vec3) -> bool {
        self.axis
            .try_normalize()
            .is_some_and(|axis| eye.dot(axis) < self.min_height)
    }
}

impl Default for GroundFloor {
    fn default() -> Self {
        Self {
            axis: Vec3::Y,
            min_height: 0.01,
        }
    }
}

/// Operations shared by the inspect and fly manipulators.
///
/// Every method mutates the shared [`CameraFrame`] and returns `true` if it
/// actually changed it.
pub trait CameraManipulator {
    /// Sensitivities used by the mouse helpers.
    fn tuning(&self) -> &ManipulatorTuning;

    /// Move along the view axis; positive steps move backwards.
    fn move_along_view(&self, frame: &mut CameraFrame, step: f32) -> bool;

    /// Move along the right axis.
    fn move_lateral(&self, frame: &mut CameraFrame, step: f32) -> bool;

    /// Yaw about the camera's up axis and pitch about its right axis, in
    /// degrees. Positive yaw turns right, positive pitch looks down.
    fn rotate(
        &self,
        frame: &mut CameraFrame,
        yaw_degrees: f32,
        pitch_degrees: f32,
    ) -> bool;

    /// Translate the eye by a world-space vector.
    fn strafe(&self, frame: &mut CameraFrame, delta: Vec3) -> bool {
        frame.position += delta;
        frame.modified = true;
        true
    }

    /// Translate the eye in screen space (`+x` right, `+y` down).
    fn strafe_screen(&self, frame: &mut CameraFrame, delta: Vec2) -> bool {
        let world = delta.x * frame.basis.vx - delta.y * frame.basis.vy;
        self.strafe(frame, world)
    }

    /// Rotate by a drag expressed as a fraction of the window size.
    fn mouse_drag_left(&self, frame: &mut CameraFrame, delta: Vec2) -> bool {
        let scale = self.tuning().degrees_per_drag;
        self.rotate(frame, delta.x * scale, delta.y * scale)
    }

    /// Move along the view axis by a scroll amount.
    fn mouse_scroll(&self, frame: &mut CameraFrame, delta: f32) -> bool {
        let step = delta * frame.motion_speed * self.tuning().scroll_step;
        self.move_along_view(frame, step)
    }

    /// Snap back to the orientation last set on the frame.
    fn reset(&self, frame: &mut CameraFrame) -> bool {
        frame.reset_orientation();
        true
    }
}

/// Compose `yaw ∘ pitch` onto `basis`. Angles are negated so that dragging
/// right turns the view right. The result is re-orthonormalized so the
/// frame stays rigid even when re-leveling is off.
fn yaw_pitch(basis: Basis, yaw_degrees: f32, pitch_degrees: f32) -> Basis {
    let yaw = Quat::from_axis_angle(basis.vy, -yaw_degrees.to_radians());
    let pitch = Quat::from_axis_angle(basis.vx, -pitch_degrees.to_radians());
    basis.rotated(yaw * pitch).orthonormalized()
}

// ─────────────────────────────────────────────────────────────────────────────
// Inspect
// ─────────────────────────────────────────────────────────────────────────────

/// Orbits the eye around the point of interest.
///
/// - rotation keeps the point of interest fixed and moves the eye on a
///   sphere around it
/// - moving changes the orbit radius, never closer than
///   `min_distance_factor * motion_speed`
/// - orbits that would take the eye below the [`GroundFloor`] are refused
#[derive(Debug, Clone, PartialEq)]
pub struct InspectManipulator {
    tuning: ManipulatorTuning,
    min_distance_factor: f32,
    ground_floor: Option<GroundFloor>,
}

impl Default for InspectManipulator {
    fn default() -> Self {
        Self::new(
            ManipulatorTuning::default(),
            MIN_POI_DISTANCE_FACTOR,
            Some(GroundFloor::default()),
        )
    }
}

impl InspectManipulator {
    /// Create an inspect manipulator.
    ///
    /// A non-finite or non-positive `min_distance_factor` falls back to
    /// [`MIN_POI_DISTANCE_FACTOR`], so the orbit radius stays positive.
    pub fn new(
        tuning: ManipulatorTuning,
        min_distance_factor: f32,
        ground_floor: Option<GroundFloor>,
    ) -> Self {
        let min_distance_factor =
            if min_distance_factor.is_finite() && min_distance_factor > 0.0 {
                min_distance_factor
            } else {
                log::warn!(
                    "invalid min distance factor {min_distance_factor}, \
                     using {MIN_POI_DISTANCE_FACTOR}"
                );
                MIN_POI_DISTANCE_FACTOR
            };
        Self {
            tuning,
            min_distance_factor,
            ground_floor,
        }
    }

    /// The floor the orbit may not cross, if any.
    pub fn ground_floor(&self) -> Option<GroundFloor> {
        self.ground_floor
    }

    /// Closest allowed orbit radius for `frame`.
    pub fn min_distance(&self, frame: &CameraFrame) -> f32 {
        self.min_distance_factor * frame.motion_speed
    }
}

impl CameraManipulator for InspectManipulator {
    fn tuning(&self) -> &ManipulatorTuning {
        &self.tuning
    }

    fn move_along_view(&self, frame: &mut CameraFrame, step: f32) -> bool {
        let poi = frame.point_of_interest();
        frame.poi_distance =
            (frame.poi_distance - step).max(self.min_distance(frame));
        frame.position = poi + frame.poi_distance * frame.basis.vz;
        frame.modified = true;
        true
    }

    fn move_lateral(&self, _frame: &mut CameraFrame, _step: f32) -> bool {
        false
    }

    fn rotate(
        &self,
        frame: &mut CameraFrame,
        yaw_degrees: f32,
        pitch_degrees: f32,
    ) -> bool {
        let poi = frame.point_of_interest();
        let candidate = yaw_pitch(frame.basis, yaw_degrees, pitch_degrees);
        let eye = poi + frame.poi_distance * candidate.vz;

        if self.ground_floor.is_some_and(|floor| floor.rejects(eye)) {
            log::trace!("inspect orbit rejected: eye {eye} below ground floor");
            return false;
        }

        if frame.force_up {
            let _ = frame.force_up_frame();
        }
        frame.basis = candidate;
        if frame.force_up {
            let _ = frame.force_up_frame();
        }
        frame.position = eye;
        frame.modified = true;
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fly
// ─────────────────────────────────────────────────────────────────────────────

/// First-person camera: rotation turns the view around the eye, moves
/// translate the eye along the camera axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlyManipulator {
    tuning: ManipulatorTuning,
}

impl FlyManipulator {
    /// Create a fly manipulator.
    pub fn new(tuning: ManipulatorTuning) -> Self {
        Self { tuning }
    }
}

impl CameraManipulator for FlyManipulator {
    fn tuning(&self) -> &ManipulatorTuning {
        &self.tuning
    }

    fn move_along_view(&self, frame: &mut CameraFrame, step: f32) -> bool {
        frame.position += step * frame.basis.vz;
        frame.modified = true;
        true
    }

    fn move_lateral(&self, frame: &mut CameraFrame, step: f32) -> bool {
        frame.position += step * frame.basis.vx;
        frame.modified = true;
        true
    }

    fn rotate(
        &self,
        frame: &mut CameraFrame,
        yaw_degrees: f32,
        pitch_degrees: f32,
    ) -> bool {
        frame.basis = yaw_pitch(frame.basis, yaw_degrees, pitch_degrees);
        if frame.force_up {
            let _ = frame.force_up_frame();
        }
        frame.modified = true;
        true
    }
}
