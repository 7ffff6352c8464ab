//! Orthonormal camera frame with point-of-interest tracking.
//!
//! The frame stores the camera's right/up/backward axes (`vx`, `vy`, `vz`)
//! in world space. The camera looks down `-vz`; the point of interest sits
//! `poi_distance` units along that direction.

use glam::{Mat4, Quat, Vec3, Vec4};

/// Squared cross-product length under which `up` counts as parallel to the
/// view axis when deriving a frame.
const DEGENERATE_CROSS_SQ: f32 = 1e-8;

/// How close `|dot(vz, up)|` may get to 1 before re-leveling is skipped.
const LEVEL_TOLERANCE: f32 = 1e-6;

/// Fraction of `motion_speed` below which the point-of-interest distance
/// is not allowed to shrink.
pub const MIN_POI_DISTANCE_FACTOR: f32 = 0.1;

/// Right (`vx`), up (`vy`) and backward (`vz`) camera axes in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Camera-space right.
    pub vx: Vec3,
    /// Camera-space up.
    pub vy: Vec3,
    /// Camera-space backward; the view direction is `-vz`.
    pub vz: Vec3,
}

impl Basis {
    /// World-aligned basis: right `+X`, up `+Y`, backward `+Z`.
    pub const IDENTITY: Self = Self {
        vx: Vec3::X,
        vy: Vec3::Y,
        vz: Vec3::Z,
    };

    /// Apply `rotation` to all three axes.
    #[must_use]
    pub fn rotated(self, rotation: Quat) -> Self {
        Self {
            vx: rotation * self.vx,
            vy: rotation * self.vy,
            vz: rotation * self.vz,
        }
    }

    /// Rebuild a right-handed orthonormal basis around `vz`, keeping `vy`
    /// as close to its current direction as possible.
    ///
    /// Composing many rotations in `f32` lets the axes drift off unit
    /// length; this pulls them back.
    #[must_use]
    pub fn orthonormalized(self) -> Self {
        let vz = self.vz.normalize();
        let vx = self.vy.cross(vz).normalize();
        let vy = vz.cross(vx);
        Self { vx, vy, vz }
    }

    /// Derive the basis of a camera at `origin` looking at `interest`.
    ///
    /// Coincident points look down `-Z`. When `up` is parallel to the view
    /// axis the right axis falls back to `+Y` (or `+X` if that is parallel
    /// too) and is then re-orthogonalized.
    fn looking_at(origin: Vec3, interest: Vec3, up: Vec3) -> Self {
        let vz = if coincident(origin, interest) {
            Vec3::Z
        } else {
            -(interest - origin).normalize()
        };

        let right = up.cross(vz);
        if right.length_squared() >= DEGENERATE_CROSS_SQ {
            let vx = right.normalize();
            let vy = vz.cross(vx).normalize();
            return Self { vx, vy, vz };
        }

        let y_right = Vec3::Y.cross(vz);
        let fallback = if y_right.length_squared() >= DEGENERATE_CROSS_SQ {
            Vec3::Y
        } else {
            Vec3::X
        };
        let vy = vz.cross(fallback).normalize();
        let vx = vy.cross(vz);
        Self { vx, vy, vz }
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// User-style parameters captured by [`CameraFrame::set_orientation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSnapshot {
    /// Eye position.
    pub origin: Vec3,
    /// Point the camera looks at.
    pub interest: Vec3,
    /// World up reference.
    pub up: Vec3,
}

/// Camera pose as consumed by a renderer: eye, look-at point and up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point of interest the camera faces.
    pub point_of_interest: Vec3,
    /// World-space up reference.
    pub up: Vec3,
}

/// The camera's position, orientation and orbit distance.
///
/// Owned by a single [`CameraController`](super::CameraController); the
/// manipulators mutate it in place and raise the `modified` flag, which the
/// renderer clears via [`take_modified`](Self::take_modified).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    pub(crate) basis: Basis,
    pub(crate) position: Vec3,
    /// Distance to the point of interest, e.g. the point inspect mode
    /// orbits around.
    pub(crate) poi_distance: f32,
    pub(crate) up_vector: Vec3,
    /// When set, manipulators re-level the frame against `up_vector`
    /// after every rotation.
    pub(crate) force_up: bool,
    pub(crate) motion_speed: f32,
    pub(crate) modified: bool,
    origin_state: OrientationSnapshot,
}

impl CameraFrame {
    /// Create a frame whose motion speed is derived from `world_scale`.
    ///
    /// Non-finite or non-positive scales fall back to `1.0`.
    pub fn new(world_scale: f32) -> Self {
        let motion_speed = if world_scale.is_finite() && world_scale > 0.0 {
            world_scale
        } else {
            log::warn!("invalid world scale {world_scale}, using 1.0");
            1.0
        };

        let position = Vec3::new(0.0, -1.0, 0.0);
        Self {
            basis: Basis::IDENTITY,
            position,
            poi_distance: 1.0,
            up_vector: Vec3::Y,
            force_up: true,
            motion_speed,
            modified: true,
            origin_state: OrientationSnapshot {
                origin: position,
                interest: position - Vec3::Z,
                up: Vec3::Y,
            },
        }
    }

    /// Re-derive every orientation field from an eye position, a point of
    /// interest and an up vector, and remember them for
    /// [`reset_orientation`](Self::reset_orientation).
    pub fn set_orientation(&mut self, origin: Vec3, interest: Vec3, up: Vec3) {
        self.origin_state = OrientationSnapshot {
            origin,
            interest,
            up,
        };
        self.apply_snapshot();
    }

    /// Restore the pose last passed to
    /// [`set_orientation`](Self::set_orientation).
    pub fn reset_orientation(&mut self) {
        self.apply_snapshot();
    }

    fn apply_snapshot(&mut self) {
        let OrientationSnapshot {
            origin,
            interest,
            up,
        } = self.origin_state;

        self.position = origin;
        self.up_vector = up;
        self.basis = Basis::looking_at(origin, interest, up);
        self.poi_distance = if coincident(origin, interest) {
            MIN_POI_DISTANCE_FACTOR * self.motion_speed
        } else {
            (interest - origin).length()
        };
        self.modified = true;
        let _ = self.force_up_frame();
    }

    /// Tilt the frame around `vz` so that `vy` faces along the up vector.
    ///
    /// Returns `false` without touching the frame when looking (almost)
    /// straight along the up vector, or when the up vector is zero.
    pub fn force_up_frame(&mut self) -> bool {
        let Some(up) = self.up_vector.try_normalize() else {
            return false;
        };
        if 1.0 - self.basis.vz.dot(up).abs() < LEVEL_TOLERANCE {
            return false;
        }

        self.basis.vx = up.cross(self.basis.vz).normalize();
        self.basis.vy = self.basis.vz.cross(self.basis.vx).normalize();
        self.modified = true;
        true
    }

    /// Replace the up reference and re-level against it.
    pub fn set_up_vector(&mut self, up: Vec3) -> bool {
        self.up_vector = up;
        self.force_up_frame()
    }

    /// Enable or disable re-leveling after manipulator rotations.
    pub fn set_force_up(&mut self, force_up: bool) {
        self.force_up = force_up;
    }

    /// The point `poi_distance` units in front of the eye.
    pub fn point_of_interest(&self) -> Vec3 {
        self.position - self.poi_distance * self.basis.vz
    }

    /// Eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current camera axes.
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Distance from the eye to the point of interest.
    pub fn poi_distance(&self) -> f32 {
        self.poi_distance
    }

    /// World up reference.
    pub fn up_vector(&self) -> Vec3 {
        self.up_vector
    }

    /// Whether rotations re-level against the up vector.
    pub fn force_up(&self) -> bool {
        self.force_up
    }

    /// World-space translation per unit of interaction.
    pub fn motion_speed(&self) -> f32 {
        self.motion_speed
    }

    /// Parameters last given to [`set_orientation`](Self::set_orientation).
    pub fn origin_state(&self) -> OrientationSnapshot {
        self.origin_state
    }

    /// Eye, point of interest and up vector.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.position,
            point_of_interest: self.point_of_interest(),
            up: self.up_vector,
        }
    }

    /// World-to-camera transform built directly from the basis, so it stays
    /// valid when the view axis is parallel to the up vector.
    pub fn view_matrix(&self) -> Mat4 {
        let Basis { vx, vy, vz } = self.basis;
        Mat4::from_cols(
            Vec4::new(vx.x, vy.x, vz.x, 0.0),
            Vec4::new(vx.y, vy.y, vz.y, 0.0),
            Vec4::new(vx.z, vy.z, vz.z, 0.0),
            Vec4::new(
                -vx.dot(self.position),
                -vy.dot(self.position),
                -vz.dot(self.position),
                1.0,
            ),
        )
    }

    /// Whether anything changed since the flag was last cleared.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Return the dirty flag and clear it.
    pub fn take_modified(&mut self) -> bool {
        std::mem::replace(&mut self.modified, false)
    }
}

/// Epsilon relative to the magnitude of `value` (`|value| / 2^21`).
pub fn stable_epsilon(value: f32) -> f32 {
    value.abs() * (1.0 / (1 << 21) as f32)
}

/// Largest per-component [`stable_epsilon`] of `v`.
pub fn stable_epsilon_vec(v: Vec3) -> f32 {
    stable_epsilon(v.abs().max_element())
}

/// Whether two points are equal up to round-off at their magnitude.
fn coincident(a: Vec3, b: Vec3) -> bool {
    let tolerance = stable_epsilon_vec(a).max(stable_epsilon_vec(b));
    (b - a).abs().max_element() <= tolerance
}
