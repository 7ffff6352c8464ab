use glam::{Vec2, Vec3};

use crate::camera::frame::{CameraFrame, CameraPose};
use crate::camera::manipulator::{
    CameraManipulator, FlyManipulator, InspectManipulator, ManipulatorMode,
    ManipulatorTuning,
};
use crate::options::CameraOptions;

/// Owns the camera frame and both manipulators for a viewing session.
///
/// Exactly one manipulator is active at a time. Switching modes only
/// changes which one receives the calls below; both act on the same
/// [`CameraFrame`].
pub struct CameraController {
    frame: CameraFrame,
    inspect: InspectManipulator,
    fly: FlyManipulator,
    mode: ManipulatorMode,
    key_move_step: f32,
    key_rotate_degrees: f32,
}

impl CameraController {
    /// Build a controller from camera options, setting the initial
    /// orientation from `eye`, `target` and `up`.
    pub fn new(options: &CameraOptions) -> Self {
        let tuning = ManipulatorTuning {
            degrees_per_drag: options.degrees_per_drag,
            scroll_step: options.scroll_step,
        };

        let mut frame = CameraFrame::new(options.world_scale);
        frame.set_force_up(options.force_up);
        frame.set_orientation(
            Vec3::from(options.eye),
            Vec3::from(options.target),
            Vec3::from(options.up),
        );

        Self {
            frame,
            inspect: InspectManipulator::new(
                tuning,
                options.min_distance_factor,
                options.ground_floor(),
            ),
            fly: FlyManipulator::new(tuning),
            mode: options.initial_mode,
            key_move_step: options.key_move_step,
            key_rotate_degrees: options.key_rotate_degrees,
        }
    }

    /// Build a controller with default options looking from `eye` at
    /// `target`, with translation speed derived from `world_scale`.
    pub fn looking_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        world_scale: f32,
    ) -> Self {
        Self::new(&CameraOptions {
            eye: eye.to_array(),
            target: target.to_array(),
            up: up.to_array(),
            world_scale,
            ..CameraOptions::default()
        })
    }

    /// Read-only access to the camera frame.
    pub fn frame(&self) -> &CameraFrame {
        &self.frame
    }

    /// The active manipulator mode.
    pub fn mode(&self) -> ManipulatorMode {
        self.mode
    }

    /// Current eye, point of interest and up vector.
    pub fn pose(&self) -> CameraPose {
        self.frame.pose()
    }

    /// Whether the pose changed since it was last taken.
    pub fn is_modified(&self) -> bool {
        self.frame.is_modified()
    }

    /// Return the pose if it changed since the last call, clearing the
    /// dirty flag.
    pub fn take_modified(&mut self) -> Option<CameraPose> {
        self.frame.take_modified().then(|| self.frame.pose())
    }

    /// Translation per frame while a movement key is held.
    pub fn key_move_distance(&self) -> f32 {
        self.frame.motion_speed() * self.key_move_step
    }

    /// Degrees turned per press of a look key.
    pub fn key_rotate_degrees(&self) -> f32 {
        self.key_rotate_degrees
    }

    /// Hand control to the fly manipulator.
    pub fn enable_fly_mode(&mut self) {
        log::debug!("entering fly mode");
        self.mode = ManipulatorMode::Fly;
    }

    /// Re-center the view through the current manipulator, then hand
    /// control to the inspect manipulator.
    pub fn enable_inspect_mode(&mut self) {
        log::debug!("entering inspect mode");
        let _ = self.reset();
        self.mode = ManipulatorMode::Inspect;
    }

    /// Switch to `mode` using the same rules as the dedicated entry points.
    pub fn set_mode(&mut self, mode: ManipulatorMode) {
        match mode {
            ManipulatorMode::Inspect => self.enable_inspect_mode(),
            ManipulatorMode::Fly => self.enable_fly_mode(),
        }
    }

    /// Replace the initial orientation and apply it.
    pub fn set_orientation(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.frame.set_orientation(eye, target, up);
    }

    /// Replace the up reference and re-level the frame against it.
    pub fn set_up_vector(&mut self, up: Vec3) -> bool {
        self.frame.set_up_vector(up)
    }

    fn with_active<R>(
        &mut self,
        f: impl FnOnce(&dyn CameraManipulator, &mut CameraFrame) -> R,
    ) -> R {
        let manipulator: &dyn CameraManipulator = match self.mode {
            ManipulatorMode::Inspect => &self.inspect,
            ManipulatorMode::Fly => &self.fly,
        };
        f(manipulator, &mut self.frame)
    }

    /// See [`CameraManipulator::move_along_view`].
    pub fn move_along_view(&mut self, step: f32) -> bool {
        self.with_active(|m, frame| m.move_along_view(frame, step))
    }

    /// See [`CameraManipulator::move_lateral`].
    pub fn move_lateral(&mut self, step: f32) -> bool {
        self.with_active(|m, frame| m.move_lateral(frame, step))
    }

    /// See [`CameraManipulator::rotate`].
    pub fn rotate(&mut self, yaw_degrees: f32, pitch_degrees: f32) -> bool {
        self.with_active(|m, frame| m.rotate(frame, yaw_degrees, pitch_degrees))
    }

    /// See [`CameraManipulator::strafe`].
    pub fn strafe(&mut self, delta: Vec3) -> bool {
        self.with_active(|m, frame| m.strafe(frame, delta))
    }

    /// See [`CameraManipulator::strafe_screen`].
    pub fn strafe_screen(&mut self, delta: Vec2) -> bool {
        self.with_active(|m, frame| m.strafe_screen(frame, delta))
    }

    /// See [`CameraManipulator::mouse_drag_left`].
    pub fn mouse_drag_left(&mut self, delta: Vec2) -> bool {
        self.with_active(|m, frame| m.mouse_drag_left(frame, delta))
    }

    /// See [`CameraManipulator::mouse_scroll`].
    pub fn mouse_scroll(&mut self, delta: f32) -> bool {
        self.with_active(|m, frame| m.mouse_scroll(frame, delta))
    }

    /// See [`CameraManipulator::reset`].
    pub fn reset(&mut self) -> bool {
        self.with_active(|m, frame| m.reset(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn controller() -> CameraController {
        let mut camera = CameraController::looking_at(
            Vec3::new(-5.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            1.0,
        );
        let _ = camera.take_modified();
        camera
    }

    #[test]
    fn starts_in_configured_mode() {
        assert_eq!(controller().mode(), ManipulatorMode::Fly);

        let camera = CameraController::new(&CameraOptions {
            initial_mode: ManipulatorMode::Inspect,
            ..CameraOptions::default()
        });
        assert_eq!(camera.mode(), ManipulatorMode::Inspect);
    }

    #[test]
    fn fly_to_inspect_resets_the_view() {
        let mut camera = controller();
        let start = camera.pose();

        assert!(camera.rotate(60.0, -20.0));
        assert!(camera.move_along_view(-4.0));
        assert!(camera.move_lateral(2.5));
        assert!(!camera.pose().eye.abs_diff_eq(start.eye, EPS));

        camera.enable_inspect_mode();
        assert_eq!(camera.mode(), ManipulatorMode::Inspect);
        let pose = camera.pose();
        assert!(pose.eye.abs_diff_eq(start.eye, EPS));
        assert!(pose
            .point_of_interest
            .abs_diff_eq(start.point_of_interest, EPS));
    }

    #[test]
    fn entering_fly_keeps_the_view() {
        let mut camera = controller();
        camera.enable_inspect_mode();
        assert!(camera.rotate(25.0, 10.0));
        let orbited = camera.pose();

        camera.enable_fly_mode();
        assert_eq!(camera.mode(), ManipulatorMode::Fly);
        assert_eq!(camera.pose(), orbited);
    }

    #[test]
    fn calls_dispatch_to_active_manipulator() {
        let mut camera = controller();
        camera.enable_inspect_mode();
        assert!(!camera.move_lateral(1.0));

        camera.enable_fly_mode();
        assert!(camera.move_lateral(1.0));
    }

    #[test]
    fn take_modified_reports_once() {
        let mut camera = controller();
        assert!(camera.take_modified().is_none());

        assert!(camera.strafe(Vec3::X));
        let eye = camera.take_modified().map(|pose| pose.eye);
        let expected = Vec3::new(-4.0, 0.0, 5.0);
        assert!(eye.is_some_and(|e| e.abs_diff_eq(expected, EPS)));
        assert!(camera.take_modified().is_none());
    }

    #[test]
    fn key_move_distance_scales_with_world() {
        let camera = CameraController::looking_at(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            Vec3::Y,
            200.0,
        );
        assert!((camera.key_move_distance() - 4.0).abs() < EPS);
    }

    #[test]
    fn bad_min_distance_option_keeps_orbit_radius_positive() {
        let mut camera = CameraController::new(&CameraOptions {
            eye: [0.0, 1.0, 5.0],
            target: [0.0, 1.0, 0.0],
            initial_mode: ManipulatorMode::Inspect,
            min_distance_factor: -0.5,
            ..CameraOptions::default()
        });

        assert!(camera.move_along_view(10.0));
        let distance = camera.frame().poi_distance();
        // Default world scale 10 with the fallback factor 0.1.
        assert!((distance - 1.0).abs() < EPS, "distance {distance}");
        assert!(camera
            .pose()
            .point_of_interest
            .abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPS));
    }

    #[test]
    fn rotations_without_force_up_stay_rigid() {
        let mut camera = CameraController::new(&CameraOptions {
            force_up: false,
            ground_floor_enabled: false,
            ..CameraOptions::default()
        });

        for _ in 0..200 {
            assert!(camera.rotate(7.3, 3.1));
        }
        camera.enable_inspect_mode();
        for _ in 0..200 {
            assert!(camera.rotate(-4.9, 6.7));
        }

        let basis = camera.frame().basis();
        for axis in [basis.vx, basis.vy, basis.vz] {
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
        assert!(basis.vx.dot(basis.vy).abs() < 1e-5);
        assert!(basis.vy.dot(basis.vz).abs() < 1e-5);
        assert!(basis.vz.dot(basis.vx).abs() < 1e-5);
    }
}
