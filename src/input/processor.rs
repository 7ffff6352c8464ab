//! Converts raw platform events into camera manipulation.
//!
//! The `InputProcessor` owns all transient input state (held movement keys,
//! the mouse-look modifier, cursor tracking) and the key-binding map. It is
//! the only thing that sits between raw window events and the
//! [`CameraController`].

use std::collections::HashMap;

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::CursorTracker;
use crate::camera::{CameraController, ManipulatorMode};
use crate::options::KeybindingOptions;

/// Which continuous-action keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    /// Move forward.
    pub forward: bool,
    /// Move backward.
    pub backward: bool,
    /// Strafe left.
    pub strafe_left: bool,
    /// Strafe right.
    pub strafe_right: bool,
    /// Mouse-look modifier.
    pub look: bool,
}

impl HeldKeys {
    fn set(&mut self, action: KeyAction, pressed: bool) {
        match action {
            KeyAction::MoveForward => self.forward = pressed,
            KeyAction::MoveBackward => self.backward = pressed,
            KeyAction::StrafeLeft => self.strafe_left = pressed,
            KeyAction::StrafeRight => self.strafe_right = pressed,
            KeyAction::MouseLook => self.look = pressed,
            _ => {}
        }
    }
}

/// Drives a [`CameraController`] from [`InputEvent`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(KeyAction::Quit) = input.handle_event(&mut camera, event) {
///     event_loop.exit();
/// }
///
/// // Once per frame, after all events:
/// input.tick(&mut camera);
/// if let Some(pose) = camera.take_modified() {
///     renderer.set_camera(pose);
/// }
/// ```
pub struct InputProcessor {
    held: HeldKeys,
    /// Physical keys currently down for held actions. Several keys may be
    /// bound to one action; it stays held until all of them are released.
    held_codes: HashMap<String, KeyAction>,
    cursor: CursorTracker,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            held: HeldKeys::default(),
            held_codes: HashMap::new(),
            cursor: CursorTracker::new(),
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Currently held keys.
    #[must_use]
    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// Last reported cursor position in physical pixels.
    #[must_use]
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor.position()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Release every held key, e.g. when the window loses focus and the
    /// matching key-up events will never arrive.
    pub fn release_all(&mut self) {
        self.held = HeldKeys::default();
        self.held_codes.clear();
    }

    /// Apply a discrete input event.
    ///
    /// Returns the bound action when a key press triggered a one-shot
    /// action, so the host can react to actions it owns (such as
    /// [`KeyAction::Quit`]).
    pub fn handle_event(
        &mut self,
        camera: &mut CameraController,
        event: InputEvent,
    ) -> Option<KeyAction> {
        match event {
            InputEvent::Key {
                code,
                pressed,
                repeat,
            } => {
                if repeat {
                    return None;
                }
                // A release applies to whatever the key was bound to when
                // it went down, even if it has been rebound since.
                if !pressed {
                    if let Some(action) = self.held_codes.remove(&code) {
                        self.refresh_held(action);
                        return None;
                    }
                }
                let action = self.key_bindings.lookup(&code)?;
                self.handle_key(camera, code, action, pressed)
            }
            InputEvent::Scroll { delta } => {
                if camera.mode() == ManipulatorMode::Inspect {
                    let _ = camera.mouse_scroll(delta);
                }
                None
            }
            InputEvent::CursorMoved { x, y } => {
                self.cursor.handle_cursor_moved(x, y);
                None
            }
            InputEvent::Resized { width, height } => {
                self.cursor.handle_resize(width, height);
                None
            }
        }
    }

    fn handle_key(
        &mut self,
        camera: &mut CameraController,
        code: String,
        action: KeyAction,
        pressed: bool,
    ) -> Option<KeyAction> {
        if action.is_held() {
            if pressed {
                let _ = self.held_codes.insert(code, action);
            }
            self.refresh_held(action);
            return None;
        }
        if !pressed {
            return None;
        }

        let degrees = camera.key_rotate_degrees();
        let _ = match action {
            KeyAction::EnterFlyMode => {
                camera.enable_fly_mode();
                true
            }
            KeyAction::EnterInspectMode => {
                camera.enable_inspect_mode();
                true
            }
            KeyAction::ResetView => camera.reset(),
            KeyAction::LookLeft => camera.rotate(-degrees, 0.0),
            KeyAction::LookRight => camera.rotate(degrees, 0.0),
            KeyAction::LookUp => camera.rotate(0.0, -degrees),
            KeyAction::LookDown => camera.rotate(0.0, degrees),
            _ => false,
        };
        Some(action)
    }

    /// Recompute whether `action` is held from the keys currently down.
    fn refresh_held(&mut self, action: KeyAction) {
        let down = self.held_codes.values().any(|&held| held == action);
        self.held.set(action, down);
        if action == KeyAction::MouseLook {
            self.cursor.rebase();
        }
    }

    /// Per-frame update: apply held movement keys (fly mode only) and
    /// mouse-look (any mode).
    ///
    /// Returns `true` if the camera was changed.
    pub fn tick(&mut self, camera: &mut CameraController) -> bool {
        let mut changed = false;

        if camera.mode() == ManipulatorMode::Fly {
            let step = camera.key_move_distance();
            if self.held.forward {
                changed |= camera.move_along_view(-step);
            } else if self.held.backward {
                changed |= camera.move_along_view(step);
            }
            if self.held.strafe_left {
                changed |= camera.move_lateral(-step);
            } else if self.held.strafe_right {
                changed |= camera.move_lateral(step);
            }
        }

        let delta = self.cursor.take_normalized_delta();
        if self.held.look {
            changed |= camera.mouse_drag_left(delta);
        }

        changed
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const EPS: f32 = 1e-4;

    fn camera() -> CameraController {
        let mut camera = CameraController::looking_at(
            Vec3::new(0.0, 1.0, 10.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Y,
            50.0,
        );
        let _ = camera.take_modified();
        camera
    }

    fn press(
        input: &mut InputProcessor,
        camera: &mut CameraController,
        code: &str,
    ) -> Option<KeyAction> {
        input.handle_event(camera, InputEvent::key(code, true))
    }

    fn release(
        input: &mut InputProcessor,
        camera: &mut CameraController,
        code: &str,
    ) -> Option<KeyAction> {
        input.handle_event(camera, InputEvent::key(code, false))
    }

    fn resize(
        input: &mut InputProcessor,
        camera: &mut CameraController,
        width: u32,
        height: u32,
    ) {
        let event = InputEvent::Resized { width, height };
        let _ = input.handle_event(camera, event);
    }

    fn move_cursor(
        input: &mut InputProcessor,
        camera: &mut CameraController,
        x: f32,
        y: f32,
    ) {
        let _ = input.handle_event(camera, InputEvent::CursorMoved { x, y });
    }

    #[test]
    fn held_forward_moves_in_fly_mode() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        assert_eq!(press(&mut input, &mut camera, "KeyW"), None);
        assert!(input.held().forward);
        assert!(input.tick(&mut camera));
        // motion speed 50 * 0.02 = 1 unit towards -Z
        assert!(camera.pose().eye.abs_diff_eq(Vec3::new(0.0, 1.0, 9.0), EPS));

        let _ = release(&mut input, &mut camera, "KeyW");
        assert!(!input.tick(&mut camera));
        assert!(camera.pose().eye.abs_diff_eq(Vec3::new(0.0, 1.0, 9.0), EPS));
    }

    #[test]
    fn forward_wins_over_backward() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        let _ = press(&mut input, &mut camera, "KeyW");
        let _ = press(&mut input, &mut camera, "KeyS");
        let _ = press(&mut input, &mut camera, "KeyA");
        let _ = press(&mut input, &mut camera, "KeyD");
        assert!(input.tick(&mut camera));
        assert!(camera.pose().eye.abs_diff_eq(Vec3::new(-1.0, 1.0, 9.0), EPS));
    }

    #[test]
    fn movement_keys_ignored_in_inspect_mode() {
        let mut camera = camera();
        camera.enable_inspect_mode();
        let _ = camera.take_modified();
        let mut input = InputProcessor::new();

        let _ = press(&mut input, &mut camera, "KeyW");
        let _ = press(&mut input, &mut camera, "KeyD");
        assert!(!input.tick(&mut camera));
        assert!(!camera.is_modified());
    }

    #[test]
    fn repeats_are_ignored() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        let event = InputEvent::Key {
            code: "KeyW".into(),
            pressed: true,
            repeat: true,
        };
        assert_eq!(input.handle_event(&mut camera, event), None);
        assert_eq!(input.held(), HeldKeys::default());
    }

    #[test]
    fn mouse_look_only_while_modifier_held() {
        let mut camera = camera();
        let mut input = InputProcessor::new();
        resize(&mut input, &mut camera, 1000, 500);
        move_cursor(&mut input, &mut camera, 100.0, 100.0);

        assert!(!input.tick(&mut camera));
        let start = camera.frame().basis();

        let _ = press(&mut input, &mut camera, "AltLeft");
        move_cursor(&mut input, &mut camera, 200.0, 100.0);
        assert!(input.tick(&mut camera));
        // 100 / 1000 * 150 = 15 degrees of yaw
        let vz = camera.frame().basis().vz;
        let turned = vz.angle_between(start.vz).to_degrees();
        assert!((turned - 15.0).abs() < 1e-2, "turned {turned}");
        assert_eq!(camera.pose().eye, Vec3::new(0.0, 1.0, 10.0));
    }

    #[test]
    fn look_press_rebases_cursor() {
        let mut camera = camera();
        let mut input = InputProcessor::new();
        resize(&mut input, &mut camera, 800, 600);

        // Large jump while mouse-look is off must not turn the camera later.
        move_cursor(&mut input, &mut camera, 700.0, 500.0);
        let _ = press(&mut input, &mut camera, "AltLeft");
        let _ = input.tick(&mut camera);
        assert!(camera
            .frame()
            .basis()
            .vz
            .abs_diff_eq(Vec3::Z, EPS));
    }

    #[test]
    fn scroll_only_in_inspect_mode() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        let scroll = InputEvent::Scroll { delta: 3.0 };
        let _ = input.handle_event(&mut camera, scroll.clone());
        assert!(!camera.is_modified());

        camera.enable_inspect_mode();
        let before = camera.frame().poi_distance();
        let _ = input.handle_event(&mut camera, scroll);
        // 3 * 50 * 0.02 = 3 units closer
        assert!((camera.frame().poi_distance() - (before - 3.0)).abs() < EPS);
    }

    #[test]
    fn mode_keys_switch_manipulators() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        let _ = press(&mut input, &mut camera, "KeyW");
        let _ = input.tick(&mut camera);
        assert_eq!(
            press(&mut input, &mut camera, "KeyI"),
            Some(KeyAction::EnterInspectMode)
        );
        assert_eq!(camera.mode(), ManipulatorMode::Inspect);
        assert!(camera.pose().eye.abs_diff_eq(Vec3::new(0.0, 1.0, 10.0), EPS));

        assert_eq!(
            press(&mut input, &mut camera, "KeyF"),
            Some(KeyAction::EnterFlyMode)
        );
        assert_eq!(camera.mode(), ManipulatorMode::Fly);
        assert_eq!(release(&mut input, &mut camera, "KeyF"), None);
    }

    #[test]
    fn look_keys_rotate_by_key_step() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        assert_eq!(
            press(&mut input, &mut camera, "ArrowRight"),
            Some(KeyAction::LookRight)
        );
        let view = -camera.frame().basis().vz;
        let turned = view.angle_between(Vec3::NEG_Z).to_degrees();
        assert!((turned - 10.0).abs() < 1e-2);
        assert!(view.x > 0.0);
    }

    #[test]
    fn quit_is_reported_to_host() {
        let mut camera = camera();
        let mut input = InputProcessor::new();
        assert_eq!(
            press(&mut input, &mut camera, "Escape"),
            Some(KeyAction::Quit)
        );
        assert!(!camera.is_modified());
    }

    #[test]
    fn unbound_keys_and_release_all() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        assert_eq!(press(&mut input, &mut camera, "KeyZ"), None);
        let _ = press(&mut input, &mut camera, "KeyA");
        let _ = press(&mut input, &mut camera, "AltLeft");
        input.release_all();
        assert_eq!(input.held(), HeldKeys::default());
    }

    #[test]
    fn shared_binding_held_until_every_key_released() {
        let mut camera = camera();
        let mut bindings = KeybindingOptions::default();
        let _ = bindings.bind("ArrowUp", KeyAction::MoveForward);
        let mut input = InputProcessor::with_key_bindings(bindings);

        let _ = press(&mut input, &mut camera, "KeyW");
        let _ = press(&mut input, &mut camera, "ArrowUp");
        let _ = release(&mut input, &mut camera, "KeyW");
        assert!(input.held().forward);
        assert!(input.tick(&mut camera));

        let _ = release(&mut input, &mut camera, "ArrowUp");
        assert!(!input.held().forward);
        let _ = camera.take_modified();
        assert!(!input.tick(&mut camera));
    }

    #[test]
    fn release_after_rebind_clears_original_action() {
        let mut camera = camera();
        let mut input = InputProcessor::new();

        let _ = press(&mut input, &mut camera, "KeyW");
        let _ = input
            .key_bindings_mut()
            .bind("KeyW", KeyAction::StrafeLeft);
        let _ = release(&mut input, &mut camera, "KeyW");
        assert_eq!(input.held(), HeldKeys::default());

        let _ = press(&mut input, &mut camera, "AltLeft");
        assert!(input.held().look);
        assert!(input.key_bindings_mut().unbind("AltLeft").is_some());
        assert_eq!(release(&mut input, &mut camera, "AltLeft"), None);
        assert!(!input.held().look);
    }
}
