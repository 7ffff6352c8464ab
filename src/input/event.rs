/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// tracks held keys and drives the
/// [`CameraController`](crate::camera::CameraController).
///
/// # Example
///
/// ```
/// # use viewcam::input::{InputEvent, InputProcessor};
/// # use viewcam::camera::CameraController;
/// # use glam::Vec3;
/// let eye = Vec3::new(0.0, 1.0, 5.0);
/// let mut camera =
///     CameraController::looking_at(eye, Vec3::ZERO, Vec3::Y, 1.0);
/// let mut input = InputProcessor::new();
/// let _ = input.handle_event(&mut camera, InputEvent::key("KeyW", true));
/// let _ = input.tick(&mut camera);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key changed state.
    Key {
        /// Physical key name in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"AltLeft"`, `"Escape"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Whether this is an auto-repeat of a held key.
        repeat: bool,
    },
    /// Scroll wheel moved (positive = towards the point of interest).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Cursor moved to an absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The window's drawable area changed size.
    Resized {
        /// Width in physical pixels.
        width: u32,
        /// Height in physical pixels.
        height: u32,
    },
}

impl InputEvent {
    /// A non-repeat key transition.
    pub fn key(code: impl Into<String>, pressed: bool) -> Self {
        Self::Key {
            code: code.into(),
            pressed,
            repeat: false,
        }
    }
}
