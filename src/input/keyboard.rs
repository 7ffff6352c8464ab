use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// AltLeft = "mouse_look"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly forward while held.
    MoveForward,
    /// Fly backward while held.
    MoveBackward,
    /// Fly left while held.
    StrafeLeft,
    /// Fly right while held.
    StrafeRight,
    /// Mouse movement rotates the camera while held.
    MouseLook,
    /// Switch to the fly manipulator.
    EnterFlyMode,
    /// Re-center and switch to the inspect manipulator.
    EnterInspectMode,
    /// Restore the initial view.
    ResetView,
    /// Turn left by the keyboard rotation step.
    LookLeft,
    /// Turn right by the keyboard rotation step.
    LookRight,
    /// Tilt up by the keyboard rotation step.
    LookUp,
    /// Tilt down by the keyboard rotation step.
    LookDown,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// Whether the action lasts as long as its key is held, rather than
    /// firing once on press.
    pub fn is_held(self) -> bool {
        matches!(
            self,
            Self::MoveForward
                | Self::MoveBackward
                | Self::StrafeLeft
                | Self::StrafeRight
                | Self::MouseLook
        )
    }
}
