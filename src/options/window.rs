use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Host window parameters for the standalone viewer.
pub struct WindowOptions {
    /// Window title; the active mode and frame rate are appended.
    #[schemars(skip)]
    pub title: String,
    /// Initial inner width in logical pixels.
    #[schemars(title = "Width", range(min = 64))]
    pub width: u32,
    /// Initial inner height in logical pixels.
    #[schemars(title = "Height", range(min = 64))]
    pub height: u32,
    /// Frame rate cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(max = 240))]
    pub target_fps: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "viewcam".into(),
            width: 1200,
            height: 800,
            target_fps: 0,
        }
    }
}
