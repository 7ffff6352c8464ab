//! Input handling: event types, key actions, and the input processor that
//! turns raw window events into camera manipulation.

/// Platform-agnostic input events.
pub mod event;
/// Bindable camera actions.
pub mod keyboard;
/// Cursor tracking for mouse-look.
pub(crate) mod mouse;
/// Held-key state and per-frame camera updates.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{HeldKeys, InputProcessor};
