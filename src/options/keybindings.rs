use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Several keys may trigger the same action.
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"KeyW"` → `MoveForward`).
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyS".into(), KeyAction::MoveBackward),
            ("KeyA".into(), KeyAction::StrafeLeft),
            ("KeyD".into(), KeyAction::StrafeRight),
            ("AltLeft".into(), KeyAction::MouseLook),
            ("KeyF".into(), KeyAction::EnterFlyMode),
            ("KeyI".into(), KeyAction::EnterInspectMode),
            ("Home".into(), KeyAction::ResetView),
            ("ArrowLeft".into(), KeyAction::LookLeft),
            ("ArrowRight".into(), KeyAction::LookRight),
            ("ArrowUp".into(), KeyAction::LookUp),
            ("ArrowDown".into(), KeyAction::LookDown),
            ("Escape".into(), KeyAction::Quit),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, returning the action it replaced.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        action: KeyAction,
    ) -> Option<KeyAction> {
        self.bindings.insert(key.into(), action)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) -> Option<KeyAction> {
        self.bindings.remove(key)
    }

    /// Keys bound to `action`, sorted for stable display.
    #[must_use]
    pub fn keys_for(&self, action: KeyAction) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}
