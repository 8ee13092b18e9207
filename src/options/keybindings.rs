use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera fly-movement actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// left = "KeyA"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Toward the camera's -Z.
    Forward,
    /// Toward the camera's +Z.
    Backward,
    /// Toward the camera's -X.
    Left,
    /// Toward the camera's +X.
    Right,
}

impl MoveAction {
    /// Every action, in the order [`KeybindingOptions::lookup`] resolves
    /// a key bound to more than one action.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::Left, Self::Right];

    /// Unit direction of this action in camera-local space.
    #[must_use]
    pub const fn local_direction(self) -> Vec3 {
        match self {
            Self::Forward => Vec3::NEG_Z,
            Self::Backward => Vec3::Z,
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping movement actions to key codes.
///
/// Key strings use `KeyboardEvent.code` spelling (`"KeyW"`, `"ArrowUp"`).
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<MoveAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (MoveAction::Forward, "KeyW".into()),
            (MoveAction::Backward, "KeyS".into()),
            (MoveAction::Left, "KeyA".into()),
            (MoveAction::Right, "KeyD".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string. A key bound to several
    /// actions resolves to the first in [`MoveAction::ALL`].
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        MoveAction::ALL
            .into_iter()
            .find(|action| self.key_for(*action) == Some(key))
    }

    /// Key string bound to an action, if any.
    #[must_use]
    pub fn key_for(&self, action: MoveAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_are_wasd() {
        let keys = KeybindingOptions::default();
        assert_eq!(keys.lookup("KeyW"), Some(MoveAction::Forward));
        assert_eq!(keys.lookup("KeyD"), Some(MoveAction::Right));
        assert_eq!(keys.lookup("KeyQ"), None);
        assert_eq!(keys.key_for(MoveAction::Left), Some("KeyA"));
    }

    #[test]
    fn shared_key_resolves_in_action_order() {
        let mut keys = KeybindingOptions::default();
        let _ = keys.bindings.insert(MoveAction::Right, "KeyW".into());
        let _ = keys.bindings.insert(MoveAction::Backward, "KeyW".into());
        assert_eq!(keys.lookup("KeyW"), Some(MoveAction::Forward));
        let _ = keys.bindings.remove(&MoveAction::Forward);
        assert_eq!(keys.lookup("KeyW"), Some(MoveAction::Backward));
    }
}
