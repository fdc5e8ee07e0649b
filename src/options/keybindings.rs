use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::Action;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Space"`, `"ShiftLeft"`, etc.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<Action, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, Action>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (Action::Forward, "KeyW".into()),
            (Action::Back, "KeyS".into()),
            (Action::Left, "KeyA".into()),
            (Action::Right, "KeyD".into()),
            (Action::Up, "Space".into()),
            (Action::Down, "ControlLeft".into()),
            (Action::Boost, "ShiftLeft".into()),
            (Action::Focus, "KeyF".into()),
            (Action::Release, "KeyR".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

// The reverse map is a derived cache; only the bindings themselves
// define equality.
impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Action> {
        self.key_to_action.get(key).copied()
    }
}
