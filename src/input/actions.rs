use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// boost = "ShiftLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move along the camera's look direction.
    Forward,
    /// Move against the look direction.
    Back,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Climb along camera-local up.
    Up,
    /// Descend along camera-local up.
    Down,
    /// Hold for the speed multiplier.
    Boost,
    /// Edge-triggered: focus the nearest body.
    Focus,
    /// Edge-triggered: return to free flight.
    Release,
}

impl Action {
    /// Whether this action is continuous held state rather than an
    /// edge-triggered command.
    #[must_use]
    pub fn is_held_state(self) -> bool {
        !matches!(self, Self::Focus | Self::Release)
    }
}

/// Per-frame input snapshot consumed by the controllers.
///
/// The pointer delta is the frame's accumulated relative motion; the
/// processor hands it over exactly once per frame and never carries it
/// across frames.
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    held: HashMap<Action, bool>,
    pointer_delta: Vec2,
}

impl ActionState {
    /// Build a snapshot from held-action state and the frame's pointer
    /// delta.
    #[must_use]
    pub fn new(held: HashMap<Action, bool>, pointer_delta: Vec2) -> Self {
        Self {
            held,
            pointer_delta,
        }
    }

    /// Whether the given action is currently held.
    #[must_use]
    pub fn is_held(&self, action: Action) -> bool {
        self.held.get(&action).copied().unwrap_or(false)
    }

    /// The frame's relative pointer motion.
    #[must_use]
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_delta
    }

    /// Signed contribution of an opposing action pair (-1, 0 or +1).
    #[must_use]
    pub fn axis(&self, positive: Action, negative: Action) -> f32 {
        f32::from(self.is_held(positive)) - f32::from(self.is_held(negative))
    }
}
