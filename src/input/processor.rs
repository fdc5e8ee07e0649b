//! Converts raw platform events into per-frame action state and
//! discrete navigation commands.
//!
//! The `InputProcessor` owns all transient input state (held actions,
//! the accumulating pointer delta) and performs keybinding lookups. It
//! is the only thing that sits between raw window events and
//! [`OrreryEngine::update`](crate::engine::OrreryEngine::update).

use std::collections::HashMap;

use glam::Vec2;

use super::actions::{Action, ActionState};
use super::event::InputEvent;
use crate::camera::NavCommand;
use crate::options::KeybindingOptions;

/// Folds [`InputEvent`]s into held-action state and a per-frame pointer
/// delta, emitting [`NavCommand`]s for the edge-triggered actions.
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Currently held continuous actions.
    held: HashMap<Action, bool>,
    /// Pointer motion accumulated since the last snapshot.
    pointer_delta: Vec2,
}

impl InputProcessor {
    /// Create a processor with no held actions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Focus/release fire on the press edge only — holding the key does
    /// not repeat the command.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        bindings: &KeybindingOptions,
    ) -> Option<NavCommand> {
        match event {
            InputEvent::PointerDelta { x, y } => {
                self.pointer_delta += Vec2::new(*x, *y);
                None
            }
            InputEvent::Key { code, pressed } => {
                let action = bindings.lookup(code)?;
                if action.is_held_state() {
                    let _ = self.held.insert(action, *pressed);
                    return None;
                }
                if !pressed {
                    return None;
                }
                match action {
                    Action::Focus => Some(NavCommand::RequestFocus),
                    Action::Release => Some(NavCommand::RequestRelease),
                    _ => None,
                }
            }
            InputEvent::CaptureChanged { captured } => {
                // Key-up events are lost while the grab changes hands;
                // drop all held state so nothing sticks.
                if !captured {
                    self.held.clear();
                }
                None
            }
        }
    }

    /// Take the per-frame snapshot, consuming the pointer delta.
    ///
    /// Held-action state persists across frames; the delta never does.
    pub fn snapshot(&mut self) -> ActionState {
        let delta = std::mem::take(&mut self.pointer_delta);
        ActionState::new(self.held.clone(), delta)
    }
}

#[cfg(test)]
mod tests {
    use super::{InputEvent, InputProcessor};
    use crate::camera::NavCommand;
    use crate::input::Action;
    use crate::options::KeybindingOptions;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    #[test]
    fn held_keys_survive_snapshots() {
        let bindings = KeybindingOptions::default();
        let mut proc = InputProcessor::new();
        assert!(proc.handle_event(&key("KeyW", true), &bindings).is_none());

        assert!(proc.snapshot().is_held(Action::Forward));
        // Still held on the next frame.
        assert!(proc.snapshot().is_held(Action::Forward));

        let _ = proc.handle_event(&key("KeyW", false), &bindings);
        assert!(!proc.snapshot().is_held(Action::Forward));
    }

    #[test]
    fn pointer_delta_is_consumed_once() {
        let bindings = KeybindingOptions::default();
        let mut proc = InputProcessor::new();
        let _ = proc
            .handle_event(&InputEvent::PointerDelta { x: 3.0, y: -2.0 }, &bindings);
        let _ = proc
            .handle_event(&InputEvent::PointerDelta { x: 1.0, y: 1.0 }, &bindings);

        let snap = proc.snapshot();
        assert_eq!(snap.pointer_delta().x, 4.0);
        assert_eq!(snap.pointer_delta().y, -1.0);
        // Consumed: the next frame starts from zero.
        assert_eq!(proc.snapshot().pointer_delta().length(), 0.0);
    }

    #[test]
    fn focus_fires_on_press_edge_only() {
        let bindings = KeybindingOptions::default();
        let mut proc = InputProcessor::new();
        assert_eq!(
            proc.handle_event(&key("KeyF", true), &bindings),
            Some(NavCommand::RequestFocus)
        );
        assert_eq!(proc.handle_event(&key("KeyF", false), &bindings), None);
        assert_eq!(
            proc.handle_event(&key("KeyR", true), &bindings),
            Some(NavCommand::RequestRelease)
        );
    }

    #[test]
    fn losing_capture_clears_held_state() {
        let bindings = KeybindingOptions::default();
        let mut proc = InputProcessor::new();
        let _ = proc.handle_event(&key("KeyW", true), &bindings);
        let _ = proc
            .handle_event(&InputEvent::CaptureChanged { captured: false }, &bindings);
        assert!(!proc.snapshot().is_held(Action::Forward));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let bindings = KeybindingOptions::default();
        let mut proc = InputProcessor::new();
        assert!(proc.handle_event(&key("KeyZ", true), &bindings).is_none());
    }
}
