//! Input handling: event types, the action-state snapshot, and the input
//! processor that converts raw window events into navigation commands.
//!
//! Controllers never subscribe to events themselves — they receive an
//! [`ActionState`] snapshot once per frame, which keeps them unit-testable
//! without a real input device.

/// Named actions and the per-frame action-state snapshot.
pub mod actions;
/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into state updates and discrete commands.
pub mod processor;

pub use actions::{Action, ActionState};
pub use event::InputEvent;
pub use processor::InputProcessor;
