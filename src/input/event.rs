/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// folds them into the per-frame [`ActionState`](super::ActionState) and
/// emits discrete [`NavCommand`](crate::camera::NavCommand)s.
///
/// # Example
///
/// ```ignore
/// let cmd = engine.handle_input(InputEvent::PointerDelta { x: 4.0, y: -1.5 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion while captured, in pointer counts.
    PointerDelta {
        /// Horizontal motion (positive = right).
        x: f32,
        /// Vertical motion (positive = down).
        y: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, `"ShiftLeft"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Pointer capture was gained or lost outside our control (e.g. the
    /// platform revoked the grab).
    CaptureChanged {
        /// Whether relative pointer motion is now being captured.
        captured: bool,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event, ignoring non-physical keys and
    /// auto-repeat.
    #[must_use]
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        if event.repeat {
            return None;
        }
        let winit::keyboard::PhysicalKey::Code(code) = event.physical_key
        else {
            return None;
        };
        Some(Self::Key {
            code: format!("{code:?}"),
            pressed: event.state == winit::event::ElementState::Pressed,
        })
    }
}
