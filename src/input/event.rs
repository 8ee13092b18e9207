use crate::scene::ObjectId;

/// Platform-agnostic input events.
///
/// These are pushed into an [`InputSink`](super::InputSink) by an
/// [`InputSource`](super::InputSource) and folded into the
/// [`InputProcessor`](super::InputProcessor) state that the editor reads once
/// per frame.
///
/// # Example
///
/// ```
/// use scenekit::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// input.handle_event(InputEvent::KeyDown { code: "KeyW".into() });
/// assert!(input.keys().is_held("KeyW"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key went down. `code` uses `KeyboardEvent.code` spelling.
    KeyDown {
        /// Physical key code, e.g. `"KeyW"`.
        code: String,
    },
    /// A key was released.
    KeyUp {
        /// Physical key code, e.g. `"KeyW"`.
        code: String,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative mouse motion (`movementX`/`movementY`).
    MouseMove {
        /// Horizontal motion in CSS pixels.
        dx: f32,
        /// Vertical motion in CSS pixels.
        dy: f32,
    },
    /// Pointer event destined for the gizmo and orbit controls.
    Pointer(PointerEvent),
    /// Application-level request to change the selection.
    SelectObject {
        /// Object to select, or `None` to clear the selection.
        id: Option<ObjectId>,
    },
}

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// `pointerdown`
    Down,
    /// `pointermove`
    Move,
    /// `pointerup`
    Up,
}

/// A pointer event in render-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Down, move or up.
    pub phase: PointerPhase,
    /// Button that changed (for down/up); `None` for moves.
    pub button: Option<MouseButton>,
    /// Horizontal position in CSS pixels.
    pub x: f32,
    /// Vertical position in CSS pixels.
    pub y: f32,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index. Back/forward buttons map to
    /// `None`.
    #[must_use]
    pub const fn from_dom_button(button: i16) -> Option<Self> {
        match button {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_button_indices() {
        assert_eq!(MouseButton::from_dom_button(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_dom_button(1), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_dom_button(2), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_dom_button(3), None);
    }
}
