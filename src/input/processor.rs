//! Folds raw platform events into per-frame input state.
//!
//! The `InputProcessor` owns all transient input state: the held-key map,
//! the drag flag and the unconsumed mouse-motion accumulator. Event handlers
//! write into it at any point between frames; the editor reads and consumes
//! it once per frame.

use glam::Vec2;

use super::event::{InputEvent, PointerEvent};
use super::keyboard::KeyState;
use crate::scene::ObjectId;

/// Event forwarded to the host-wired controls on the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Pointer event for the gizmo and orbit controls.
    Pointer(PointerEvent),
    /// Selection change request.
    Select(Option<ObjectId>),
}

/// Accumulates input between frames.
///
/// # Usage
///
/// ```
/// use scenekit::input::{InputEvent, InputProcessor, MouseButton};
///
/// let mut input = InputProcessor::new();
/// input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// input.handle_event(InputEvent::MouseMove { dx: 4.0, dy: -2.0 });
/// input.handle_event(InputEvent::MouseMove { dx: 1.0, dy: 0.0 });
/// assert_eq!(input.take_mouse_delta(), glam::Vec2::new(5.0, -2.0));
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Held-key map.
    keys: KeyState,
    /// Motion accumulated while dragging and not yet consumed.
    mouse_delta: Vec2,
    /// Whether a mouse button is held.
    mouse_down: bool,
    /// Whether pointer/selection events are queued for the controls.
    queue_controls: bool,
    pending: Vec<ControlEvent>,
}

impl InputProcessor {
    /// Create a processor with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Held-key map.
    #[must_use]
    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Whether a mouse button is held (camera drag active).
    #[must_use]
    pub fn mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// Unconsumed mouse motion.
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Return the accumulated mouse motion and reset it to zero.
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Start or stop queueing pointer/selection events for the controls.
    ///
    /// Disabling drops anything already queued.
    pub fn set_queue_controls(&mut self, enabled: bool) {
        self.queue_controls = enabled;
        if !enabled {
            self.pending.clear();
        }
    }

    /// Take every control event queued since the last call, oldest first.
    pub fn drain_control_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Release all keys and buttons and discard unconsumed motion, e.g. on
    /// window blur or teardown.
    pub fn release_all(&mut self) {
        self.keys.release_all();
        self.mouse_down = false;
        self.mouse_delta = Vec2::ZERO;
    }

    /// Fold one raw event into the state.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { code } => self.keys.set(&code, true),
            InputEvent::KeyUp { code } => self.keys.set(&code, false),
            InputEvent::MouseButton { pressed, .. } => {
                self.mouse_down = pressed;
            }
            InputEvent::MouseMove { dx, dy } => {
                if self.mouse_down {
                    self.mouse_delta += Vec2::new(dx, dy);
                }
            }
            InputEvent::Pointer(pointer) => {
                self.queue(ControlEvent::Pointer(pointer));
            }
            InputEvent::SelectObject { id } => {
                self.queue(ControlEvent::Select(id));
            }
        }
    }

    fn queue(&mut self, event: ControlEvent) {
        if self.queue_controls {
            self.pending.push(event);
        }
    }
}
