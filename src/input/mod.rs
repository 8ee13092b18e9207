//! Input handling: event types, the held-key map, the per-frame input
//! processor and listener subscriptions.

/// Platform-agnostic input events.
pub mod event;
/// Held-key map.
pub mod keyboard;
/// Folds raw events into per-frame state.
pub mod processor;
/// Listener registration and teardown.
pub mod subscription;

pub use event::{InputEvent, MouseButton, PointerEvent, PointerPhase};
pub use keyboard::KeyState;
pub use processor::{ControlEvent, InputProcessor};
pub use subscription::{InputSink, InputSource, Subscription};
