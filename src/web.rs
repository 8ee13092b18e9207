//! Browser glue: window-level input listeners and console logging.
//!
//! Only compiled with the `web` feature.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Event, EventTarget, KeyboardEvent, MouseEvent, Window};

use crate::error::EditorError;
use crate::input::{
    InputEvent, InputSink, InputSource, MouseButton, PointerEvent, PointerPhase,
    Subscription,
};
use crate::scene::ObjectId;

/// Custom event name for application-driven selection changes. `detail`
/// carries the numeric object id, or `null` to clear.
pub const SELECT_OBJECT_EVENT: &str = "selectObject";

type Listener = Closure<dyn FnMut(Event)>;
type Translate = fn(&Event) -> Option<InputEvent>;

/// Route console output through `log` and install the panic hook.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging(level: log::Level) -> bool {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level).is_ok()
}

/// The global `document`, if running in a window context.
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// [`InputSource`] backed by browser listeners.
///
/// Keyboard, mouse and selection events are read from the window. Pointer
/// events for the gizmo and orbit controls come from `pointer_target`
/// (normally the render canvas), or the window when unset.
#[derive(Debug, Clone)]
pub struct WindowInputSource {
    window: Window,
    pointer_target: Option<EventTarget>,
}

impl WindowInputSource {
    /// Listen on `window`.
    pub fn new(window: Window) -> Self {
        Self {
            window,
            pointer_target: None,
        }
    }

    /// Listen on the global window.
    pub fn from_global() -> Result<Self, EditorError> {
        web_sys::window()
            .map(Self::new)
            .ok_or_else(|| EditorError::Subscribe("no global window".to_owned()))
    }

    /// Read pointer events from `target` instead of the window.
    pub fn with_pointer_target(mut self, target: EventTarget) -> Self {
        self.pointer_target = Some(target);
        self
    }
}

impl InputSource for WindowInputSource {
    fn subscribe(&self, sink: InputSink) -> Result<Subscription, EditorError> {
        let window: EventTarget = self.window.clone().into();
        let pointer = self
            .pointer_target
            .clone()
            .unwrap_or_else(|| window.clone());

        let table: [(&EventTarget, &'static str, Translate); 9] = [
            (&window, "keydown", key_down),
            (&window, "keyup", key_up),
            (&window, "mousedown", mouse_down),
            (&window, "mouseup", mouse_up),
            (&window, "mousemove", mouse_move),
            (&pointer, "pointerdown", pointer_down),
            (&pointer, "pointermove", pointer_move),
            (&pointer, "pointerup", pointer_up),
            (&window, SELECT_OBJECT_EVENT, select_object),
        ];

        let mut installed: Vec<(EventTarget, &'static str, Listener)> =
            Vec::with_capacity(table.len());
        for (target, name, translate) in table {
            let sink = sink.clone();
            let listener = Listener::new(move |evt: Event| {
                if let Some(event) = translate(&evt) {
                    let _ = sink.push(event);
                }
            });
            if let Err(e) = target.add_event_listener_with_callback(
                name,
                listener.as_ref().unchecked_ref(),
            ) {
                remove_listeners(&installed);
                return Err(EditorError::Subscribe(format!("{name}: {e:?}")));
            }
            installed.push((target.clone(), name, listener));
        }
        log::debug!("installed {} input listeners", installed.len());

        Ok(Subscription::new(move || remove_listeners(&installed)))
    }
}

fn remove_listeners(installed: &[(EventTarget, &'static str, Listener)]) {
    for (target, name, listener) in installed {
        if let Err(e) = target.remove_event_listener_with_callback(
            name,
            listener.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove {name} listener: {e:?}");
        }
    }
}

// -- Translators ------------------------------------------------------------

fn key_down(evt: &Event) -> Option<InputEvent> {
    let key = evt.dyn_ref::<KeyboardEvent>()?;
    Some(InputEvent::KeyDown { code: key.code() })
}

fn key_up(evt: &Event) -> Option<InputEvent> {
    let key = evt.dyn_ref::<KeyboardEvent>()?;
    Some(InputEvent::KeyUp { code: key.code() })
}

fn mouse_button(evt: &Event, pressed: bool) -> Option<InputEvent> {
    let mouse = evt.dyn_ref::<MouseEvent>()?;
    let button = MouseButton::from_dom_button(mouse.button())?;
    Some(InputEvent::MouseButton { button, pressed })
}

fn mouse_down(evt: &Event) -> Option<InputEvent> {
    mouse_button(evt, true)
}

fn mouse_up(evt: &Event) -> Option<InputEvent> {
    mouse_button(evt, false)
}

fn mouse_move(evt: &Event) -> Option<InputEvent> {
    let mouse = evt.dyn_ref::<MouseEvent>()?;
    Some(InputEvent::MouseMove {
        dx: mouse.movement_x() as f32,
        dy: mouse.movement_y() as f32,
    })
}

fn pointer(evt: &Event, phase: PointerPhase) -> Option<InputEvent> {
    // PointerEvent extends MouseEvent; only the MouseEvent fields are read.
    let mouse = evt.dyn_ref::<MouseEvent>()?;
    let button = match phase {
        PointerPhase::Move => None,
        PointerPhase::Down | PointerPhase::Up => {
            MouseButton::from_dom_button(mouse.button())
        }
    };
    Some(InputEvent::Pointer(PointerEvent {
        phase,
        button,
        x: mouse.offset_x() as f32,
        y: mouse.offset_y() as f32,
    }))
}

fn pointer_down(evt: &Event) -> Option<InputEvent> {
    pointer(evt, PointerPhase::Down)
}

fn pointer_move(evt: &Event) -> Option<InputEvent> {
    pointer(evt, PointerPhase::Move)
}

fn pointer_up(evt: &Event) -> Option<InputEvent> {
    pointer(evt, PointerPhase::Up)
}

fn select_object(evt: &Event) -> Option<InputEvent> {
    let custom = evt.dyn_ref::<CustomEvent>()?;
    let detail = custom.detail();
    if detail.is_null() || detail.is_undefined() {
        return Some(InputEvent::SelectObject { id: None });
    }
    let id = detail.as_f64().and_then(ObjectId::from_f64);
    if id.is_none() {
        log::warn!("ignoring {SELECT_OBJECT_EVENT} with detail {detail:?}");
    }
    id.map(|id| InputEvent::SelectObject { id: Some(id) })
}
