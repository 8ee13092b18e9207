//! Transform gizmo, pan-only orbit controls and the selection helper wired
//! together for the host-backed editor.
//!
//! These hold interaction state only. Raycasting and drawing the gizmo are
//! the host renderer's job; it reads the drag and pan deltas accumulated
//! here each frame.

use glam::Vec2;

use crate::input::{ControlEvent, MouseButton, PointerEvent, PointerPhase};
use crate::options::{ControlsOptions, GizmoMode, OrbitAction, OrbitButtons};
use crate::scene::{ObjectId, Scene, Selector};

/// Transform manipulation gizmo state.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformGizmo {
    mode: GizmoMode,
    attached: Option<ObjectId>,
    dragging: bool,
    last_pointer: Vec2,
    drag_delta: Vec2,
}

impl TransformGizmo {
    /// Detached gizmo in the given mode.
    #[must_use]
    pub fn new(mode: GizmoMode) -> Self {
        Self {
            mode,
            attached: None,
            dragging: false,
            last_pointer: Vec2::ZERO,
            drag_delta: Vec2::ZERO,
        }
    }

    /// Current manipulation mode.
    #[must_use]
    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    /// Switch manipulation mode.
    pub fn set_mode(&mut self, mode: GizmoMode) {
        self.mode = mode;
    }

    /// Object the gizmo is attached to.
    #[must_use]
    pub fn attached(&self) -> Option<ObjectId> {
        self.attached
    }

    /// Attach to an object, ending any drag in progress.
    pub fn attach(&mut self, id: ObjectId) {
        self.attached = Some(id);
        self.end_drag();
    }

    /// Detach, ending any drag in progress.
    pub fn detach(&mut self) {
        self.attached = None;
        self.end_drag();
    }

    /// Whether a gizmo drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer motion accumulated by the current drag, consumed.
    pub fn take_drag_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.drag_delta)
    }

    fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_delta = Vec2::ZERO;
    }

    /// Feed a pointer event. Returns `true` if the drag state changed.
    pub fn on_pointer(&mut self, event: PointerEvent) -> bool {
        let pos = Vec2::new(event.x, event.y);
        match event.phase {
            PointerPhase::Down => {
                let starts = self.attached.is_some()
                    && event.button == Some(MouseButton::Left)
                    && !self.dragging;
                if starts {
                    self.dragging = true;
                    self.last_pointer = pos;
                }
                starts
            }
            PointerPhase::Move => {
                if self.dragging {
                    self.drag_delta += pos - self.last_pointer;
                    self.last_pointer = pos;
                }
                false
            }
            PointerPhase::Up => {
                let was = self.dragging;
                self.dragging = false;
                was
            }
        }
    }
}

/// Orbit-style auxiliary camera controls.
///
/// Configured pan-only by default: rotation disabled and every button mapped
/// to [`OrbitAction::Pan`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    /// Whether the controls react to pointer input at all.
    pub enabled: bool,
    enable_rotate: bool,
    zoom_speed: f32,
    buttons: OrbitButtons,
    active: Option<OrbitAction>,
    last_pointer: Vec2,
    pan_delta: Vec2,
    dolly_delta: f32,
}

impl OrbitControls {
    /// Build from controls options.
    #[must_use]
    pub fn new(options: &ControlsOptions) -> Self {
        Self {
            enabled: true,
            enable_rotate: options.orbit_enable_rotate,
            zoom_speed: options.orbit_zoom_speed,
            buttons: options.orbit_buttons,
            active: None,
            last_pointer: Vec2::ZERO,
            pan_delta: Vec2::ZERO,
            dolly_delta: 0.0,
        }
    }

    /// Whether orbit rotation is allowed.
    #[must_use]
    pub fn enable_rotate(&self) -> bool {
        self.enable_rotate
    }

    /// Zoom speed multiplier.
    #[must_use]
    pub fn zoom_speed(&self) -> f32 {
        self.zoom_speed
    }

    /// Action bound to a mouse button.
    #[must_use]
    pub fn action_for(&self, button: MouseButton) -> OrbitAction {
        match button {
            MouseButton::Left => self.buttons.left,
            MouseButton::Middle => self.buttons.middle,
            MouseButton::Right => self.buttons.right,
        }
    }

    /// Action currently being performed, if a button is held.
    #[must_use]
    pub fn active(&self) -> Option<OrbitAction> {
        self.active
    }

    /// Accumulated pan motion in pixels, consumed.
    pub fn take_pan_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pan_delta)
    }

    /// Accumulated dolly amount (already scaled by zoom speed), consumed.
    pub fn take_dolly_delta(&mut self) -> f32 {
        std::mem::take(&mut self.dolly_delta)
    }

    /// Stop any action in progress.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Feed a pointer event.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        let pos = Vec2::new(event.x, event.y);
        match event.phase {
            PointerPhase::Down => {
                if !self.enabled {
                    return;
                }
                self.active = event
                    .button
                    .map(|b| self.action_for(b))
                    .filter(|a| *a != OrbitAction::Rotate || self.enable_rotate);
                self.last_pointer = pos;
            }
            PointerPhase::Move => {
                let delta = pos - self.last_pointer;
                self.last_pointer = pos;
                if !self.enabled {
                    return;
                }
                match self.active {
                    Some(OrbitAction::Pan) => self.pan_delta += delta,
                    Some(OrbitAction::Dolly) => {
                        self.dolly_delta += delta.y * self.zoom_speed;
                    }
                    // Rotation is applied by the host from its own state.
                    Some(OrbitAction::Rotate) | None => {}
                }
            }
            PointerPhase::Up => self.active = None,
        }
    }
}

/// Gizmo, orbit controls and selector bundled for the host-backed editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorControls {
    /// Transform gizmo.
    pub gizmo: TransformGizmo,
    /// Orbit controls.
    pub orbit: OrbitControls,
    /// Selection helper.
    pub selector: Selector,
}

impl EditorControls {
    /// Build all controls from options.
    #[must_use]
    pub fn new(options: &ControlsOptions) -> Self {
        Self {
            gizmo: TransformGizmo::new(options.gizmo_mode),
            orbit: OrbitControls::new(options),
            selector: Selector::new(),
        }
    }

    /// Route one queued control event. Returns `true` if the selection
    /// changed.
    ///
    /// The gizmo sees pointer events first; while it drags, orbit controls
    /// are disabled.
    pub fn handle(&mut self, event: ControlEvent, scene: &Scene) -> bool {
        match event {
            ControlEvent::Pointer(pointer) => {
                if self.gizmo.on_pointer(pointer) {
                    self.orbit.enabled = !self.gizmo.is_dragging();
                    self.orbit.cancel();
                }
                self.orbit.on_pointer(pointer);
                false
            }
            ControlEvent::Select(Some(id)) => {
                if !scene.contains(id) {
                    log::warn!("selectObject: no object {id:?} in scene");
                    return false;
                }
                self.gizmo.attach(id);
                self.orbit.enabled = true;
                self.selector.select(id)
            }
            ControlEvent::Select(None) => {
                self.gizmo.detach();
                self.orbit.enabled = true;
                self.selector.clear()
            }
        }
    }

    /// Drop the selection if its object left the scene. Returns `true` if
    /// the selection changed.
    pub fn prune(&mut self, scene: &Scene) -> bool {
        let stale: Vec<ObjectId> = self
            .selector
            .selection()
            .iter()
            .copied()
            .filter(|id| !scene.contains(*id))
            .collect();
        if stale.is_empty() {
            return false;
        }
        for id in stale {
            self.selector.toggle(id);
            if self.gizmo.attached() == Some(id) {
                self.gizmo.detach();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(
        phase: PointerPhase,
        button: Option<MouseButton>,
        x: f32,
        y: f32,
    ) -> ControlEvent {
        ControlEvent::Pointer(PointerEvent { phase, button, x, y })
    }

    fn controls_with_object() -> (EditorControls, Scene, ObjectId) {
        let mut scene = Scene::new();
        let id = scene.add_object("cube");
        (EditorControls::new(&ControlsOptions::default()), scene, id)
    }

    #[test]
    fn defaults_match_editor_wiring() {
        let controls = EditorControls::new(&ControlsOptions::default());
        assert_eq!(controls.gizmo.mode(), GizmoMode::Translate);
        assert!(!controls.orbit.enable_rotate());
        assert_eq!(controls.orbit.zoom_speed(), 3.0);
        for button in [MouseButton::Left, MouseButton::Middle, MouseButton::Right]
        {
            assert_eq!(controls.orbit.action_for(button), OrbitAction::Pan);
        }
    }

    #[test]
    fn orbit_pans_with_any_button() {
        let (mut c, scene, _) = controls_with_object();
        let _ = c.handle(
            pointer(PointerPhase::Down, Some(MouseButton::Right), 10.0, 10.0),
            &scene,
        );
        let _ = c.handle(pointer(PointerPhase::Move, None, 14.0, 7.0), &scene);
        let _ = c.handle(
            pointer(PointerPhase::Up, Some(MouseButton::Right), 14.0, 7.0),
            &scene,
        );
        assert_eq!(c.orbit.take_pan_delta(), Vec2::new(4.0, -3.0));
        assert_eq!(c.orbit.active(), None);
    }

    #[test]
    fn select_attaches_gizmo_and_reports_change() {
        let (mut c, scene, id) = controls_with_object();
        assert!(c.handle(ControlEvent::Select(Some(id)), &scene));
        assert_eq!(c.gizmo.attached(), Some(id));
        assert_eq!(c.selector.selection(), &[id]);
        assert!(!c.handle(ControlEvent::Select(Some(id)), &scene));
        assert!(c.handle(ControlEvent::Select(None), &scene));
        assert_eq!(c.gizmo.attached(), None);
    }

    #[test]
    fn unknown_object_is_ignored() {
        let (mut c, scene, _) = controls_with_object();
        assert!(!c.handle(ControlEvent::Select(Some(ObjectId(999))), &scene));
        assert!(c.selector.selection().is_empty());
    }

    #[test]
    fn gizmo_drag_disables_orbit() {
        let (mut c, scene, id) = controls_with_object();
        let _ = c.handle(ControlEvent::Select(Some(id)), &scene);
        let _ = c.handle(
            pointer(PointerPhase::Down, Some(MouseButton::Left), 0.0, 0.0),
            &scene,
        );
        assert!(c.gizmo.is_dragging());
        assert!(!c.orbit.enabled);

        let _ = c.handle(pointer(PointerPhase::Move, None, 5.0, 2.0), &scene);
        assert_eq!(c.gizmo.take_drag_delta(), Vec2::new(5.0, 2.0));
        assert_eq!(c.orbit.take_pan_delta(), Vec2::ZERO);

        let _ = c.handle(
            pointer(PointerPhase::Up, Some(MouseButton::Left), 5.0, 2.0),
            &scene,
        );
        assert!(!c.gizmo.is_dragging());
        assert!(c.orbit.enabled);
    }

    #[test]
    fn prune_drops_removed_objects() {
        let (mut c, mut scene, id) = controls_with_object();
        let _ = c.handle(ControlEvent::Select(Some(id)), &scene);
        let _ = scene.remove_object(id);
        assert!(c.prune(&scene));
        assert!(c.selector.selection().is_empty());
        assert_eq!(c.gizmo.attached(), None);
        assert!(!c.prune(&scene));
    }

    #[test]
    fn rotate_binding_ignored_when_rotation_disabled() {
        let options = ControlsOptions {
            orbit_buttons: OrbitButtons {
                left: OrbitAction::Rotate,
                ..OrbitButtons::default()
            },
            ..ControlsOptions::default()
        };
        let mut orbit = OrbitControls::new(&options);
        orbit.on_pointer(PointerEvent {
            phase: PointerPhase::Down,
            button: Some(MouseButton::Left),
            x: 0.0,
            y: 0.0,
        });
        assert_eq!(orbit.active(), None);
    }
}
