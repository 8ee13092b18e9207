use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Transform gizmo manipulation mode.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum GizmoMode {
    /// Move along axes/planes.
    #[default]
    Translate,
    /// Rotate around axes.
    Rotate,
    /// Scale along axes.
    Scale,
}

/// What an orbit-controls mouse button does while held.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OrbitAction {
    /// Orbit around the target.
    Rotate,
    /// Move toward/away from the target.
    Dolly,
    /// Slide the camera and target together.
    #[default]
    Pan,
}

/// Mapping of the three mouse buttons to orbit actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct OrbitButtons {
    /// Primary button.
    pub left: OrbitAction,
    /// Wheel button.
    pub middle: OrbitAction,
    /// Secondary button.
    pub right: OrbitAction,
}

impl Default for OrbitButtons {
    fn default() -> Self {
        Self {
            left: OrbitAction::Pan,
            middle: OrbitAction::Pan,
            right: OrbitAction::Pan,
        }
    }
}

/// Gizmo and orbit-controls settings used by the host-wired editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
pub struct ControlsOptions {
    /// Initial gizmo mode.
    #[schemars(title = "Gizmo Mode")]
    pub gizmo_mode: GizmoMode,
    /// Whether orbit controls may rotate the view.
    #[schemars(skip)]
    pub orbit_enable_rotate: bool,
    /// Orbit zoom speed multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub orbit_zoom_speed: f32,
    /// Orbit mouse button mapping.
    #[schemars(skip)]
    pub orbit_buttons: OrbitButtons,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            gizmo_mode: GizmoMode::Translate,
            orbit_enable_rotate: false,
            orbit_zoom_speed: 3.0,
            orbit_buttons: OrbitButtons::default(),
        }
    }
}
