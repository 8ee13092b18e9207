use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and fly-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera position when the editor is created.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// World units moved per frame for each held movement key.
    #[schemars(title = "Move Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub movement_speed: f32,
    /// Radians of yaw/pitch per pixel of mouse drag.
    #[schemars(title = "Look Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub rotation_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.01,
            zfar: 100.0,
            start_position: [0.0, 0.0, 5.0],
            movement_speed: 0.1,
            rotation_speed: 0.002,
        }
    }
}
