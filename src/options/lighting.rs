use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::Color;

/// Hemisphere ambient light added to the scene at init.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Color contributed from above.
    #[schemars(title = "Sky")]
    pub sky_color: Color,
    /// Color contributed from below.
    #[schemars(title = "Ground")]
    pub ground_color: Color,
    /// Light intensity multiplier.
    #[schemars(title = "Intensity", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Light position. Only its direction from the origin matters.
    #[schemars(skip)]
    pub position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            sky_color: Color::WHITE,
            ground_color: Color::BLACK,
            intensity: 1.0,
            position: [0.0, 1.0, 2.0],
        }
    }
}
