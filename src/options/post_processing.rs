use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::Color;

/// Selection outline styling written into the host's outline pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Outline", inline)]
#[serde(default)]
pub struct OutlineOptions {
    /// Edge strength multiplier.
    #[schemars(title = "Edge Strength", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub edge_strength: f32,
    /// Glow radius around the edge.
    #[schemars(title = "Edge Glow", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub edge_glow: f32,
    /// Edge thickness.
    #[schemars(title = "Edge Thickness", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub edge_thickness: f32,
    /// Color of edges not occluded by other geometry.
    #[schemars(title = "Visible Edge")]
    pub visible_edge_color: Color,
    /// Color of occluded edges.
    #[schemars(title = "Hidden Edge")]
    pub hidden_edge_color: Color,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            edge_strength: 3.0,
            edge_glow: 0.0,
            edge_thickness: 0.25,
            visible_edge_color: Color::ACCENT,
            hidden_edge_color: Color::ACCENT,
        }
    }
}
