//! Contract between the editor and the application that renders it.

use crate::options::OutlineOptions;
use crate::scene::ObjectId;
use crate::util::color::Color;

/// Selection-outline post-process settings owned by the host renderer.
///
/// The editor only writes into this; it never reads values back.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlinePass {
    /// Edge strength multiplier.
    pub edge_strength: f32,
    /// Glow radius around the edge.
    pub edge_glow: f32,
    /// Edge thickness.
    pub edge_thickness: f32,
    /// Color of unoccluded edges.
    pub visible_edge_color: Color,
    /// Color of occluded edges.
    pub hidden_edge_color: Color,
    /// Objects to outline.
    pub selected_objects: Vec<ObjectId>,
}

impl Default for OutlinePass {
    fn default() -> Self {
        Self {
            edge_strength: 3.0,
            edge_glow: 0.0,
            edge_thickness: 1.0,
            visible_edge_color: Color::WHITE,
            hidden_edge_color: Color(0x19_0a05),
            selected_objects: Vec::new(),
        }
    }
}

impl OutlinePass {
    /// Copy edge styling from options. Leaves `selected_objects` alone.
    pub fn apply_style(&mut self, options: &OutlineOptions) {
        self.edge_strength = options.edge_strength;
        self.edge_glow = options.edge_glow;
        self.edge_thickness = options.edge_thickness;
        self.visible_edge_color = options.visible_edge_color;
        self.hidden_edge_color = options.hidden_edge_color;
    }
}

/// The rendering application hosting the editor.
pub trait RenderHost {
    /// Render surface size in physical pixels.
    fn surface_size(&self) -> (u32, u32);

    /// The selection outline pass to configure.
    fn outline_pass_mut(&mut self) -> &mut OutlinePass;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_style_keeps_selection() {
        let mut pass = OutlinePass {
            selected_objects: vec![ObjectId(4)],
            ..OutlinePass::default()
        };
        pass.apply_style(&OutlineOptions::default());
        assert_eq!(pass.edge_strength, 3.0);
        assert_eq!(pass.edge_glow, 0.0);
        assert_eq!(pass.edge_thickness, 0.25);
        assert_eq!(pass.visible_edge_color, Color::ACCENT);
        assert_eq!(pass.hidden_edge_color, Color::ACCENT);
        assert_eq!(pass.selected_objects, vec![ObjectId(4)]);
    }
}
