//! Display settings shared by the geometry assembler and the renderer

use crate::color::Color;
use crate::gradient::Gradient;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub background_color: Color,
    pub rings_gradient: Gradient,
    pub edges_color: Color,
    pub show_rings: bool,
    pub show_edges: bool,
    /// Connect each ring's last walker back to its first
    pub close_rings: bool,
    pub rings_width: f32,
    pub edges_width: f32,
    pub rings_opacity: f32,
    pub edges_opacity: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(255, 255, 255),
            rings_gradient: Gradient::black_to_red(),
            edges_color: Color::BLACK,
            show_rings: true,
            show_edges: true,
            close_rings: true,
            rings_width: 3.0,
            edges_width: 5.0,
            rings_opacity: 1.0,
            edges_opacity: 1.0,
        }
    }
}

impl RenderSettings {
    /// Whether moving from `self` to `next` changes the assembled buffers.
    /// Visibility, widths, opacities and background only affect drawing.
    pub fn changes_geometry(&self, next: &RenderSettings) -> bool {
        self.rings_gradient != next.rings_gradient
            || self.edges_color != next.edges_color
            || self.close_rings != next.close_rings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_buffer_inputs_change_geometry() {
        let base = RenderSettings::default();

        let drawing_only = RenderSettings {
            show_rings: false,
            edges_width: 1.0,
            rings_opacity: 0.4,
            background_color: Color::BLACK,
            ..base.clone()
        };
        assert!(!base.changes_geometry(&drawing_only));

        let closed = RenderSettings { close_rings: false, ..base.clone() };
        assert!(base.changes_geometry(&closed));

        let recolored = RenderSettings { edges_color: Color::RED, ..base.clone() };
        assert!(base.changes_geometry(&recolored));

        let regraded = RenderSettings { rings_gradient: Gradient::white_to_black(), ..base.clone() };
        assert!(base.changes_geometry(&regraded));
    }
}
