//! The spotlight mask compositor.

use spotlight_common::config::SpotlightConfig;
use spotlight_model::{Rgba, SpotGeometry};

use crate::gradient::RadialGradient;
use crate::surface::{BlendMode, Surface};

/// Colors and opacities the mask is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskStyle {
    /// Opaque fill covering the page.
    pub background: Rgba,
    /// Light opacity at the spot center.
    pub light_start: f64,
    /// Light opacity at the lit radius.
    pub light_end: f64,
}

impl From<&SpotlightConfig> for MaskStyle {
    fn from(config: &SpotlightConfig) -> Self {
        Self {
            background: config.background_color,
            light_start: config.light_start_opacity,
            light_end: config.light_end_opacity,
        }
    }
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self::from(&SpotlightConfig::default())
    }
}

/// What a repaint produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepaintOutcome {
    /// A soft-edged hole of the given outer radius was cut.
    Cutout { extent: f64 },
    /// The mask was left fully opaque.
    Masked,
}

/// Paints the mask and cuts the spot out of it.
#[derive(Debug, Clone, Default)]
pub struct MaskRenderer {
    style: MaskStyle,
    repaints: u64,
}

impl MaskRenderer {
    pub fn new(style: MaskStyle) -> Self {
        Self { style, repaints: 0 }
    }

    pub fn style(&self) -> &MaskStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MaskStyle) {
        self.style = style;
    }

    /// Frames drawn so far, counting both cutout repaints and hides.
    pub fn repaint_count(&self) -> u64 {
        self.repaints
    }

    /// The gradient that cuts the spot, or `None` when the spot has no extent.
    pub fn cutout_gradient(&self, geometry: &SpotGeometry) -> Option<RadialGradient> {
        if geometry.is_degenerate() {
            return None;
        }
        let extent = geometry.total_extent();

        let background = self.style.background;
        let gradient = RadialGradient::new(geometry.center(), extent)
            .with_stop(0.0, background.with_alpha(1.0 - self.style.light_start))
            .with_stop(
                geometry.radius / extent,
                background.with_alpha(1.0 - self.style.light_end),
            )
            .with_stop(1.0, background.with_alpha(0.0));
        Some(gradient)
    }

    /// Cover the whole surface with the background color, no cutout.
    pub fn hide<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.paint_background(surface);
        self.repaints += 1;
    }

    /// Repaint the mask with the spot at `geometry`.
    pub fn repaint<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        geometry: &SpotGeometry,
    ) -> RepaintOutcome {
        self.paint_background(surface);
        self.repaints += 1;

        let Some(gradient) = self.cutout_gradient(geometry) else {
            tracing::trace!(x = geometry.x, y = geometry.y, "Spot has no extent; mask left opaque");
            return RepaintOutcome::Masked;
        };

        let extent = gradient.radius;
        surface.set_blend_mode(BlendMode::DestinationOut);
        surface.fill_circle(geometry.center(), extent, &gradient);
        surface.set_blend_mode(BlendMode::SourceOver);

        tracing::trace!(
            x = geometry.x,
            y = geometry.y,
            radius = geometry.radius,
            blur = geometry.blur,
            "Mask repainted"
        );
        RepaintOutcome::Cutout { extent }
    }

    fn paint_background<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_blend_mode(BlendMode::SourceOver);
        surface.clear();
        surface.fill_all(self.style.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn test_gradient_stops_follow_style() {
        let renderer = MaskRenderer::new(MaskStyle {
            background: Rgba::new(0, 0, 0, 0.9),
            light_start: 0.0,
            light_end: 0.2,
        });
        let gradient = renderer
            .cutout_gradient(&SpotGeometry::new(10.0, 20.0, 30.0, 10.0))
            .unwrap();

        assert_eq!(gradient.radius, 40.0);
        let stops = gradient.stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[0].color.a, 1.0);
        assert_eq!(stops[1].offset, 0.75);
        assert!((stops[1].color.a - 0.8).abs() < 1e-12);
        assert_eq!(stops[2].offset, 1.0);
        assert_eq!(stops[2].color.a, 0.0);
    }

    #[test]
    fn test_no_blur_puts_middle_stop_at_edge() {
        let renderer = MaskRenderer::default();
        let gradient = renderer
            .cutout_gradient(&SpotGeometry::new(0.0, 0.0, 50.0, 0.0))
            .unwrap();
        assert_eq!(gradient.stops()[1].offset, 1.0);
    }

    #[test]
    fn test_repaint_command_sequence() {
        let mut renderer = MaskRenderer::default();
        let mut surface = RecordingSurface::new(200, 100);
        let outcome = renderer.repaint(&mut surface, &SpotGeometry::new(50.0, 50.0, 20.0, 5.0));

        assert_eq!(outcome, RepaintOutcome::Cutout { extent: 25.0 });
        let commands = surface.commands();
        assert_eq!(commands[0], DrawCommand::SetBlendMode(BlendMode::SourceOver));
        assert_eq!(commands[1], DrawCommand::Clear);
        assert!(matches!(
            commands[2],
            DrawCommand::FillRect { width, height, .. } if width == 200.0 && height == 100.0
        ));
        assert_eq!(
            commands[3],
            DrawCommand::SetBlendMode(BlendMode::DestinationOut)
        );
        assert!(matches!(
            commands[4],
            DrawCommand::FillCircle { radius, blend: BlendMode::DestinationOut, .. } if radius == 25.0
        ));
        assert_eq!(commands[5], DrawCommand::SetBlendMode(BlendMode::SourceOver));
        assert_eq!(surface.blend_mode(), BlendMode::SourceOver);
    }

    #[test]
    fn test_degenerate_spot_skips_gradient() {
        let mut renderer = MaskRenderer::default();
        let mut surface = RecordingSurface::new(10, 10);
        let outcome = renderer.repaint(&mut surface, &SpotGeometry::new(5.0, 5.0, 0.0, 0.0));

        assert_eq!(outcome, RepaintOutcome::Masked);
        assert!(surface.circle_fills().is_empty());
        assert_eq!(renderer.repaint_count(), 1);
    }

    #[test]
    fn test_hide_counts_as_a_frame() {
        let mut renderer = MaskRenderer::default();
        let mut surface = RecordingSurface::new(10, 10);
        renderer.hide(&mut surface);

        assert_eq!(surface.clear_count(), 1);
        assert!(surface.circle_fills().is_empty());
        assert_eq!(renderer.repaint_count(), 1);
    }
}
