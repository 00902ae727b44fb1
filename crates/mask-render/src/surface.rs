//! The drawing surface contract.

use spotlight_model::{Point2D, Rgba};

use crate::gradient::RadialGradient;

/// How newly drawn pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Paint over the destination (normal drawing).
    #[default]
    SourceOver,
    /// Subtract the drawn alpha from the destination; color is ignored.
    DestinationOut,
}

/// A 2D drawing target covering the whole page.
///
/// Operations are infallible: a surface that exists is assumed to be able
/// to draw. Hosts that cannot provide one fail at acquisition time.
pub trait Surface {
    /// Surface dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Make every pixel fully transparent.
    fn clear(&mut self);

    /// Set the rule used by subsequent fills.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// The rule currently in effect.
    fn blend_mode(&self) -> BlendMode;

    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// Fill a full circle, sampling color from a radial gradient.
    fn fill_circle(&mut self, center: Point2D, radius: f64, paint: &RadialGradient);

    /// Fill the entire surface with a solid color.
    fn fill_all(&mut self, color: Rgba) {
        let (width, height) = self.size();
        self.fill_rect(0.0, 0.0, width as f64, height as f64, color);
    }
}
