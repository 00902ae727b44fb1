//! Radial gradients.

use spotlight_model::{Point2D, Rgba};

/// A color at a position along the gradient, `offset` in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

/// A gradient radiating from `center` out to `radius`.
///
/// Offset 0 is the center, offset 1 the outer radius. Colors are linearly
/// interpolated between stops and held constant beyond the first and last.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Point2D,
    pub radius: f64,
    stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self {
            center,
            radius,
            stops: Vec::new(),
        }
    }

    /// Add a stop. Offsets are clamped to `[0.0, 1.0]`; stops sharing an
    /// offset keep their insertion order.
    pub fn add_color_stop(&mut self, offset: f64, color: Rgba) {
        let offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, 1.0)
        };
        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        self.stops.insert(index, ColorStop { offset, color });
    }

    /// Builder form of [`add_color_stop`](Self::add_color_stop).
    pub fn with_stop(mut self, offset: f64, color: Rgba) -> Self {
        self.add_color_stop(offset, color);
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at a normalized offset.
    pub fn color_at_offset(&self, t: f64) -> Rgba {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgba::TRANSPARENT,
        };

        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.color;
                }
                return Rgba::lerp(&a.color, &b.color, (t - a.offset) / span);
            }
        }

        last.color
    }

    /// Color at a surface position. A zero-radius gradient paints nothing.
    pub fn color_at(&self, point: Point2D) -> Rgba {
        if self.radius <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        self.color_at_offset(self.center.distance_to(&point) / self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop() -> RadialGradient {
        RadialGradient::new(Point2D::new(0.0, 0.0), 10.0)
            .with_stop(0.0, Rgba::BLACK)
            .with_stop(1.0, Rgba::TRANSPARENT)
    }

    #[test]
    fn test_interpolates_between_stops() {
        let gradient = two_stop();
        let mid = gradient.color_at(Point2D::new(5.0, 0.0));
        assert!((mid.a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_outside_range() {
        let gradient = two_stop();
        assert_eq!(gradient.color_at(Point2D::new(0.0, 0.0)), Rgba::BLACK);
        assert_eq!(
            gradient.color_at(Point2D::new(50.0, 0.0)),
            Rgba::TRANSPARENT
        );
    }

    #[test]
    fn test_stops_are_sorted_on_insert() {
        let gradient = RadialGradient::new(Point2D::new(0.0, 0.0), 1.0)
            .with_stop(1.0, Rgba::TRANSPARENT)
            .with_stop(0.0, Rgba::BLACK)
            .with_stop(0.5, Rgba::WHITE);
        let offsets: Vec<f64> = gradient.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_coincident_stops_make_a_hard_edge() {
        let gradient = RadialGradient::new(Point2D::new(0.0, 0.0), 1.0)
            .with_stop(0.0, Rgba::BLACK)
            .with_stop(1.0, Rgba::BLACK)
            .with_stop(1.0, Rgba::TRANSPARENT);
        assert_eq!(gradient.color_at_offset(0.99), Rgba::BLACK);
        assert_eq!(gradient.color_at_offset(1.0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_empty_and_zero_radius_paint_nothing() {
        let empty = RadialGradient::new(Point2D::new(0.0, 0.0), 10.0);
        assert_eq!(empty.color_at_offset(0.3), Rgba::TRANSPARENT);

        let zero = RadialGradient::new(Point2D::new(0.0, 0.0), 0.0).with_stop(0.0, Rgba::BLACK);
        assert_eq!(zero.color_at(Point2D::new(0.0, 0.0)), Rgba::TRANSPARENT);
    }
}
