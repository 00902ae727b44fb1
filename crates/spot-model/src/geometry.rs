//! Lit-circle geometry and animation step vectors.

use serde::{Deserialize, Serialize};

/// Geometry of the lit circle.
///
/// `radius` is the fully lit part of the spot; `blur` is the width of the
/// soft edge drawn outside it. Both are kept non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotGeometry {
    /// Center X in page pixels.
    pub x: f64,
    /// Center Y in page pixels.
    pub y: f64,
    /// Radius of the lit area.
    pub radius: f64,
    /// Width of the soft edge beyond `radius`.
    pub blur: f64,
}

impl SpotGeometry {
    /// Create a geometry, clamping `radius` and `blur` to be non-negative.
    pub fn new(x: f64, y: f64, radius: f64, blur: f64) -> Self {
        Self {
            x,
            y,
            radius,
            blur,
        }
        .clamped()
    }

    /// Same geometry moved to `(x, y)`.
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Same geometry with a new radius.
    pub fn with_radius(self, radius: f64) -> Self {
        Self { radius, ..self }.clamped()
    }

    /// Outer radius of the cutout: `radius + blur`.
    pub fn total_extent(&self) -> f64 {
        self.radius + self.blur
    }

    /// Whether the cutout has no area at all.
    pub fn is_degenerate(&self) -> bool {
        self.total_extent() <= 0.0
    }

    /// The circle center.
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Whether `(px, py)` lies within the lit radius. The boundary counts as inside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        self.center().distance_squared_to(&Point2D::new(px, py)) <= self.radius * self.radius
    }

    /// Copy where every non-finite field is taken from `fallback`.
    pub fn finite_or(self, fallback: &SpotGeometry) -> Self {
        let pick = |value: f64, other: f64| if value.is_finite() { value } else { other };
        Self {
            x: pick(self.x, fallback.x),
            y: pick(self.y, fallback.y),
            radius: pick(self.radius, fallback.radius),
            blur: pick(self.blur, fallback.blur),
        }
    }

    /// Copy with negative `radius`/`blur` raised to zero.
    pub fn clamped(self) -> Self {
        Self {
            radius: self.radius.max(0.0),
            blur: self.blur.max(0.0),
            ..self
        }
    }
}

impl Default for SpotGeometry {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            blur: 0.0,
        }
    }
}

/// Absolute per-tick increments for each animated field. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepVector {
    pub dx: f64,
    pub dy: f64,
    pub dr: f64,
    pub dblur: f64,
}

impl StepVector {
    /// Per-tick increments that cover `from -> to` in `steps` ticks.
    ///
    /// `steps == 0` is treated as a single step.
    pub fn between(from: &SpotGeometry, to: &SpotGeometry, steps: u32) -> Self {
        let steps = steps.max(1) as f64;
        Self {
            dx: (to.x - from.x).abs() / steps,
            dy: (to.y - from.y).abs() / steps,
            dr: (to.radius - from.radius).abs() / steps,
            dblur: (to.blur - from.blur).abs() / steps,
        }
    }
}

/// A 2D point in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared_to(&self, other: &Point2D) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_negative_extent() {
        let geom = SpotGeometry::new(10.0, 10.0, -5.0, -1.0);
        assert_eq!(geom.radius, 0.0);
        assert_eq!(geom.blur, 0.0);
        assert!(geom.is_degenerate());
    }

    #[test]
    fn test_contains_boundary_is_inside() {
        let geom = SpotGeometry::new(0.0, 0.0, 5.0, 0.0);
        assert!(geom.contains(3.0, 4.0)); // distance exactly 5
        assert!(geom.contains(0.0, 0.0));
        assert!(!geom.contains(3.0, 4.01));
    }

    #[test]
    fn test_step_vector_is_absolute() {
        let from = SpotGeometry::new(100.0, 0.0, 50.0, 10.0);
        let to = SpotGeometry::new(0.0, 40.0, 50.0, 30.0);
        let step = StepVector::between(&from, &to, 10);
        assert!((step.dx - 10.0).abs() < 1e-12);
        assert!((step.dy - 4.0).abs() < 1e-12);
        assert_eq!(step.dr, 0.0);
        assert!((step.dblur - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_vector_zero_steps_is_single_step() {
        let from = SpotGeometry::default();
        let to = SpotGeometry::new(8.0, 0.0, 0.0, 0.0);
        let step = StepVector::between(&from, &to, 0);
        assert_eq!(step.dx, 8.0);
    }

    #[test]
    fn test_finite_or_replaces_only_bad_fields() {
        let fallback = SpotGeometry::new(1.0, 2.0, 3.0, 4.0);
        let geom = SpotGeometry {
            x: f64::NAN,
            y: 20.0,
            radius: f64::INFINITY,
            blur: 40.0,
        }
        .finite_or(&fallback);
        assert_eq!(geom, SpotGeometry::new(1.0, 20.0, 3.0, 40.0));
    }

    #[test]
    fn test_total_extent() {
        let geom = SpotGeometry::new(0.0, 0.0, 300.0, 20.0);
        assert_eq!(geom.total_extent(), 320.0);
        assert!(!geom.is_degenerate());
    }

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance_squared_to(&b), 25.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
