//! Inside/outside classification of pointer positions.

use spotlight_model::SpotGeometry;

/// Where a pointer landed relative to the lit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// Within `radius` of the center, boundary included.
    Spot,
    /// Anywhere else on the mask, including the blurred edge.
    Mask,
}

/// Classify `(px, py)` against `geometry`.
pub fn hit_test(geometry: &SpotGeometry, px: f64, py: f64) -> HitRegion {
    if geometry.contains(px, py) {
        HitRegion::Spot
    } else {
        HitRegion::Mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_counts_as_spot() {
        let geom = SpotGeometry::new(100.0, 100.0, 50.0, 20.0);
        assert_eq!(hit_test(&geom, 150.0, 100.0), HitRegion::Spot);
        assert_eq!(hit_test(&geom, 130.0, 140.0), HitRegion::Spot);
    }

    #[test]
    fn test_blur_ring_is_mask() {
        let geom = SpotGeometry::new(100.0, 100.0, 50.0, 20.0);
        assert_eq!(hit_test(&geom, 160.0, 100.0), HitRegion::Mask);
    }

    #[test]
    fn test_zero_radius_hits_only_center() {
        let geom = SpotGeometry::new(10.0, 10.0, 0.0, 5.0);
        assert_eq!(hit_test(&geom, 10.0, 10.0), HitRegion::Spot);
        assert_eq!(hit_test(&geom, 10.5, 10.0), HitRegion::Mask);
    }
}
