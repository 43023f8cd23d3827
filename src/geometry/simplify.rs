//! Boundary simplification
//!
//! Two simplifiers for two jobs. The shipped boundary goes through
//! Visvalingam-Whyatt with topology preservation so rings cannot collapse
//! or cross after thinning. Map rendering only needs fewer vertices on
//! screen, where plain Douglas-Peucker is fine and cheaper.

use geo::{MultiPolygon, Simplify, SimplifyVwPreserve};

/// Simplify the final boundary without breaking ring topology.
/// The tolerance is in square degrees of triangle area.
pub fn simplify_boundary(shape: &MultiPolygon<f64>, tolerance: f64) -> MultiPolygon<f64> {
    shape.simplify_vw_preserve(&tolerance)
}

/// Simplify for display only. Tolerance is a Douglas-Peucker distance
/// in degrees.
pub fn simplify_for_display(shape: &MultiPolygon<f64>, tolerance: f64) -> MultiPolygon<f64> {
    shape.simplify(&tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, CoordsIter, LineString, Polygon};

    /// Unit square with redundant midpoints on every edge
    fn padded_square() -> MultiPolygon<f64> {
        let ring = LineString::from(vec![
            (0.0, 0.0),
            (0.5, 0.0),
            (1.0, 0.0),
            (1.0, 0.5),
            (1.0, 1.0),
            (0.5, 1.0),
            (0.0, 1.0),
            (0.0, 0.5),
            (0.0, 0.0),
        ]);
        MultiPolygon::new(vec![Polygon::new(ring, vec![])])
    }

    #[test]
    fn test_display_simplify_drops_collinear_points() {
        let simplified = simplify_for_display(&padded_square(), 0.01);
        assert!(simplified.coords_count() < padded_square().coords_count());
        assert!((simplified.unsigned_area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_simplify_drops_collinear_points() {
        let simplified = simplify_boundary(&padded_square(), 0.01);
        assert!(simplified.coords_count() < padded_square().coords_count());
        assert!((simplified.unsigned_area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_simplify_keeps_interior_rings() {
        let outer = LineString::from(vec![
            (0.0, 0.0),
            (4.0, 0.0),
            (8.0, 0.0),
            (8.0, 4.0),
            (8.0, 8.0),
            (4.0, 8.0),
            (0.0, 8.0),
            (0.0, 4.0),
            (0.0, 0.0),
        ]);
        let inner = LineString::from(vec![
            (3.0, 3.0),
            (5.0, 3.0),
            (5.0, 5.0),
            (3.0, 5.0),
            (3.0, 3.0),
        ]);
        let holed = MultiPolygon::new(vec![Polygon::new(outer, vec![inner])]);
        let simplified = simplify_boundary(&holed, 0.01);
        assert_eq!(simplified.0.len(), 1);
        assert_eq!(simplified.0[0].interiors().len(), 1);
        assert!((simplified.unsigned_area() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_simplify_is_idempotent() {
        let once = simplify_boundary(&padded_square(), 0.01);
        let twice = simplify_boundary(&once, 0.01);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_result_stays_nonempty() {
        let simplified = simplify_boundary(&padded_square(), 0.01);
        assert_eq!(simplified.0.len(), 1);
        assert!(simplified.0[0].exterior().0.len() >= 4);
    }
}
