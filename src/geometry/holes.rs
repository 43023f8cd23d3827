//! Hole removal
//!
//! Hull fitting and landmass subtraction can leave enclosed pockets inside
//! a boundary polygon. For consumers that want a filled region instead,
//! `close_holes` rebuilds every part from its exterior ring alone.

use geo::{MultiPolygon, Polygon};

/// Drop every interior ring, keeping exteriors untouched
pub fn close_holes(shape: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(
        shape
            .iter()
            .map(|part| Polygon::new(part.exterior().clone(), Vec::new()))
            .collect(),
    )
}
