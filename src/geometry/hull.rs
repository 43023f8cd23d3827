//! Hull fitting over centroid point sets
//!
//! Two ways to draw an outer boundary around the filtered landmass
//! centroids. The alpha shape keeps every Delaunay triangle whose
//! circumradius is below `1/alpha`, which lets the outline hug concave
//! stretches and open basins; the convex strategy takes the plain convex
//! hull and carves the landmasses themselves back out of it.

use clap::ValueEnum;
use geo::{BooleanOps, ConvexHull, Coord, MultiPoint, MultiPolygon, Point, Polygon, Triangle};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::fmt;

use crate::error::{Error, Result};

/// How the outer boundary is fitted over the centroids
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HullStrategy {
    /// Alpha shape over the centroids
    Alpha,
    /// Convex hull over the centroids with the landmasses subtracted
    Convex,
}

impl fmt::Display for HullStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullStrategy::Alpha => write!(f, "alpha"),
            HullStrategy::Convex => write!(f, "convex"),
        }
    }
}

/// Alpha shape of a point set in degree space.
///
/// Triangulates the points and keeps the triangles whose circumradius is
/// under `1/alpha`, so larger alpha values bite deeper into the hull.
/// `alpha <= 0` degrades to the convex hull. Duplicate points are merged
/// by the triangulation.
pub fn alpha_shape(points: &[Point<f64>], alpha: f64) -> Result<MultiPolygon<f64>> {
    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    for point in points {
        triangulation.insert(Point2::new(point.x(), point.y()))?;
    }

    let faces: Vec<[Point2<f64>; 3]> = triangulation
        .inner_faces()
        .map(|face| face.positions())
        .collect();
    if faces.is_empty() {
        // fewer than 3 distinct points, or all collinear
        return Err(Error::DegenerateHullInput {
            points: points.len(),
        });
    }

    if alpha <= 0.0 {
        let hull = MultiPoint::from(points.to_vec()).convex_hull();
        return Ok(MultiPolygon::new(vec![hull]));
    }

    let radius_limit = 1.0 / alpha;
    let kept: Vec<Polygon<f64>> = faces
        .iter()
        .filter(|vertices| circumradius(vertices) < radius_limit)
        .map(|vertices| {
            Triangle::new(
                to_coord(vertices[0]),
                to_coord(vertices[1]),
                to_coord(vertices[2]),
            )
            .to_polygon()
        })
        .collect();
    if kept.is_empty() {
        return Err(Error::AlphaTooTight { alpha });
    }

    Ok(union_all(kept))
}

/// Convex hull of the centroids with every landmass outline subtracted.
///
/// The result is the water enclosed by the centroid ring. Landmasses that
/// cross the hull boundary clip it from the outside; ones fully inside
/// punch holes, and those holes are part of the product. Reports one
/// progress tick per subtracted landmass since large coastline sets make
/// this the slowest step of a run.
pub fn encompassing_polygon(
    centroids: &[Point<f64>],
    landmasses: &[MultiPolygon<f64>],
) -> Result<MultiPolygon<f64>> {
    if centroids.len() < 3 {
        return Err(Error::DegenerateHullInput {
            points: centroids.len(),
        });
    }
    let hull = MultiPoint::from(centroids.to_vec()).convex_hull();
    if hull.exterior().0.len() < 4 {
        // closed ring of a real polygon repeats its first coordinate
        return Err(Error::DegenerateHullInput {
            points: centroids.len(),
        });
    }

    let bar = ProgressBar::new(landmasses.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    bar.set_message("Removing landmasses");

    let mut ocean = MultiPolygon::new(vec![hull]);
    for landmass in landmasses {
        ocean = ocean.difference(landmass);
        bar.inc(1);
    }
    bar.finish();

    Ok(ocean)
}

fn to_coord(point: Point2<f64>) -> Coord<f64> {
    Coord {
        x: point.x,
        y: point.y,
    }
}

fn distance(a: Point2<f64>, b: Point2<f64>) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Circumradius via R = abc / 4K with K from Heron's formula.
/// Degenerate triangles get an infinite radius so the filter drops them.
fn circumradius(vertices: &[Point2<f64>; 3]) -> f64 {
    let a = distance(vertices[0], vertices[1]);
    let b = distance(vertices[1], vertices[2]);
    let c = distance(vertices[2], vertices[0]);
    let s = (a + b + c) / 2.0;
    let area_sq = s * (s - a) * (s - b) * (s - c);
    if area_sq <= 0.0 {
        return f64::INFINITY;
    }
    (a * b * c) / (4.0 * area_sq.sqrt())
}

/// Dissolve a triangle soup into its union in one overlay pass. The overlay
/// snaps coordinates to a fresh grid per operation, so cascading pairwise
/// unions makes adjacent triangles stop sharing edges exactly and the
/// result comes back fragmented.
fn union_all(parts: Vec<Polygon<f64>>) -> MultiPolygon<f64> {
    MultiPolygon::new(parts).union(&MultiPolygon::new(vec![]))
}
