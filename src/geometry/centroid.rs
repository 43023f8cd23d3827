//! Centroid computation in the Mercator plane
//!
//! Centroids taken directly on longitude/latitude pairs drift toward the
//! equator because degrees of latitude shrink on the Mercator plane the
//! other way around. Each geometry is projected to EPSG:3395, the centroid
//! is taken there, and the point is unprojected back to degrees.

use geo::{Centroid, Point};

use crate::domain::CoastlineCollection;
use crate::error::{Error, Result};
use crate::geometry::projection;

/// Geographic centroids of every feature, in input order
pub fn collection_centroids(collection: &CoastlineCollection) -> Result<Vec<Point<f64>>> {
    let mut centroids = Vec::with_capacity(collection.len());
    for (index, feature) in collection.features.iter().enumerate() {
        let planar = projection::to_planar(&feature.geometry);
        let centroid = planar
            .centroid()
            .ok_or(Error::EmptyGeometry { index })?;
        centroids.push(projection::to_geographic(&centroid));
    }
    Ok(centroids)
}
