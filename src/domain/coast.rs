//! Coastline features and collections
//!
//! A feature is one GSHHS level-1 polygon (a landmass outline) together with
//! its Mercator-plane area. Geometries stay in geographic coordinates; the
//! area is computed once on load so that filtering never reprojects.

use geo::MultiPolygon;

use crate::crs::Crs;
use crate::geometry::projection;

/// One landmass outline with its precomputed area
#[derive(Debug, Clone)]
pub struct CoastlineFeature {
    /// Outline in the collection's CRS
    pub geometry: MultiPolygon<f64>,
    /// Area measured in the EPSG:3395 plane, square kilometers
    pub area_km2: f64,
}

impl CoastlineFeature {
    pub fn new(geometry: MultiPolygon<f64>, area_km2: f64) -> Self {
        Self { geometry, area_km2 }
    }
}

/// An ordered set of coastline features sharing one CRS
#[derive(Debug, Clone)]
pub struct CoastlineCollection {
    pub features: Vec<CoastlineFeature>,
    pub crs: Crs,
}

impl CoastlineCollection {
    pub fn new(features: Vec<CoastlineFeature>, crs: Crs) -> Self {
        Self { features, crs }
    }

    /// Wrap a single geographic geometry as a one-feature collection,
    /// computing its area on the way in
    pub fn wrap(geometry: MultiPolygon<f64>, crs: Crs) -> Self {
        let area_km2 = projection::planar_area_km2(&geometry);
        Self {
            features: vec![CoastlineFeature::new(geometry, area_km2)],
            crs,
        }
    }

    /// Keep only features whose area falls inside [min_km2, max_km2],
    /// preserving input order. Both bounds are inclusive.
    pub fn filter_by_area(&self, min_km2: f64, max_km2: f64) -> Self {
        let features = self
            .features
            .iter()
            .filter(|f| f.area_km2 >= min_km2 && f.area_km2 <= max_km2)
            .cloned()
            .collect();
        Self {
            features,
            crs: self.crs,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{MultiPolygon, Polygon, polygon};

    fn feature(area_km2: f64) -> CoastlineFeature {
        let square: Polygon<f64> = polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0),
        ];
        CoastlineFeature::new(MultiPolygon::new(vec![square]), area_km2)
    }

    #[test]
    fn test_filter_keeps_inclusive_bounds() {
        let collection = CoastlineCollection::new(
            vec![
                feature(100.0),
                feature(300.0),
                feature(5_000.0),
                feature(10_000.0),
                feature(20_000.0),
            ],
            Crs::Wgs84,
        );
        let kept = collection.filter_by_area(300.0, 10_000.0);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept.features[0].area_km2, 300.0);
        assert_eq!(kept.features[1].area_km2, 5_000.0);
        assert_eq!(kept.features[2].area_km2, 10_000.0);
        assert_eq!(kept.crs, Crs::Wgs84);
        // source is untouched
        assert_eq!(collection.len(), 5);
    }

    #[test]
    fn test_filter_can_empty_a_collection() {
        let collection = CoastlineCollection::new(vec![feature(50.0)], Crs::Wgs84);
        let kept = collection.filter_by_area(300.0, 10_000.0);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_wrap_computes_area() {
        let square: Polygon<f64> = polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0),
        ];
        let collection =
            CoastlineCollection::wrap(MultiPolygon::new(vec![square]), Crs::Wgs84);
        assert_eq!(collection.len(), 1);
        let area = collection.features[0].area_km2;
        assert!(area > 12_000.0 && area < 12_600.0, "area {area}");
    }
}
