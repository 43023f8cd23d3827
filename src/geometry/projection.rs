//! WGS84 World Mercator projection (EPSG:3395)
//!
//! Converts between geographic coordinates in degrees and planar meters so
//! that areas and centroids can be computed with ordinary Euclidean math.
//! The forward ellipsoidal Mercator is
//!
//! ```text
//! x = a * lon
//! y = a * ln( tan(pi/4 + lat/2) * ((1 - e sin lat) / (1 + e sin lat))^(e/2) )
//! ```
//!
//! and the inverse latitude has no closed form, so it is recovered by
//! fixed-point iteration. Keeping the math local avoids pulling a native
//! projection stack into the build for the single projection we need.

use geo::{Area, Coord, MapCoords, MultiPolygon};

/// WGS84 semi-major axis in meters
const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 first eccentricity
const ECCENTRICITY: f64 = 0.081_819_190_842_622;

/// Convergence threshold for the inverse latitude iteration, radians
const CONVERGENCE: f64 = 1.0e-12;

/// Iteration cap for the inverse latitude recovery. Convergence takes a
/// handful of rounds; a NaN northing never converges at all, so the loop
/// must be bounded.
const MAX_ITERATIONS: usize = 16;

/// Project a single geographic coordinate (degrees) to World Mercator meters
pub fn forward(coord: Coord<f64>) -> Coord<f64> {
    let lon = coord.x.to_radians();
    let lat = coord.y.to_radians();
    let e = ECCENTRICITY;
    let con = ((1.0 - e * lat.sin()) / (1.0 + e * lat.sin())).powf(e / 2.0);
    Coord {
        x: SEMI_MAJOR_AXIS * lon,
        y: SEMI_MAJOR_AXIS * ((std::f64::consts::FRAC_PI_4 + lat / 2.0).tan() * con).ln(),
    }
}

/// Unproject a World Mercator coordinate (meters) back to degrees
pub fn inverse(coord: Coord<f64>) -> Coord<f64> {
    let e = ECCENTRICITY;
    let t = (-coord.y / SEMI_MAJOR_AXIS).exp();
    let mut lat = std::f64::consts::FRAC_PI_2 - 2.0 * t.atan();
    for _ in 0..MAX_ITERATIONS {
        let con = ((1.0 - e * lat.sin()) / (1.0 + e * lat.sin())).powf(e / 2.0);
        let next = std::f64::consts::FRAC_PI_2 - 2.0 * (t * con).atan();
        let converged = (next - lat).abs() < CONVERGENCE;
        lat = next;
        if converged {
            break;
        }
    }
    Coord {
        x: (coord.x / SEMI_MAJOR_AXIS).to_degrees(),
        y: lat.to_degrees(),
    }
}

/// Project a whole geometry from EPSG:4326 into EPSG:3395
pub fn to_planar<G>(geometry: &G) -> G
where
    G: MapCoords<f64, f64, Output = G>,
{
    geometry.map_coords(forward)
}

/// Unproject a whole geometry from EPSG:3395 back into EPSG:4326
pub fn to_geographic<G>(geometry: &G) -> G
where
    G: MapCoords<f64, f64, Output = G>,
{
    geometry.map_coords(inverse)
}

/// Mercator-plane area of a geographic multipolygon, in square kilometers
pub fn planar_area_km2(geometry: &MultiPolygon<f64>) -> f64 {
    to_planar(geometry).unsigned_area() / 1.0e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon, polygon};

    #[test]
    fn test_forward_origin_is_origin() {
        let p = forward(Coord { x: 0.0, y: 0.0 });
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_forward_easting_is_linear_in_longitude() {
        // x = a * lon regardless of latitude
        let expected = SEMI_MAJOR_AXIS * std::f64::consts::FRAC_PI_4;
        for lat in [0.0, 30.0, 60.0] {
            let p = forward(Coord { x: 45.0, y: lat });
            assert!((p.x - expected).abs() < 1e-3, "lat {lat}: {}", p.x);
        }
        assert!((expected - 5_009_377.085_697).abs() < 1e-3);
    }

    #[test]
    fn test_forward_northing_is_odd_in_latitude() {
        let north = forward(Coord { x: 10.0, y: 40.0 });
        let south = forward(Coord { x: 10.0, y: -40.0 });
        assert!((north.y + south.y).abs() < 1e-6);
    }

    #[test]
    fn test_forward_northing_below_spherical() {
        // The ellipsoidal northing at 45N sits slightly under the spherical
        // value a*ln(tan(pi/4 + phi/2)) = 5_621_521.5 m.
        let p = forward(Coord { x: 0.0, y: 45.0 });
        assert!(p.y < 5_621_521.5);
        assert!(p.y > 5.55e6 && p.y < 5.65e6, "northing {}", p.y);
    }

    #[test]
    fn test_roundtrip_recovers_degrees() {
        for lon in [-179.5, -60.0, 0.0, 33.3, 179.5] {
            for lat in [-80.0, -45.0, 0.0, 12.345, 80.0] {
                let back = inverse(forward(Coord { x: lon, y: lat }));
                assert!((back.x - lon).abs() < 1e-9, "lon {lon} -> {}", back.x);
                assert!((back.y - lat).abs() < 1e-9, "lat {lat} -> {}", back.y);
            }
        }
    }

    #[test]
    fn test_inverse_propagates_non_finite_northing() {
        let p = inverse(Coord { x: 0.0, y: f64::NAN });
        assert!(p.y.is_nan());
        assert!(p.x.abs() < 1e-9);
    }

    #[test]
    fn test_geometry_roundtrip() {
        let poly: Polygon<f64> = polygon![
            (x: 10.0, y: 50.0),
            (x: 11.0, y: 50.0),
            (x: 11.0, y: 51.0),
            (x: 10.0, y: 51.0),
            (x: 10.0, y: 50.0),
        ];
        let back: Polygon<f64> = to_geographic(&to_planar(&poly));
        let orig: Vec<_> = poly.exterior().coords().collect();
        let round: Vec<_> = back.exterior().coords().collect();
        for (a, b) in orig.iter().zip(round.iter()) {
            assert!((a.x - b.x).abs() < 1e-9);
            assert!((a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equator_square_area() {
        // A 1x1 degree square at the equator is about 12_364 km2 on the
        // ellipsoid; Mercator is conformal there so the planar figure is
        // close at low latitudes.
        let square: Polygon<f64> = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        let mp = MultiPolygon::new(vec![square]);
        let area = planar_area_km2(&mp);
        assert!(area > 12_000.0 && area < 12_600.0, "area {area}");
    }

    #[test]
    fn test_area_sums_over_parts() {
        let a: Polygon<f64> = polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0),
        ];
        let b: Polygon<f64> = polygon![
            (x: 5.0, y: 0.0), (x: 6.0, y: 0.0), (x: 6.0, y: 1.0), (x: 5.0, y: 1.0),
        ];
        let one = planar_area_km2(&MultiPolygon::new(vec![a.clone()]));
        let two = planar_area_km2(&MultiPolygon::new(vec![a, b]));
        assert!((two - 2.0 * one).abs() < 1.0);
    }

    #[test]
    fn test_hole_subtracts_from_area() {
        let outer = LineString::from(vec![
            (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0),
        ]);
        let inner = LineString::from(vec![
            (0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75), (0.25, 0.25),
        ]);
        let solid = MultiPolygon::new(vec![Polygon::new(outer.clone(), vec![])]);
        let holed = MultiPolygon::new(vec![Polygon::new(outer, vec![inner])]);
        let ratio = planar_area_km2(&holed) / planar_area_km2(&solid);
        assert!((ratio - 0.75).abs() < 0.01, "ratio {ratio}");
    }
}
