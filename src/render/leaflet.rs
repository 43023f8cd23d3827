//! Leaflet map pages
//!
//! Renders a collection as a self-contained HTML page: a Leaflet map over
//! CARTO's light basemap with the geometries drawn in blue and a red dot on
//! each feature's centroid. Geometries are thinned before embedding so the
//! page stays small at full-world zoom. Everything but the basemap tiles
//! and the Leaflet assets is inlined.

use geo::Centroid;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
use std::fs;
use std::path::Path;

use crate::domain::CoastlineCollection;
use crate::error::{Error, Result};
use crate::geometry::simplify_for_display;

/// Initial map center, latitude then longitude
const MAP_CENTER: (f64, f64) = (20.0, 0.0);
/// Initial zoom level, whole world
const MAP_ZOOM: u32 = 2;
/// Douglas-Peucker tolerance applied before embedding, degrees
pub const DISPLAY_TOLERANCE: f64 = 0.01;

const SHAPE_COLOR: &str = "blue";
const SHAPE_WEIGHT: u32 = 2;
const MARKER_COLOR: &str = "red";

/// Render `collection` into a standalone Leaflet page at `path`
pub fn write_map(collection: &CoastlineCollection, path: &Path) -> Result<()> {
    let mut features = Vec::with_capacity(collection.len());
    let mut markers: Vec<[f64; 2]> = Vec::with_capacity(collection.len());

    for (index, feature) in collection.features.iter().enumerate() {
        let display = simplify_for_display(&feature.geometry, DISPLAY_TOLERANCE);
        let mut properties = serde_json::Map::new();
        properties.insert("id".to_string(), serde_json::json!(index));
        properties.insert("area_km2".to_string(), serde_json::json!(feature.area_km2));
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&display))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });

        // marker placement works fine on the raw degree-space centroid
        let centroid = feature
            .geometry
            .centroid()
            .ok_or(Error::EmptyGeometry { index })?;
        markers.push([centroid.y(), centroid.x()]);
    }

    let shapes = GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
    .to_string();
    let centroids = serde_json::json!(markers).to_string();

    let page = PAGE_TEMPLATE
        .replace("__LAT__", &MAP_CENTER.0.to_string())
        .replace("__LON__", &MAP_CENTER.1.to_string())
        .replace("__ZOOM__", &MAP_ZOOM.to_string())
        .replace("__SHAPE_COLOR__", SHAPE_COLOR)
        .replace("__SHAPE_WEIGHT__", &SHAPE_WEIGHT.to_string())
        .replace("__MARKER_COLOR__", MARKER_COLOR)
        .replace("__SHAPES__", &shapes)
        .replace("__CENTROIDS__", &centroids);
    fs::write(path, page)?;
    Ok(())
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>oceanhull map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
html, body, #map { height: 100%; margin: 0; }
</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([__LAT__, __LON__], __ZOOM__);
L.tileLayer('https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png', {
    attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors &copy; <a href="https://carto.com/attributions">CARTO</a>',
    subdomains: 'abcd',
    maxZoom: 20
}).addTo(map);
var shapes = __SHAPES__;
L.geoJSON(shapes, {
    style: {
        color: '__SHAPE_COLOR__',
        weight: __SHAPE_WEIGHT__,
        fillColor: '__SHAPE_COLOR__',
        fillOpacity: 0.2
    }
}).addTo(map);
var centroids = __CENTROIDS__;
centroids.forEach(function (latlng) {
    L.circleMarker(latlng, {
        radius: 5,
        color: '__MARKER_COLOR__',
        fillColor: '__MARKER_COLOR__',
        fillOpacity: 0.9
    }).addTo(map);
});
</script>
</body>
</html>
"#;
