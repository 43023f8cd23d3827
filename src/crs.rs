//! Coordinate reference system handling
//!
//! This tool only ever touches two systems: WGS84 geographic coordinates
//! (EPSG:4326, what GSHHS ships and what Leaflet expects) and WGS84 World
//! Mercator (EPSG:3395, planar meters for area and centroid math). The CRS
//! is therefore a closed enum rather than a general WKT carrier.

use std::fmt;

/// Coordinate reference system of a geometry or collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crs {
    /// EPSG:4326, longitude/latitude in degrees
    Wgs84,
    /// EPSG:3395, World Mercator, meters
    WorldMercator,
}

impl Crs {
    /// EPSG code of this system
    pub fn epsg(&self) -> u32 {
        match self {
            Crs::Wgs84 => 4326,
            Crs::WorldMercator => 3395,
        }
    }

    /// True for planar (projected) systems where lengths are in meters
    pub fn is_planar(&self) -> bool {
        matches!(self, Crs::WorldMercator)
    }

    /// ESRI WKT as written into a shapefile `.prj` sidecar
    pub fn esri_wkt(&self) -> &'static str {
        match self {
            Crs::Wgs84 => WKT_WGS84,
            Crs::WorldMercator => WKT_WORLD_MERCATOR,
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

const WKT_WGS84: &str = "GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",\
SPHEROID[\"WGS_1984\",6378137.0,298.257223563]],PRIMEM[\"Greenwich\",0.0],\
UNIT[\"Degree\",0.0174532925199433]]";

const WKT_WORLD_MERCATOR: &str = "PROJCS[\"WGS_1984_World_Mercator\",\
GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",\
SPHEROID[\"WGS_1984\",6378137.0,298.257223563]],PRIMEM[\"Greenwich\",0.0],\
UNIT[\"Degree\",0.0174532925199433]],PROJECTION[\"Mercator\"],\
PARAMETER[\"False_Easting\",0.0],PARAMETER[\"False_Northing\",0.0],\
PARAMETER[\"Central_Meridian\",0.0],PARAMETER[\"Standard_Parallel_1\",0.0],\
UNIT[\"Meter\",1.0]]";
