//! GSHHS coastline loading
//!
//! GSHHS ships one shapefile per resolution, named `GSHHS_{r}_L1.shp` where
//! `r` is a single letter and `L1` is the boundary-between-land-and-ocean
//! level. Only the `.shp` geometry file is read; the attribute table carries
//! nothing this tool needs.

use clap::ValueEnum;
use geo::MultiPolygon;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::crs::Crs;
use crate::domain::{CoastlineCollection, CoastlineFeature};
use crate::error::{Error, Result};
use crate::geometry::projection;

/// GSHHS dataset resolution, coarsest to finest
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum Resolution {
    #[value(name = "c", alias = "crude")]
    #[serde(rename = "c", alias = "crude")]
    Crude,
    #[value(name = "l", alias = "low")]
    #[serde(rename = "l", alias = "low")]
    Low,
    #[value(name = "i", alias = "intermediate")]
    #[serde(rename = "i", alias = "intermediate")]
    Intermediate,
    #[value(name = "h", alias = "high")]
    #[serde(rename = "h", alias = "high")]
    High,
    #[value(name = "f", alias = "full")]
    #[serde(rename = "f", alias = "full")]
    Full,
}

impl Resolution {
    /// The letter GSHHS uses in its file names
    pub fn code(&self) -> char {
        match self {
            Resolution::Crude => 'c',
            Resolution::Low => 'l',
            Resolution::Intermediate => 'i',
            Resolution::High => 'h',
            Resolution::Full => 'f',
        }
    }

    /// File name of the level-1 shapefile at this resolution
    pub fn file_name(&self) -> String {
        format!("GSHHS_{}_L1.shp", self.code())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Load every level-1 polygon at the given resolution from `data_dir`,
/// computing each feature's Mercator-plane area on the way in.
/// Feature order follows the file.
pub fn load_coastline(resolution: Resolution, data_dir: &Path) -> Result<CoastlineCollection> {
    let path = data_dir.join(resolution.file_name());
    if !path.exists() {
        return Err(Error::MissingDataset { path });
    }

    let shapes = shapefile::read_shapes_as::<_, shapefile::Polygon>(&path)?;
    let mut features = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let geometry: MultiPolygon<f64> = shape.into();
        let area_km2 = projection::planar_area_km2(&geometry);
        features.push(CoastlineFeature::new(geometry, area_km2));
    }
    Ok(CoastlineCollection::new(features, Crs::Wgs84))
}
