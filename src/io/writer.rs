//! Shapefile output
//!
//! Writes the boundary as a single-record polygon shapefile. The `.shp`,
//! `.shx` and `.dbf` parts come from the shapefile writer; the `.prj`
//! sidecar is a plain WKT text file written alongside so GIS tools pick up
//! the coordinate system.

use geo::MultiPolygon;
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use std::fs;
use std::path::Path;

use crate::crs::Crs;
use crate::error::{Error, Result};

/// Write `shape` as a one-record polygon shapefile at `path`, with a
/// `.prj` sidecar naming `crs`
pub fn save_polygon_shapefile(shape: &MultiPolygon<f64>, path: &Path, crs: Crs) -> Result<()> {
    let field_name =
        FieldName::try_from("id").map_err(|e| Error::FieldName(format!("{e:?}")))?;
    let table = TableWriterBuilder::new().add_numeric_field(field_name, 10, 0);
    let mut writer = shapefile::Writer::from_path(path, table)?;

    let record_shape = shapefile::Polygon::from(shape.clone());
    let mut record = Record::default();
    record.insert("id".to_string(), FieldValue::Numeric(Some(1.0)));
    writer.write_shape_and_record(&record_shape, &record)?;
    // headers are finalized when the writer goes away
    drop(writer);

    fs::write(path.with_extension("prj"), crs.esri_wkt())?;
    println!("Polygon saved to: {}", path.display());
    Ok(())
}
