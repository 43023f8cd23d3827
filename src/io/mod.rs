//! Reading GSHHS datasets and writing shapefile products

pub mod reader;
pub mod writer;

pub use reader::{Resolution, load_coastline};
pub use writer::save_polygon_shapefile;
