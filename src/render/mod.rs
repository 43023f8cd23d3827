//! HTML map rendering

pub mod leaflet;

pub use leaflet::write_map;
