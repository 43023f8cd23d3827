//! oceanhull - Derive a simplified world ocean boundary from GSHHS coastline data

pub mod config;
pub mod crs;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod io;
pub mod render;
