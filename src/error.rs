//! Error types for oceanhull

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for oceanhull operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("coastline dataset not found: {}", path.display())]
    MissingDataset { path: PathBuf },

    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("invalid dbase field name: {0}")]
    FieldName(String),

    #[error("cannot build a hull from {points} point(s): need at least 3 non-collinear points")]
    DegenerateHullInput { points: usize },

    #[error("alpha {alpha} rejects every Delaunay triangle; use a smaller alpha")]
    AlphaTooTight { alpha: f64 },

    #[error("feature {index} has an empty geometry, cannot take its centroid")]
    EmptyGeometry { index: usize },

    #[error("cannot triangulate point set: {0}")]
    PointInsertion(String),
}

impl From<spade::InsertionError> for Error {
    fn from(e: spade::InsertionError) -> Self {
        Error::PointInsertion(format!("{e:?}"))
    }
}

/// Result type alias for oceanhull operations
pub type Result<T> = std::result::Result<T, Error>;
