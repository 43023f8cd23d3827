//! Geometry operations for boundary extraction

pub mod centroid;
pub mod holes;
pub mod hull;
pub mod projection;
pub mod simplify;

pub use centroid::collection_centroids;
pub use holes::close_holes;
pub use hull::{HullStrategy, alpha_shape, encompassing_polygon};
pub use simplify::{simplify_boundary, simplify_for_display};
