//! Domain types for coastline data

pub mod coast;

pub use coast::{CoastlineCollection, CoastlineFeature};
