//! Core types for tile-grid leaf disease scanning.
//!
//! This crate is intentionally small and purely arithmetic. It does *not*
//! depend on any concrete image type or classifier backend: it knows how to
//! partition a raster of given dimensions into a regular grid of fixed-size
//! tiles, how to interpret a probability distribution over disease classes,
//! and how to map a tile's grid position to a placeholder coordinate.

mod classes;
mod detection;
mod geo;
mod grid;
mod logger;

pub use classes::{ClassCatalog, ClassScores, ClassificationResult, ScoresError, HEALTHY_INDEX};
pub use detection::{to_detection, Detection};
pub use geo::GeoRef;
pub use grid::{partition, GridError, TileGrid, TileSpec};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
