//! Tile-grid disease classification over leaf and drone imagery.
//!
//! This crate provides:
//! - the [`TileClassifier`] seam for an externally trained model
//! - tile preprocessing from `image::RgbImage` into normalized tensors
//! - the [`scan`] pipeline: partition → classify per tile → detections
//! - a static advisory lookup keyed by class name
//!
//! ## Quickstart
//!
//! ```no_run
//! use leafscan::{scan, ClassScores, ClassifierError, ScanParams, TileTensor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::ImageReader::open("field.png")?.decode()?.to_rgb8();
//! let params = ScanParams::default();
//!
//! // Any model goes here; tests use plain closures.
//! let classifier = |_: &TileTensor| -> Result<ClassScores, ClassifierError> {
//!     Ok(ClassScores(vec![1.0, 0.0, 0.0]))
//! };
//!
//! let report = scan(&img, &classifier, &params)?;
//! println!(
//!     "{} tiles examined, {} detections",
//!     report.tiles_examined,
//!     report.detections.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `leafscan::core`: re-export of `leafscan-core` (grid, classes, geo).
//! - [`prepare_tile`] / [`TileTensor`]: tile crop/resize/normalize.
//! - [`scan`] / [`ScanParams`] / [`ScanReport`]: the pipeline entry point.
//! - [`advisory_for`]: treatment/guidance lookup per disease class.

pub use leafscan_core as core;

mod advisory;
mod classifier;
mod preprocess;
mod scanner;

pub use advisory::{advisory_for, Advisory};
pub use classifier::{ClassifierError, TileClassifier};
pub use preprocess::{prepare_tile, TileTensor};
pub use scanner::{classify_all, scan, ScanError, ScanParams, ScanReport};

pub use leafscan_core::{
    partition, to_detection, ClassCatalog, ClassScores, ClassificationResult, Detection, GeoRef,
    GridError, TileGrid, TileSpec, HEALTHY_INDEX,
};
