use image::RgbImage;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use leafscan_core::{
    partition, to_detection, ClassCatalog, ClassificationResult, Detection, GeoRef, GridError,
    TileGrid,
};

use crate::classifier::{ClassifierError, TileClassifier};
use crate::preprocess::prepare_tile;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by a scan run.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The injected classifier failed, or returned a malformed distribution,
    /// for the tile at `tile_index` (row-major). The run is aborted; no
    /// partial results are returned.
    #[error("classification failed for tile {tile_index}")]
    Classification {
        tile_index: usize,
        #[source]
        source: ClassifierError,
    },
}

/// Configuration for a scan run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanParams {
    /// Side length of the square tiles the image is partitioned into.
    pub tile_size: u32,
    /// Fixed input resolution of the classifier.
    pub input_size: u32,
    /// Placeholder row/col → lat/lon mapping for detections.
    pub georef: GeoRef,
    /// Classes the classifier predicts over; index 0 is healthy.
    pub catalog: ClassCatalog,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            tile_size: 224,
            input_size: 224,
            georef: GeoRef::default(),
            catalog: ClassCatalog::sugarcane(),
        }
    }
}

/// Output of a scan run.
///
/// `tiles_examined == rows * cols` and the detection count are both part of
/// the report the caller renders; an empty `detections` with a non-zero
/// `tiles_examined` means the field is healthy, while `tiles_examined == 0`
/// means the image was too small to tile. Both are success, not failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanReport {
    pub rows: u32,
    pub cols: u32,
    pub tiles_examined: u32,
    pub detections: Vec<Detection>,
}

/// Classify every tile of the grid, strictly in row-major order.
///
/// Exactly one synchronous classifier call per tile; output order matches
/// tile order. The first failure aborts the run with the failing tile's
/// index — tiles classified before it are discarded.
pub fn classify_all<C: TileClassifier + ?Sized>(
    img: &RgbImage,
    grid: &TileGrid,
    classifier: &C,
    params: &ScanParams,
) -> Result<Vec<ClassificationResult>, ScanError> {
    let mut results = Vec::with_capacity(grid.len());
    for (tile_index, tile) in grid.iter().enumerate() {
        let tensor = prepare_tile(img, &tile, params.input_size);
        let scores = classifier
            .classify(&tensor)
            .map_err(|source| ScanError::Classification { tile_index, source })?;
        let result = scores
            .into_result(params.catalog.len())
            .map_err(|e| ScanError::Classification {
                tile_index,
                source: Box::new(e),
            })?;
        debug!(
            "tile {}/{} (row={}, col={}): class={} confidence={:.3}",
            tile_index + 1,
            grid.len(),
            tile.row,
            tile.col,
            params.catalog.name(result.class_index).unwrap_or("?"),
            result.confidence
        );
        results.push(result);
    }
    Ok(results)
}

/// Run the full pipeline: partition → classify per tile → detections.
///
/// Stateless and deterministic: the same image and classifier yield the same
/// report. Healthy tiles are filtered out; an all-healthy or too-small image
/// yields an empty detection list, which the caller must treat as success.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, classifier, params), fields(width = img.width(), height = img.height(), tile_size = params.tile_size))
)]
pub fn scan<C: TileClassifier + ?Sized>(
    img: &RgbImage,
    classifier: &C,
    params: &ScanParams,
) -> Result<ScanReport, ScanError> {
    let grid = partition(img.width(), img.height(), params.tile_size)?;
    let results = classify_all(img, &grid, classifier, params)?;

    let detections: Vec<Detection> = grid
        .iter()
        .zip(results)
        .filter_map(|(tile, result)| to_detection(tile, result, &params.georef))
        .collect();

    info!(
        "scan complete: {} tiles examined, {} detections",
        grid.len(),
        detections.len()
    );

    Ok(ScanReport {
        rows: grid.rows,
        cols: grid.cols,
        tiles_examined: grid.len() as u32,
        detections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierError;
    use crate::preprocess::TileTensor;
    use image::{Rgb, RgbImage};
    use leafscan_core::ClassScores;

    fn healthy(_: &TileTensor) -> Result<ClassScores, ClassifierError> {
        Ok(ClassScores(vec![1.0, 0.0, 0.0]))
    }

    fn small_params(tile_size: u32) -> ScanParams {
        ScanParams {
            tile_size,
            input_size: tile_size,
            ..ScanParams::default()
        }
    }

    #[test]
    fn all_healthy_yields_empty_report() {
        let img = RgbImage::from_pixel(16, 16, Rgb([0, 128, 0]));
        let report = scan(&img, &healthy, &small_params(8)).unwrap();
        assert_eq!((report.rows, report.cols), (2, 2));
        assert_eq!(report.tiles_examined, 4);
        assert!(report.detections.is_empty());
    }

    #[test]
    fn image_too_small_is_success_with_zero_tiles() {
        let img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let report = scan(&img, &healthy, &small_params(8)).unwrap();
        assert_eq!(report.tiles_examined, 0);
        assert!(report.detections.is_empty());
    }

    #[test]
    fn zero_tile_size_is_rejected_up_front() {
        let img = RgbImage::from_pixel(16, 16, Rgb([0, 0, 0]));
        let mut params = small_params(8);
        params.tile_size = 0;
        let called = std::cell::Cell::new(false);
        let spy = |_: &TileTensor| -> Result<ClassScores, ClassifierError> {
            called.set(true);
            Ok(ClassScores(vec![1.0, 0.0, 0.0]))
        };
        let err = scan(&img, &spy, &params).unwrap_err();
        assert!(matches!(err, ScanError::Grid(GridError::InvalidTileSize)));
        assert!(!called.get());
    }

    #[test]
    fn failure_carries_row_major_tile_index() {
        // 40x8 with tile 8 -> 5 tiles in one row; fail on the 3rd.
        let img = RgbImage::from_pixel(40, 8, Rgb([0, 0, 0]));
        let count = std::cell::Cell::new(0usize);
        let flaky = |_: &TileTensor| -> Result<ClassScores, ClassifierError> {
            let i = count.get();
            count.set(i + 1);
            if i == 2 {
                Err("inference backend unavailable".into())
            } else {
                Ok(ClassScores(vec![1.0, 0.0, 0.0]))
            }
        };
        match scan(&img, &flaky, &small_params(8)) {
            Err(ScanError::Classification { tile_index, .. }) => assert_eq!(tile_index, 2),
            other => panic!("expected classification failure, got {other:?}"),
        }
    }

    #[test]
    fn malformed_scores_fail_the_run() {
        let img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
        let short = |_: &TileTensor| -> Result<ClassScores, ClassifierError> {
            Ok(ClassScores(vec![0.5, 0.5]))
        };
        assert!(matches!(
            scan(&img, &short, &small_params(8)),
            Err(ScanError::Classification { tile_index: 0, .. })
        ));
    }
}
