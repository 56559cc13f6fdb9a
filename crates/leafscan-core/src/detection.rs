use serde::{Deserialize, Serialize};

use crate::classes::ClassificationResult;
use crate::geo::GeoRef;
use crate::grid::TileSpec;

/// A tile whose classification indicates a non-healthy class, paired with its
/// synthesized location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub tile: TileSpec,
    pub class_index: usize,
    pub confidence: f32,
    pub lat: f64,
    pub lon: f64,
}

/// Turn one classified tile into a detection.
///
/// Healthy tiles (`class_index == HEALTHY_INDEX`) yield `None`. The caller is
/// expected to have validated `result` against the catalog already.
pub fn to_detection(tile: TileSpec, result: ClassificationResult, geo: &GeoRef) -> Option<Detection> {
    if result.is_healthy() {
        return None;
    }
    let (lat, lon) = geo.locate(tile.row, tile.col);
    Some(Detection {
        tile,
        class_index: result.class_index,
        confidence: result.confidence,
        lat,
        lon,
    })
}
