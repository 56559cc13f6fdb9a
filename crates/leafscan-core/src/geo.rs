use serde::{Deserialize, Serialize};

/// Placeholder linear mapping from tile grid position to latitude/longitude.
///
/// This is *not* real georeferencing: the coordinate is synthesized as
/// `origin + index * step` so that downstream reporting has something to put
/// on a map. Replacing it with pixel→GPS mapping derived from orthomosaic
/// metadata only requires swapping this type at the pipeline boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoRef {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub lat_step: f64,
    pub lon_step: f64,
}

impl GeoRef {
    /// Synthesize the coordinate for a tile at grid position `(row, col)`.
    #[inline]
    pub fn locate(&self, row: u32, col: u32) -> (f64, f64) {
        (
            self.origin_lat + f64::from(row) * self.lat_step,
            self.origin_lon + f64::from(col) * self.lon_step,
        )
    }
}

impl Default for GeoRef {
    /// Sample plot near Pune used by the original field trials.
    fn default() -> Self {
        Self {
            origin_lat: 18.5204,
            origin_lon: 73.8567,
            lat_step: 0.0005,
            lon_step: 0.0005,
        }
    }
}
