use serde::{Deserialize, Serialize};

/// Errors rejected before any partitioning work begins.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("tile size must be positive")]
    InvalidTileSize,
    #[error("image dimensions must be positive (width={width}, height={height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Pixel bounding box of one tile in the grid.
///
/// `right - left == bottom - top == tile_size` for every tile produced by
/// [`partition`]; partial trailing tiles at the right/bottom edges are never
/// emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    pub row: u32,
    pub col: u32,
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl TileSpec {
    /// Flat row-major index of this tile within a grid of `cols` columns.
    #[inline]
    pub fn index(&self, cols: u32) -> usize {
        (self.row * cols + self.col) as usize
    }
}

/// A regular grid of fixed-size, non-overlapping tiles.
///
/// Iteration is strictly row-major: `(0,0), (0,1), …, (0,cols-1), (1,0), …`.
/// Downstream coordinate synthesis relies on this ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    pub rows: u32,
    pub cols: u32,
    pub tile_size: u32,
}

impl TileGrid {
    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Tile at grid position `(row, col)`. Out-of-range positions yield `None`.
    pub fn tile(&self, row: u32, col: u32) -> Option<TileSpec> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let left = col * self.tile_size;
        let top = row * self.tile_size;
        Some(TileSpec {
            row,
            col,
            left,
            top,
            right: left + self.tile_size,
            bottom: top + self.tile_size,
        })
    }

    /// Iterate tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = TileSpec> + '_ {
        let grid = *self;
        (0..grid.rows).flat_map(move |r| (0..grid.cols).filter_map(move |c| grid.tile(r, c)))
    }
}

/// Partition a `width × height` raster into a grid of `tile_size × tile_size`
/// tiles.
///
/// `cols = width / tile_size`, `rows = height / tile_size` (floor division);
/// pixels beyond `cols*tile_size` / `rows*tile_size` are not covered. An image
/// smaller than one tile yields an empty grid, which is a valid outcome, not
/// an error.
pub fn partition(width: u32, height: u32, tile_size: u32) -> Result<TileGrid, GridError> {
    if tile_size == 0 {
        return Err(GridError::InvalidTileSize);
    }
    if width == 0 || height == 0 {
        return Err(GridError::EmptyImage { width, height });
    }
    Ok(TileGrid {
        rows: height / tile_size,
        cols: width / tile_size,
        tile_size,
    })
}
