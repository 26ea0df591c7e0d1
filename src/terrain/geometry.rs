use crate::error::{Error, Result};
use crate::rom::MapId;

/// Edge length of one map block in output pixels
pub const TILE_SIZE: u32 = 32;

/// Largest tile size whose far edge still fits in `u32` on a 255-block map
pub const MAX_TILE_SIZE: u32 = u32::MAX / 256;

/// Pixel-space box covering one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Rectangle {
    pub fn square(x1: u32, y1: u32, size: u32) -> Self {
        Self { x1, y1, x2: x1 + size, y2: y1 + size }
    }
}

/// How a matched block is placed on the pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryMode {
    /// Position comes from the block's rank in the match list:
    /// `x = k mod width`, `y = k mod height`. This is the layout existing
    /// data sets were produced with.
    #[default]
    MatchOrder,
    /// Position comes from the block's own index in the map:
    /// `x = index mod width`, `y = index / width`.
    Grid,
}

/// Rectangles for a list of matched blocks, placed by match order.
///
/// `width` and `height` must be non-zero.
pub fn to_rectangles(
    indices: &[usize],
    width: usize,
    height: usize,
    tile_size: u32,
) -> Vec<Rectangle> {
    (0..indices.len())
        .map(|k| {
            let x1 = (k % width) as u32 * tile_size;
            let y1 = (k % height) as u32 * tile_size;
            Rectangle::square(x1, y1, tile_size)
        })
        .collect()
}

/// Rectangles for a list of matched blocks, placed at their map position.
///
/// `width` must be non-zero.
pub fn to_grid_rectangles(indices: &[usize], width: usize, tile_size: u32) -> Vec<Rectangle> {
    indices
        .iter()
        .map(|&index| {
            let x1 = (index % width) as u32 * tile_size;
            let y1 = (index / width) as u32 * tile_size;
            Rectangle::square(x1, y1, tile_size)
        })
        .collect()
}

/// Validated dimensions of a map, ready to turn block indices into pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapGeometry {
    width: usize,
    height: usize,
    tile_size: u32,
    mode: GeometryMode,
}

impl MapGeometry {
    pub fn new(
        map_id: MapId,
        width: u8,
        height: u8,
        tile_size: u32,
        mode: GeometryMode,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidMapDimensions { map_id, width, height });
        }
        if tile_size == 0 || tile_size > MAX_TILE_SIZE {
            return Err(Error::InvalidTileSize { tile_size, max: MAX_TILE_SIZE });
        }
        Ok(Self {
            width: width as usize,
            height: height as usize,
            tile_size,
            mode,
        })
    }

    pub fn rectangles(&self, indices: &[usize]) -> Vec<Rectangle> {
        match self.mode {
            GeometryMode::MatchOrder => {
                to_rectangles(indices, self.width, self.height, self.tile_size)
            }
            GeometryMode::Grid => to_grid_rectangles(indices, self.width, self.tile_size),
        }
    }
}
