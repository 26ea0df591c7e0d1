//! Block classification and pixel geometry

pub mod classify;
pub mod geometry;
pub mod kind;

pub use classify::{classify, TerrainMatches};
pub use geometry::{
    to_grid_rectangles, to_rectangles, GeometryMode, MapGeometry, Rectangle, MAX_TILE_SIZE,
    TILE_SIZE,
};
pub use kind::{TerrainKind, GRASS_BLOCKS, WATER_BLOCKS};
